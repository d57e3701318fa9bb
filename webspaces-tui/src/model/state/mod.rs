//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod configs;
mod dashboard;
mod domains;
mod form;
mod login;
mod modal;
mod page;
mod ports;
mod setup;
mod terminal;

pub use configs::ConfigsState;
pub use dashboard::{DashboardAction, DashboardState};
pub use domains::DomainsState;
pub use form::{FieldValue, Form};
pub use login::LoginState;
pub use modal::{Modal, ModalState};
pub use page::PageState;
pub use ports::PortsState;
pub use setup::{ChooseOsState, CreateRootState};
pub use terminal::TerminalState;
