//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，所有状态变更都通过 Update 层来触发。
//!
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航外壳状态
//!
//!         pub mod state;      // 当前视图的数据状态、弹窗状态
//!
//!     路由结果 `Resolution` 相当于门牌号，只说明当前挂载了哪个视图；
//!     `PageState` 是这个视图的内容，每次挂载都会重新创建。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 挂载代数（generation）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每次导航 generation 加一。后台请求带着发起时的代数返回，
//!     代数不一致说明视图已被卸载，结果直接丢弃：
//!
//!         Configs 挂载 (gen=3) → 发起 getConfigs
//!             ↓
//!         用户跳到 Domains (gen=4)
//!             ↓
//!         getConfigs 返回 (gen=3) → 丢弃
//!
//!     写操作例外：离开视图不清除它的忙碌标记，过期的结果仍会结束标记，
//!     并记下后端已接受的向导进度，只是不再作用于新视图。
//!

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::{App, StatusKind};
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use state::{FieldValue, Form, Modal, ModalState, PageState};
