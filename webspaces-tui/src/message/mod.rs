//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，所有的用户操作和后台结果都通过 Message 来表达。
//!
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod content;        // 内容面板（表单）子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航外壳子消息
//!         mod remote;         // 后台请求结果
//!
//!     键盘事件在 src/event/handler.rs 中被翻译成 AppMessage；
//!     后台请求结果由 Backend 层包装成 AppMessage::Remote 送回主循环。
//!     两者最终都交给 src/update/mod.rs 处理。
//!

mod app;
mod content;
mod modal;
mod navigation;
mod remote;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
pub use remote::{RemoteMessage, RemoteResult};
