//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing-subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!     · Raw Mode（原始模式）：按键立即生效、不回显，能捕获 Ctrl+C 等组合键
//!     · Alternate Screen（备用屏幕）：退出后恢复原来的终端内容
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal，
//!           否则终端会保持在原始模式。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
