//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成 AppMessage
//!
//!     src/event/mod.rs
//!         mod handler;        // poll_event / handle_event
//!         mod keymap;         // 默认快捷键
//!
//!     handle_event 只读取 App，不修改它；翻译规则：
//!         - 弹窗打开时，按键全部交给弹窗
//!         - Ctrl+C / Alt 组合键全局有效
//!         - 正在编辑文本字段时，普通字符进入字段，否则作为单字母快捷键
//!         - 其余按键按焦点（外壳 / 内容）分发
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
