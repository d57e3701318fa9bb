//!
//! src/backend/mod.rs
//! Backend 层：与后端通信
//!
//! Backend 层与 UI 完全解耦。Update 层只描述"要做什么"（`Request`），
//! 这里负责真正执行，并把结果包装成 `RemoteMessage` 交回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // 请求描述（Command + 挂载代数）
//!         mod config_service;     // 配置文件加载/保存
//!         mod core_service;       // 核心服务入口：运行时 + 视图服务
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在 Configs 页按 Enter
//!         ↓
//!     update 返回 Request { generation, Command::SubmitConfigs(..) }
//!         ↓
//!     app.rs 调用 CoreService::dispatch（在 tokio 运行时上执行）
//!         ↓
//!     ConfigsService → WebspaceApi → POST /api/submitConfigs
//!         ↓
//!     结果（ViewEffect）经 mpsc 通道回到主循环
//!         ↓
//!     update 处理 AppMessage::Remote，更新 Model
//!

mod command;
mod config_service;
mod core_service;

pub use command::{Command, Request};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
