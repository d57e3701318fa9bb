//! Webspaces TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网关请求 (`backend/`)
//!
//! Update 不直接调用后端，而是返回 `Request`；主循环把它交给 Backend，
//! 结果以 `AppMessage::Remote` 的形式回到 Update。
//!
//! src/main.rs
//! 程序入口
//!
//!     webspaces [PATH]
//!
//! PATH 为启动时打开的路径，默认为 `/`。
//!
//! 启动顺序：
//!     1. 初始化文件日志
//!     2. 加载配置（文件 + 环境变量覆盖），应用主题
//!     3. 构建路由表和视图注册表，并校验路由引用的视图都已注册
//!     4. 创建 Backend（HTTP 网关 + tokio 运行时）
//!     5. 初始化终端，运行主循环，恢复终端
//!

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use webspaces_core::{Router, default_routes, paths};

use backend::{ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（失败不影响运行）
    if let Err(err) = init_logging() {
        eprintln!("warning: logging disabled: {err:#}");
    }

    // 2. 配置
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    view::theme::set_theme(config.theme);

    // 3. 路由表 + 视图注册表
    let router = Router::new(default_routes())?;
    let registry = view::build_registry()?;
    registry.ensure_covers(&router)?;

    // 4. 后端
    let mut backend = CoreService::new(&config)?;
    let initial_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| paths::HOME.to_string());

    // 5. 终端 + 主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(router);
    let result = app::run(&mut terminal, &mut app, &registry, &mut backend, &initial_path);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        log::error!("[main] {err:#}");
    }
    result
}
