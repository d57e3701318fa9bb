//! 视图服务层：把一次网关调用的结果转换为视图效果

mod configs_service;
mod console_service;
mod domain_service;
mod ports_service;
mod power_service;
mod session_service;
mod setup_service;
mod status_service;

pub use configs_service::ConfigsService;
pub use console_service::ConsoleService;
pub use domain_service::{DomainService, append_domain};
pub use ports_service::PortsService;
pub use power_service::PowerService;
pub use session_service::SessionService;
pub use setup_service::SetupService;
pub use status_service::StatusService;

use std::sync::Arc;

use webspaces_gateway::WebspaceApi;

/// 服务上下文 - 持有所有依赖
///
/// 应用层创建此上下文，并注入具体的网关实现。
pub struct ServiceContext {
    /// 后端 API
    pub api: Arc<dyn WebspaceApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn WebspaceApi>) -> Self {
        Self { api }
    }
}
