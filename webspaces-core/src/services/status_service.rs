//! 仪表盘状态服务

use std::sync::Arc;

use webspaces_gateway::WebspaceState;

use crate::effect::ViewEffect;
use crate::services::ServiceContext;

/// 仪表盘状态服务
pub struct StatusService {
    ctx: Arc<ServiceContext>,
}

impl StatusService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 挂载时读取运行状态和资源用量（CPU 为累计纳秒）
    pub async fn fetch(&self) -> ViewEffect<WebspaceState> {
        let envelope = self.ctx.api.state().await;
        ViewEffect::from_envelope(envelope, ViewEffect::Update)
    }
}
