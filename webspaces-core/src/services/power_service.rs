//! 电源与删除服务

use std::sync::Arc;

use webspaces_gateway::PowerAction;

use crate::effect::ViewEffect;
use crate::router::paths;
use crate::services::ServiceContext;

/// 电源服务：启动、重启、关机、删除 webspace
pub struct PowerService {
    ctx: Arc<ServiceContext>,
}

impl PowerService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 成功时返回执行的动作，由视图重新读取状态
    pub async fn apply(&self, action: PowerAction) -> ViewEffect<PowerAction> {
        let envelope = self.ctx.api.set_power(action).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[power] {action:?} accepted");
            ViewEffect::Update(action)
        })
    }

    /// 删除 webspace；成功后回到欢迎页重新走向导
    ///
    /// 调用方负责事先确认。
    pub async fn delete(&self) -> ViewEffect<()> {
        let envelope = self.ctx.api.delete_webspace().await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[power] Webspace deleted");
            ViewEffect::redirect(paths::WELCOME)
        })
    }
}
