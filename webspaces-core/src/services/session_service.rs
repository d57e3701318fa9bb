//! 登录服务

use std::sync::Arc;

use webspaces_gateway::LoginKind;

use crate::effect::ViewEffect;
use crate::error::CoreError;
use crate::router::paths;
use crate::services::ServiceContext;

/// 登录服务
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 首次登录进入向导，老用户直接进入仪表盘；被拒绝时只提示，不导航
    pub async fn login(&self, email: &str, password: &str) -> ViewEffect<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return CoreError::Validation("Email and password are required".to_string()).into();
        }

        let envelope = self.ctx.api.login(email, password).await;
        ViewEffect::from_envelope(envelope, |kind| {
            log::info!("[session] Logged in as {email} ({kind:?})");
            match kind {
                LoginKind::FirstLogin => ViewEffect::redirect(paths::WELCOME),
                LoginKind::Returning => ViewEffect::redirect(paths::DASHBOARD),
            }
        })
    }
}
