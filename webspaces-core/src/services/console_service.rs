//! 控制台日志服务

use std::sync::Arc;

use crate::effect::ViewEffect;
use crate::services::ServiceContext;

/// 控制台日志服务
pub struct ConsoleService {
    ctx: Arc<ServiceContext>,
}

impl ConsoleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 读取完整的控制台日志（纯文本）
    pub async fn fetch(&self) -> ViewEffect<String> {
        let envelope = self.ctx.api.console_log().await;
        ViewEffect::from_envelope(envelope, ViewEffect::Update)
    }

    pub async fn clear(&self) -> ViewEffect<()> {
        let envelope = self.ctx.api.clear_console_log().await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[console] Log cleared");
            ViewEffect::Update(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockWebspaceApi, context_with};
    use webspaces_gateway::{Envelope, GatewayError};

    #[tokio::test]
    async fn fetch_returns_log_text() {
        let api = MockWebspaceApi::new();
        api.set_console_log(Envelope::Ok("boot ok\nlogin: ".into()))
            .await;
        let (ctx, _) = context_with(api);

        assert_eq!(
            ConsoleService::new(ctx).fetch().await,
            ViewEffect::Update("boot ok\nlogin: ".to_string())
        );
    }

    #[tokio::test]
    async fn clear_failure_is_a_notification() {
        let api = MockWebspaceApi::new();
        api.set_clear_console_log(Envelope::Error(GatewayError::NetworkError {
            endpoint: "/api/log".into(),
            detail: "refused".into(),
        }))
        .await;
        let (ctx, api) = context_with(api);

        assert!(matches!(
            ConsoleService::new(ctx).clear().await,
            ViewEffect::Notify(_)
        ));
        assert_eq!(api.calls().await, vec!["clear_console_log".to_string()]);
    }
}
