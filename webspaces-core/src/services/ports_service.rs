//! 端口映射服务

use std::sync::Arc;

use webspaces_gateway::{PortMap, PortMapping};

use crate::effect::ViewEffect;
use crate::forms::PortsForm;
use crate::services::ServiceContext;

/// 端口映射服务
pub struct PortsService {
    ctx: Arc<ServiceContext>,
}

impl PortsService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 挂载时读取当前的端口转发（外部端口 -> 内部端口）
    pub async fn fetch(&self) -> ViewEffect<PortMap> {
        let envelope = self.ctx.api.get_ports().await;
        ViewEffect::from_envelope(envelope, ViewEffect::Update)
    }

    /// 删除一条转发；成功时返回其外部端口
    pub async fn remove(&self, external: u16) -> ViewEffect<u16> {
        let envelope = self.ctx.api.remove_port(external).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[ports] Removed forward from {external}");
            ViewEffect::Update(external)
        })
    }

    /// 校验四个端口后提交；任一端口无效时不发请求
    pub async fn submit(&self, form: &PortsForm) -> ViewEffect<PortMapping> {
        let ports = match form.parse() {
            Ok(ports) => ports,
            Err(e) => return e.into(),
        };

        let envelope = self.ctx.api.submit_ports(&ports).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!(
                "[ports] Mapped {}->{}, {}->{}",
                ports.external1,
                ports.internal1,
                ports.external2,
                ports.internal2
            );
            ViewEffect::Update(ports)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockWebspaceApi, context_with};
    use webspaces_gateway::{Envelope, MSG_PORTS_REJECTED};

    fn form() -> PortsForm {
        PortsForm {
            external1: "20000".into(),
            external2: "20001".into(),
            internal1: "80".into(),
            internal2: "443".into(),
        }
    }

    #[tokio::test]
    async fn valid_form_is_submitted() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        let effect = PortsService::new(ctx).submit(&form()).await;
        assert!(matches!(effect, ViewEffect::Update(p) if p.internal1 == 80));
        assert_eq!(
            api.calls().await,
            vec!["submit_ports 20000 20001 80 443".to_string()]
        );
    }

    #[tokio::test]
    async fn invalid_port_never_reaches_backend() {
        let (ctx, api) = context_with(MockWebspaceApi::new());
        let mut bad = form();
        bad.internal1 = "http".into();

        let effect = PortsService::new(ctx).submit(&bad).await;
        assert!(matches!(effect, ViewEffect::Alert(_)));
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn fetch_lists_forwards() {
        let api = MockWebspaceApi::new();
        api.set_port_map(Envelope::Ok(PortMap::from([(20000, 80)])))
            .await;
        let (ctx, _) = context_with(api);

        assert_eq!(
            PortsService::new(ctx).fetch().await,
            ViewEffect::Update(PortMap::from([(20000, 80)]))
        );
    }

    #[tokio::test]
    async fn remove_sends_external_port() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        assert_eq!(
            PortsService::new(ctx).remove(20001).await,
            ViewEffect::Update(20001)
        );
        assert_eq!(api.calls().await, vec!["remove_port 20001".to_string()]);
    }

    #[tokio::test]
    async fn rejection_is_an_alert() {
        let api = MockWebspaceApi::new();
        api.set_ports(Envelope::rejected(MSG_PORTS_REJECTED)).await;
        let (ctx, _) = context_with(api);

        let effect = PortsService::new(ctx).submit(&form()).await;
        assert_eq!(effect, ViewEffect::Alert(MSG_PORTS_REJECTED.into()));
    }
}
