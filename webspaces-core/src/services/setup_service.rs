//! 设置向导服务：选择操作系统、设置 root 密码

use std::sync::Arc;

use webspaces_gateway::{MSG_PASSWORD_MISMATCH, OsChoice};

use crate::effect::ViewEffect;
use crate::error::CoreError;
use crate::services::ServiceContext;
use crate::wizard::WizardStep;

/// 设置向导服务
pub struct SetupService {
    ctx: Arc<ServiceContext>,
}

impl SetupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 提交所选系统；后端接受后前进到 CreateRootPassword
    pub async fn choose_os(&self, os: OsChoice) -> ViewEffect<()> {
        let envelope = self.ctx.api.choose_os(os).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[setup] Operating system set to {} ({})", os.name(), os.id());
            advance(WizardStep::ChooseOs)
        })
    }

    /// 两次输入不一致时本地拒绝，不发请求；后端接受后前进到 Congratulations
    pub async fn set_root_password(
        &self,
        password: &str,
        confirm: &str,
        ssh: &str,
    ) -> ViewEffect<()> {
        if password.is_empty() {
            return CoreError::Validation("Password must not be empty".to_string()).into();
        }
        if password != confirm {
            return CoreError::Validation(MSG_PASSWORD_MISMATCH.to_string()).into();
        }

        let envelope = self
            .ctx
            .api
            .set_root_password(password, confirm, ssh.trim())
            .await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[setup] Root password set");
            advance(WizardStep::CreateRootPassword)
        })
    }
}

fn advance(step: WizardStep) -> ViewEffect<()> {
    step.next()
        .map_or(ViewEffect::Update(()), |next| ViewEffect::redirect(next.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockWebspaceApi, context_with};
    use webspaces_gateway::{Envelope, MSG_OS_REJECTED};

    #[tokio::test]
    async fn accepted_os_moves_to_create_root() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        let effect = SetupService::new(ctx).choose_os(OsChoice::Arch).await;
        assert_eq!(effect, ViewEffect::Redirect("/create-root".into()));
        assert_eq!(api.calls().await, vec!["choose_os 1".to_string()]);
    }

    #[tokio::test]
    async fn ubuntu_submits_six() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        SetupService::new(ctx).choose_os(OsChoice::Ubuntu).await;
        assert_eq!(api.calls().await, vec!["choose_os 6".to_string()]);
    }

    #[tokio::test]
    async fn rejected_os_stays() {
        let api = MockWebspaceApi::new();
        api.set_os(Envelope::rejected(MSG_OS_REJECTED)).await;
        let (ctx, _) = context_with(api);

        let effect = SetupService::new(ctx).choose_os(OsChoice::Fedora).await;
        assert_eq!(effect, ViewEffect::Alert(MSG_OS_REJECTED.into()));
    }

    #[tokio::test]
    async fn mismatch_is_caught_before_the_request() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        let effect = SetupService::new(ctx)
            .set_root_password("a", "b", "")
            .await;
        assert_eq!(effect, ViewEffect::Alert("Passwords do not match".into()));
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn backend_mismatch_is_also_an_alert() {
        let api = MockWebspaceApi::new();
        api.set_root(Envelope::rejected(MSG_PASSWORD_MISMATCH)).await;
        let (ctx, _) = context_with(api);

        let effect = SetupService::new(ctx)
            .set_root_password("a", "a", "")
            .await;
        assert_eq!(effect, ViewEffect::Alert(MSG_PASSWORD_MISMATCH.into()));
    }

    #[tokio::test]
    async fn matching_passwords_move_to_congrats() {
        let (ctx, api) = context_with(MockWebspaceApi::new());

        let effect = SetupService::new(ctx)
            .set_root_password("s3cret", "s3cret", " ssh-ed25519 AAAA ")
            .await;
        assert_eq!(effect, ViewEffect::Redirect("/congrats".into()));
        assert_eq!(
            api.calls().await,
            vec!["set_root_password ssh=ssh-ed25519 AAAA".to_string()]
        );
    }
}
