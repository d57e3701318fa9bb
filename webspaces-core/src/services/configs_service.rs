//! 配置服务

use std::sync::Arc;

use crate::effect::ViewEffect;
use crate::forms::ConfigsForm;
use crate::services::ServiceContext;

/// 配置服务
pub struct ConfigsService {
    ctx: Arc<ServiceContext>,
}

impl ConfigsService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 挂载时读取当前配置，四个字段原样填入表单
    pub async fn fetch(&self) -> ViewEffect<ConfigsForm> {
        let envelope = self.ctx.api.get_configs().await;
        ViewEffect::from_envelope(envelope, |configs| {
            ViewEffect::Update(ConfigsForm::from_configs(&configs))
        })
    }

    /// 提交表单；成功后以已提交的值作为新的原始值
    pub async fn submit(&self, form: &ConfigsForm) -> ViewEffect<ConfigsForm> {
        let configs = form.to_configs();
        let envelope = self.ctx.api.submit_configs(&configs).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[configs] Configuration saved");
            ViewEffect::Update(ConfigsForm::from_configs(&configs))
        })
    }
}
