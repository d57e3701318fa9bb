//! 域名服务

use std::sync::Arc;

use crate::effect::ViewEffect;
use crate::error::CoreError;
use crate::services::ServiceContext;

/// 域名服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 挂载时读取已绑定的域名
    pub async fn fetch(&self) -> ViewEffect<Vec<String>> {
        let envelope = self.ctx.api.get_domains().await;
        ViewEffect::from_envelope(envelope, ViewEffect::Update)
    }

    /// 每次添加只发一个 POST；成功时返回后端回显的域名
    pub async fn add(&self, domain: &str) -> ViewEffect<String> {
        let domain = domain.trim();
        if domain.is_empty() {
            return CoreError::Validation("Domain must not be empty".to_string()).into();
        }
        if domain.chars().any(char::is_whitespace) {
            return CoreError::Validation(format!("Invalid domain: {domain}")).into();
        }

        let envelope = self.ctx.api.add_domain(domain).await;
        ViewEffect::from_envelope(envelope, |echoed| {
            log::info!("[domains] Added {echoed}");
            ViewEffect::Update(echoed)
        })
    }

    /// 解绑域名；成功时返回被移除的域名
    pub async fn remove(&self, domain: &str) -> ViewEffect<String> {
        let envelope = self.ctx.api.remove_domain(domain).await;
        ViewEffect::from_envelope(envelope, |()| {
            log::info!("[domains] Removed {domain}");
            ViewEffect::Update(domain.to_string())
        })
    }
}

/// 追加域名到列表，已存在时不重复追加；返回是否追加
pub fn append_domain(domains: &mut Vec<String>, domain: String) -> bool {
    if domains.iter().any(|d| d.eq_ignore_ascii_case(&domain)) {
        return false;
    }
    domains.push(domain);
    true
}
