//! 视图效果：一次网关结果应当如何作用于视图

use webspaces_gateway::Envelope;

use crate::error::CoreError;

/// 交互处理器完成后的唯一效果
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEffect<T> {
    /// 用结果更新视图本地状态
    Update(T),
    /// 导航到另一路径（重新解析并挂载）
    Redirect(String),
    /// 校验类拒绝：阻塞式提示
    Alert(String),
    /// 传输失败：状态栏中的非阻塞通知
    Notify(String),
}

impl<T> ViewEffect<T> {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert(message.into())
    }

    /// 把信封映射为效果：`Ok` 交给 `on_ok`，`Rejected` 变成提示，`Error` 变成通知
    pub fn from_envelope<U>(envelope: Envelope<U>, on_ok: impl FnOnce(U) -> Self) -> Self {
        match envelope {
            Envelope::Ok(detail) => on_ok(detail),
            Envelope::Rejected(message) => Self::Alert(message),
            Envelope::Error(err) => CoreError::from(err).into(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewEffect<U> {
        match self {
            Self::Update(value) => ViewEffect::Update(f(value)),
            Self::Redirect(path) => ViewEffect::Redirect(path),
            Self::Alert(message) => ViewEffect::Alert(message),
            Self::Notify(message) => ViewEffect::Notify(message),
        }
    }
}

impl<T> From<CoreError> for ViewEffect<T> {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::Alert(message),
            CoreError::Gateway(e) => Self::Notify(e.to_string()),
            other => {
                log::error!("[effect] {other}");
                Self::Notify(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webspaces_gateway::GatewayError;

    #[test]
    fn rejected_becomes_alert() {
        let effect: ViewEffect<()> =
            ViewEffect::from_envelope(Envelope::<()>::rejected("nope"), |()| {
                ViewEffect::Update(())
            });
        assert_eq!(effect, ViewEffect::Alert("nope".into()));
    }

    #[test]
    fn gateway_error_becomes_notification() {
        let envelope: Envelope<()> = Envelope::Error(GatewayError::Timeout {
            endpoint: "/api/getConfigs".into(),
            detail: "15s".into(),
        });
        let effect: ViewEffect<()> = ViewEffect::from_envelope(envelope, ViewEffect::Update);
        assert!(matches!(effect, ViewEffect::Notify(msg) if msg.contains("/api/getConfigs")));
    }

    #[test]
    fn validation_error_becomes_alert() {
        let effect: ViewEffect<u8> = CoreError::Validation("Domain is empty".into()).into();
        assert_eq!(effect, ViewEffect::Alert("Domain is empty".into()));
    }

    #[test]
    fn map_keeps_non_update_variants() {
        let effect: ViewEffect<u8> = ViewEffect::redirect("/welcome");
        assert_eq!(effect.map(u16::from), ViewEffect::Redirect("/welcome".into()));
        assert_eq!(ViewEffect::Update(2u8).map(u16::from), ViewEffect::Update(2u16));
    }
}
