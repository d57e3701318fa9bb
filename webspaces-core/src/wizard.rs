//! 首次登录设置向导
//!
//! Welcome → ChooseOS → CreateRootPassword → Congratulations → Dashboard。
//! 前进需要用户显式操作；ChooseOS 和 CreateRootPassword 只有在网关返回 `Ok`
//! 后才前进。后退是纯客户端导航，不调用后端。

use webspaces_gateway::OsChoice;

use crate::router::paths;
use crate::view::ViewId;

/// 向导步骤（固定顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    ChooseOs,
    CreateRootPassword,
    Congratulations,
    /// 终态
    Dashboard,
}

impl WizardStep {
    pub const ORDER: [Self; 5] = [
        Self::Welcome,
        Self::ChooseOs,
        Self::CreateRootPassword,
        Self::Congratulations,
        Self::Dashboard,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::ChooseOs),
            Self::ChooseOs => Some(Self::CreateRootPassword),
            Self::CreateRootPassword => Some(Self::Congratulations),
            Self::Congratulations => Some(Self::Dashboard),
            Self::Dashboard => None,
        }
    }

    /// Welcome 没有上一步；Dashboard 已离开向导
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::ChooseOs => Some(Self::Welcome),
            Self::CreateRootPassword => Some(Self::ChooseOs),
            Self::Congratulations => Some(Self::CreateRootPassword),
            Self::Welcome | Self::Dashboard => None,
        }
    }

    /// 前进是否需要网关确认
    pub fn requires_backend(self) -> bool {
        matches!(self, Self::ChooseOs | Self::CreateRootPassword)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Welcome => paths::WELCOME,
            Self::ChooseOs => paths::CHOOSE_OS,
            Self::CreateRootPassword => paths::CREATE_ROOT,
            Self::Congratulations => paths::CONGRATS,
            Self::Dashboard => paths::DASHBOARD,
        }
    }

    pub fn view(self) -> ViewId {
        match self {
            Self::Welcome => ViewId::Welcome,
            Self::ChooseOs => ViewId::ChooseOs,
            Self::CreateRootPassword => ViewId::CreateRoot,
            Self::Congratulations => ViewId::Congrats,
            Self::Dashboard => ViewId::Dashboard,
        }
    }

    /// 视图所处的向导步骤（Dashboard 不算向导内）
    pub fn from_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::Welcome => Some(Self::Welcome),
            ViewId::ChooseOs => Some(Self::ChooseOs),
            ViewId::CreateRoot => Some(Self::CreateRootPassword),
            ViewId::Congrats => Some(Self::Congratulations),
            _ => None,
        }
    }

    /// 步骤序号（从 1 开始），用于进度显示
    pub fn ordinal(self) -> usize {
        Self::ORDER
            .iter()
            .position(|s| *s == self)
            .map_or(0, |i| i + 1)
    }
}

/// 向导进度：只在步骤被后端接受后更新的客户端镜像
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardProgress {
    pub os: Option<OsChoice>,
    pub root_password_set: bool,
}

impl WizardProgress {
    pub fn record_os(&mut self, os: OsChoice) {
        self.os = Some(os);
    }

    pub fn record_root_password(&mut self) {
        self.root_password_set = true;
    }

    pub fn is_complete(&self) -> bool {
        self.os.is_some() && self.root_password_set
    }

    /// 已完成的必要步骤数（OS、root 密码）
    pub fn completed_steps(&self) -> usize {
        usize::from(self.os.is_some()) + usize::from(self.root_password_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_ends_at_dashboard() {
        let mut step = WizardStep::Welcome;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            visited.push(next);
            step = next;
        }
        assert_eq!(visited, WizardStep::ORDER.to_vec());
    }

    #[test]
    fn previous_is_inverse_of_next_inside_the_wizard() {
        for step in [
            WizardStep::ChooseOs,
            WizardStep::CreateRootPassword,
            WizardStep::Congratulations,
        ] {
            assert_eq!(step.previous().and_then(WizardStep::next), Some(step));
        }
        assert_eq!(WizardStep::Welcome.previous(), None);
    }

    #[test]
    fn only_os_and_root_need_backend() {
        let gated: Vec<_> = WizardStep::ORDER
            .into_iter()
            .filter(|s| s.requires_backend())
            .collect();
        assert_eq!(
            gated,
            vec![WizardStep::ChooseOs, WizardStep::CreateRootPassword]
        );
    }

    #[test]
    fn steps_map_to_routes() {
        assert_eq!(WizardStep::ChooseOs.path(), "/choose-os");
        assert_eq!(WizardStep::CreateRootPassword.path(), "/create-root");
        assert_eq!(WizardStep::Congratulations.path(), "/congrats");
        for step in WizardStep::ORDER {
            if step != WizardStep::Dashboard {
                assert_eq!(WizardStep::from_view(step.view()), Some(step));
            }
        }
    }

    #[test]
    fn progress_tracks_accepted_steps() {
        let mut progress = WizardProgress::default();
        assert_eq!(progress.completed_steps(), 0);
        progress.record_os(OsChoice::Debian);
        assert_eq!(progress.os, Some(OsChoice::Debian));
        assert!(!progress.is_complete());
        progress.record_root_password();
        assert!(progress.is_complete());
        assert_eq!(progress.completed_steps(), 2);
    }
}
