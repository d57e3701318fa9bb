//! 当前挂载视图的数据状态
//!
//! 每次挂载都会重建，不在视图之间保留。

use webspaces_core::{ViewId, WizardProgress};

use super::{
    ChooseOsState, ConfigsState, CreateRootState, DashboardState, DomainsState, Form, LoginState,
    PortsState, TerminalState,
};

/// 页面状态
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// 无交互数据的静态视图（Home, Welcome, Congrats, NotFound）
    Static,
    Login(LoginState),
    Dashboard(DashboardState),
    Terminal(TerminalState),
    Configs(ConfigsState),
    Domains(DomainsState),
    Ports(PortsState),
    ChooseOs(ChooseOsState),
    CreateRoot(CreateRootState),
}

impl PageState {
    /// 视图挂载时的初始状态
    pub fn initial(view: ViewId, progress: &WizardProgress) -> Self {
        match view {
            ViewId::Login => Self::Login(LoginState::new()),
            ViewId::Dashboard => Self::Dashboard(DashboardState::default()),
            ViewId::Terminal => Self::Terminal(TerminalState::default()),
            ViewId::Configs => Self::Configs(ConfigsState::new()),
            ViewId::Domains => Self::Domains(DomainsState::new()),
            ViewId::Ports => Self::Ports(PortsState::new()),
            ViewId::ChooseOs => Self::ChooseOs(ChooseOsState::new(progress)),
            ViewId::CreateRoot => Self::CreateRoot(CreateRootState::new()),
            ViewId::Home | ViewId::Welcome | ViewId::Congrats | ViewId::NotFound => Self::Static,
        }
    }

    /// 当前页面的可编辑表单
    pub fn form(&self) -> Option<&Form> {
        match self {
            Self::Login(s) => Some(&s.form),
            Self::Configs(s) => Some(&s.form),
            Self::Domains(s) => Some(&s.input),
            Self::Ports(s) => Some(&s.form),
            Self::CreateRoot(s) => Some(&s.form),
            Self::Static | Self::Dashboard(_) | Self::Terminal(_) | Self::ChooseOs(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Self::Login(s) => Some(&mut s.form),
            Self::Configs(s) => Some(&mut s.form),
            Self::Domains(s) => Some(&mut s.input),
            Self::Ports(s) => Some(&mut s.form),
            Self::CreateRoot(s) => Some(&mut s.form),
            Self::Static | Self::Dashboard(_) | Self::Terminal(_) | Self::ChooseOs(_) => None,
        }
    }
}
