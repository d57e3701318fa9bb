//! 后台请求描述
//!
//! Update 层只产出 `Request`，真正的网关调用由 `CoreService::dispatch` 执行。

use webspaces_core::{Action, ConfigsForm, PortsForm};
use webspaces_gateway::{OsChoice, PowerAction};

/// 一次网关调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    FetchConfigs,
    SubmitConfigs(ConfigsForm),
    FetchDomains,
    AddDomain(String),
    SubmitPorts(PortsForm),
    ChooseOs(OsChoice),
    SetRootPassword {
        password: String,
        confirm: String,
        ssh: String,
    },
    FetchStatus,
    Power(PowerAction),
    DeleteWebspace,
    RemoveDomain(String),
    FetchPorts,
    RemovePort(u16),
    FetchLog,
    ClearLog,
}

impl Command {
    /// 对应的忙碌标记
    pub fn action(&self) -> Action {
        match self {
            Self::Login { .. } => Action::Login,
            Self::FetchConfigs => Action::FetchConfigs,
            Self::SubmitConfigs(_) => Action::SubmitConfigs,
            Self::FetchDomains => Action::FetchDomains,
            Self::AddDomain(_) => Action::AddDomain,
            Self::SubmitPorts(_) => Action::SubmitPorts,
            Self::ChooseOs(_) => Action::ChooseOs,
            Self::SetRootPassword { .. } => Action::SetRootPassword,
            Self::FetchStatus => Action::FetchStatus,
            Self::Power(action) => Action::Power(*action),
            Self::DeleteWebspace => Action::DeleteWebspace,
            Self::RemoveDomain(_) => Action::RemoveDomain,
            Self::FetchPorts => Action::FetchPorts,
            Self::RemovePort(_) => Action::RemovePort,
            Self::FetchLog => Action::FetchLog,
            Self::ClearLog => Action::ClearLog,
        }
    }
}

/// 带挂载代数的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub generation: u64,
    pub command: Command,
}
