//! 后台请求结果消息
//!
//! 每个结果都带着发起时的挂载代数，Update 层据此丢弃过期结果。

use webspaces_core::{Action, ConfigsForm, ViewEffect};
use webspaces_gateway::{OsChoice, PortMap, PortMapping, PowerAction, WebspaceState};

/// 后台请求完成
#[derive(Debug, Clone)]
pub struct RemoteMessage {
    /// 发起请求时的挂载代数
    pub generation: u64,
    pub result: RemoteResult,
}

/// 各动作的视图效果
#[derive(Debug, Clone)]
pub enum RemoteResult {
    LoggedIn(ViewEffect<()>),
    ConfigsFetched(ViewEffect<ConfigsForm>),
    ConfigsSubmitted(ViewEffect<ConfigsForm>),
    DomainsFetched(ViewEffect<Vec<String>>),
    DomainAdded(ViewEffect<String>),
    PortsSubmitted(ViewEffect<PortMapping>),
    OsChosen {
        os: OsChoice,
        effect: ViewEffect<()>,
    },
    RootPasswordSet(ViewEffect<()>),
    StatusFetched(ViewEffect<WebspaceState>),
    PowerApplied {
        action: PowerAction,
        effect: ViewEffect<PowerAction>,
    },
    WebspaceDeleted(ViewEffect<()>),
    DomainRemoved(ViewEffect<String>),
    PortsFetched(ViewEffect<PortMap>),
    PortRemoved(ViewEffect<u16>),
    LogFetched(ViewEffect<String>),
    LogCleared(ViewEffect<()>),
}

impl RemoteResult {
    /// 产生此结果的动作
    pub fn action(&self) -> Action {
        match self {
            Self::LoggedIn(_) => Action::Login,
            Self::ConfigsFetched(_) => Action::FetchConfigs,
            Self::ConfigsSubmitted(_) => Action::SubmitConfigs,
            Self::DomainsFetched(_) => Action::FetchDomains,
            Self::DomainAdded(_) => Action::AddDomain,
            Self::PortsSubmitted(_) => Action::SubmitPorts,
            Self::OsChosen { .. } => Action::ChooseOs,
            Self::RootPasswordSet(_) => Action::SetRootPassword,
            Self::StatusFetched(_) => Action::FetchStatus,
            Self::PowerApplied { action, .. } => Action::Power(*action),
            Self::WebspaceDeleted(_) => Action::DeleteWebspace,
            Self::DomainRemoved(_) => Action::RemoveDomain,
            Self::PortsFetched(_) => Action::FetchPorts,
            Self::PortRemoved(_) => Action::RemovePort,
            Self::LogFetched(_) => Action::FetchLog,
            Self::LogCleared(_) => Action::ClearLog,
        }
    }
}
