//! 每个交互动作的忙碌标记
//!
//! 某动作的请求在途时，再次触发会被忽略，控件渲染为禁用。
//! 挂载读取的标记随视图卸载丢弃；写入的标记一直保留到结果返回，
//! 离开再回到同一视图也不能重复提交。

use std::collections::HashSet;

use webspaces_gateway::PowerAction;

/// 会发起网关请求的交互动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    FetchConfigs,
    SubmitConfigs,
    FetchDomains,
    AddDomain,
    SubmitPorts,
    ChooseOs,
    SetRootPassword,
    FetchStatus,
    /// 每种电源动作各有一个标记
    Power(PowerAction),
    DeleteWebspace,
    RemoveDomain,
    FetchPorts,
    RemovePort,
    FetchLog,
    ClearLog,
}

impl Action {
    /// 挂载时发起的读取
    pub fn is_mount_read(self) -> bool {
        matches!(
            self,
            Self::FetchConfigs
                | Self::FetchDomains
                | Self::FetchStatus
                | Self::FetchPorts
                | Self::FetchLog
        )
    }
}

/// 忙碌标记集合
#[derive(Debug, Default, Clone)]
pub struct BusyGuard {
    in_flight: HashSet<Action>,
}

impl BusyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试开始动作；已在途则返回 `false`
    pub fn try_begin(&mut self, action: Action) -> bool {
        let started = self.in_flight.insert(action);
        if !started {
            log::debug!("[guard] {action:?} already in flight, ignoring");
        }
        started
    }

    pub fn finish(&mut self, action: Action) {
        self.in_flight.remove(&action);
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.in_flight.contains(&action)
    }

    pub fn any_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// 视图卸载时丢弃读取标记，写入标记保留
    pub fn clear_reads(&mut self) {
        self.in_flight.retain(|action| !action.is_mount_read());
    }
}
