//! 仪表盘状态

use webspaces_gateway::{PowerAction, WebspaceState};

/// 仪表盘上的操作按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Refresh,
    Power(PowerAction),
    /// 需要在确认弹窗中再次确认
    Delete,
}

impl DashboardAction {
    pub const ALL: [Self; 5] = [
        Self::Refresh,
        Self::Power(PowerAction::Boot),
        Self::Power(PowerAction::Reboot),
        Self::Power(PowerAction::Shutdown),
        Self::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::Power(action) => action.label(),
            Self::Delete => "Delete",
        }
    }
}

/// 仪表盘状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// 最近一次读取到的状态
    pub status: Option<WebspaceState>,
    /// `DashboardAction::ALL` 中的索引
    pub selected: usize,
}

impl DashboardState {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < DashboardAction::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn action(&self) -> DashboardAction {
        DashboardAction::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(DashboardAction::Refresh)
    }
}
