//! 导航外壳状态定义

use webspaces_core::{ViewId, paths};

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: &'static str,
    /// 点击后跳转的路径
    pub path: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    view: ViewId::Dashboard,
                    label: "Dashboard",
                    icon: "⌂",
                    path: paths::DASHBOARD,
                },
                NavItem {
                    view: ViewId::Terminal,
                    label: "Terminal",
                    icon: ">",
                    path: paths::TERMINAL,
                },
                NavItem {
                    view: ViewId::Configs,
                    label: "Configs",
                    icon: "≡",
                    path: paths::CONFIGS,
                },
                NavItem {
                    view: ViewId::Domains,
                    label: "Domains",
                    icon: "●",
                    path: paths::DOMAINS,
                },
                NavItem {
                    view: ViewId::Ports,
                    label: "Ports",
                    icon: "⇄",
                    path: paths::PORTS,
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 高亮与当前视图对应的项；视图不在外壳中时保持不变
    pub fn sync_with(&mut self, view: ViewId) {
        if let Some(index) = self.items.iter().position(|item| item.view == view) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
