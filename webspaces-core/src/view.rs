//! 视图标识与视图声明

use std::fmt;

use serde::Serialize;

/// 逻辑视图名（在注册表中唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    Home,
    Login,
    Welcome,
    Dashboard,
    Terminal,
    Configs,
    Domains,
    Ports,
    ChooseOs,
    CreateRoot,
    Congrats,
    NotFound,
}

impl ViewId {
    pub const ALL: [Self; 12] = [
        Self::Home,
        Self::Login,
        Self::Welcome,
        Self::Dashboard,
        Self::Terminal,
        Self::Configs,
        Self::Domains,
        Self::Ports,
        Self::ChooseOs,
        Self::CreateRoot,
        Self::Congrats,
        Self::NotFound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Welcome => "Welcome",
            Self::Dashboard => "Dashboard",
            Self::Terminal => "Terminal",
            Self::Configs => "Configs",
            Self::Domains => "Domains",
            Self::Ports => "Ports",
            Self::ChooseOs => "ChooseOS",
            Self::CreateRoot => "CreateRootPassword",
            Self::Congrats => "Congratulations",
            Self::NotFound => "NotFound",
        }
    }

    /// 视图外框：是否与导航外壳组合
    pub fn chrome(self) -> Chrome {
        match self {
            Self::Dashboard | Self::Terminal | Self::Configs | Self::Domains | Self::Ports => {
                Chrome::WithShell
            }
            _ => Chrome::Bare,
        }
    }

    /// 挂载时发起的唯一一次读取（如有）
    pub fn mount_fetch(self) -> Option<MountFetch> {
        match self {
            Self::Configs => Some(MountFetch::Configs),
            Self::Domains => Some(MountFetch::Domains),
            Self::Dashboard => Some(MountFetch::Status),
            Self::Ports => Some(MountFetch::Ports),
            Self::Terminal => Some(MountFetch::Log),
            _ => None,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 视图外框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// 独立渲染
    Bare,
    /// 已登录时与导航外壳并排渲染
    WithShell,
}

/// 挂载钩子对应的网关读取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountFetch {
    Configs,
    Domains,
    Status,
    Ports,
    Log,
}
