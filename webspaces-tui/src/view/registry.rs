//! 视图注册表：视图名 → 标题 + 渲染函数

use ratatui::{Frame, layout::Rect};
use webspaces_core::{CoreResult, ViewId, ViewRegistry};

use super::pages;
use crate::model::App;

/// 视图的可渲染单元
#[derive(Clone, Copy)]
pub struct ViewDef {
    /// 边框标题
    pub title: &'static str,
    pub render: fn(&App, &mut Frame, Rect),
}

pub type Registry = ViewRegistry<ViewDef>;

/// 注册所有视图；重复注册会失败
pub fn build_registry() -> CoreResult<Registry> {
    let mut registry = Registry::new();
    let views: [(ViewId, &'static str, fn(&App, &mut Frame, Rect)); 12] = [
        (ViewId::Home, "Webspaces", pages::home::render),
        (ViewId::Login, "Log In", pages::login::render),
        (ViewId::Welcome, "Welcome", pages::welcome::render),
        (ViewId::Dashboard, "Dashboard", pages::dashboard::render),
        (ViewId::Terminal, "Terminal", pages::terminal::render),
        (ViewId::Configs, "Configs", pages::configs::render),
        (ViewId::Domains, "Domains", pages::domains::render),
        (ViewId::Ports, "Ports", pages::ports::render),
        (ViewId::ChooseOs, "Choose Your OS", pages::choose_os::render),
        (ViewId::CreateRoot, "Create Root Password", pages::create_root::render),
        (ViewId::Congrats, "Congratulations", pages::congrats::render),
        (ViewId::NotFound, "404", pages::not_found::render),
    ];
    for (id, title, render) in views {
        registry.register(id, ViewDef { title, render })?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use webspaces_core::{Router, default_routes};

    #[test]
    fn every_routed_view_is_registered() {
        let registry = build_registry().unwrap();
        let router = Router::new(default_routes()).unwrap();
        registry.ensure_covers(&router).unwrap();
        assert_eq!(registry.len(), ViewId::ALL.len());
    }
}
