//! 路由器：路径模式 → 视图名
//!
//! 按声明顺序逐条尝试，首个匹配生效；通配符必须存在、唯一且位于末尾，
//! 匹配所有其他路由未命中的路径。

use crate::error::{CoreError, CoreResult};
use crate::view::ViewId;

/// 客户端路由路径
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const WELCOME: &str = "/welcome";
    pub const DASHBOARD: &str = "/dashboard";
    pub const TERMINAL: &str = "/terminal";
    pub const CONFIGS: &str = "/configs";
    pub const DOMAINS: &str = "/domains";
    pub const PORTS: &str = "/ports";
    pub const CHOOSE_OS: &str = "/choose-os";
    pub const CREATE_ROOT: &str = "/create-root";
    pub const CONGRATS: &str = "/congrats";
}

/// 路径模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// 精确字符串匹配，无参数提取
    Exact(String),
    /// `*`
    Wildcard,
}

impl RoutePattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(p) => p == path,
            Self::Wildcard => true,
        }
    }
}

/// 一条路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: ViewId,
}

impl Route {
    pub fn exact(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            pattern: RoutePattern::Exact(path.into()),
            view,
        }
    }

    pub fn wildcard(view: ViewId) -> Self {
        Self {
            pattern: RoutePattern::Wildcard,
            view,
        }
    }
}

/// 命中方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched {
    Exact,
    Fallback,
}

/// 一次解析的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub view: ViewId,
    pub matched: Matched,
    /// 去掉查询串和片段后的路径
    pub path: String,
}

impl Resolution {
    /// 未命中时带 404 语义
    pub fn status_code(&self) -> u16 {
        match self.matched {
            Matched::Exact => 200,
            Matched::Fallback => 404,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.matched == Matched::Fallback
    }
}

/// 路由器
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// 创建路由器并校验路由表
    pub fn new(routes: Vec<Route>) -> CoreResult<Self> {
        let wildcards: Vec<usize> = routes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.pattern == RoutePattern::Wildcard)
            .map(|(i, _)| i)
            .collect();

        match wildcards.as_slice() {
            [] => {
                return Err(CoreError::InvalidRouteTable(
                    "missing wildcard route".to_string(),
                ));
            }
            [index] if *index + 1 != routes.len() => {
                return Err(CoreError::InvalidRouteTable(format!(
                    "wildcard route must be last (found at position {index})"
                )));
            }
            [_] => {}
            _ => {
                return Err(CoreError::InvalidRouteTable(format!(
                    "{} wildcard routes declared, expected exactly one",
                    wildcards.len()
                )));
            }
        }

        Ok(Self { routes })
    }

    /// 把路径解析为视图；未命中走通配符，不视为错误
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);
        // 构造时已保证末尾是通配符，所以总能命中
        let route = self
            .routes
            .iter()
            .find(|r| r.pattern.matches(path))
            .or_else(|| self.routes.last());

        let (view, matched) = match route {
            Some(Route {
                pattern: RoutePattern::Exact(_),
                view,
            }) => (*view, Matched::Exact),
            Some(Route { view, .. }) => (*view, Matched::Fallback),
            None => (ViewId::NotFound, Matched::Fallback),
        };

        if matched == Matched::Fallback {
            log::debug!("[router] No route for {path}, falling back to {view}");
        }

        Resolution {
            view,
            matched,
            path: path.to_string(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// 路由表中某个视图的首个具体路径
    pub fn path_of(&self, view: ViewId) -> Option<&str> {
        self.routes.iter().find_map(|r| match &r.pattern {
            RoutePattern::Exact(p) if r.view == view => Some(p.as_str()),
            _ => None,
        })
    }
}

/// 查询串与片段不参与匹配
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// 应用的默认路由表
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::exact(paths::HOME, ViewId::Home),
        Route::exact(paths::LOGIN, ViewId::Login),
        Route::exact(paths::WELCOME, ViewId::Welcome),
        Route::exact(paths::DASHBOARD, ViewId::Dashboard),
        Route::exact(paths::TERMINAL, ViewId::Terminal),
        Route::exact(paths::CONFIGS, ViewId::Configs),
        Route::exact(paths::DOMAINS, ViewId::Domains),
        Route::exact(paths::PORTS, ViewId::Ports),
        Route::exact(paths::CHOOSE_OS, ViewId::ChooseOs),
        Route::exact(paths::CREATE_ROOT, ViewId::CreateRoot),
        Route::exact(paths::CONGRATS, ViewId::Congrats),
        Route::wildcard(ViewId::NotFound),
    ]
}
