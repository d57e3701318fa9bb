//! View Registry：视图名 → 可渲染单元

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::router::Router;
use crate::view::ViewId;

/// 视图注册表
///
/// `V` 是视图定义（渲染函数、初始状态、交互处理器），由 UI 层决定具体类型。
#[derive(Debug)]
pub struct ViewRegistry<V> {
    views: HashMap<ViewId, V>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册视图，同名重复注册直接报错
    pub fn register(&mut self, name: ViewId, view: V) -> CoreResult<()> {
        if self.views.contains_key(&name) {
            return Err(CoreError::DuplicateView(name));
        }
        self.views.insert(name, view);
        Ok(())
    }

    /// 显式覆盖已有视图（后写者胜）
    pub fn replace(&mut self, name: ViewId, view: V) -> Option<V> {
        let previous = self.views.insert(name, view);
        if previous.is_some() {
            log::warn!("[registry] View {name} replaced by a later registration");
        }
        previous
    }

    pub fn resolve(&self, name: ViewId) -> CoreResult<&V> {
        self.views
            .get(&name)
            .ok_or(CoreError::ViewNotRegistered(name))
    }

    pub fn contains(&self, name: ViewId) -> bool {
        self.views.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// 启动时校验：路由表引用的每个视图都已注册
    pub fn ensure_covers(&self, router: &Router) -> CoreResult<()> {
        router
            .routes()
            .iter()
            .find(|route| !self.contains(route.view))
            .map_or(Ok(()), |route| Err(CoreError::ViewNotRegistered(route.view)))
    }
}
