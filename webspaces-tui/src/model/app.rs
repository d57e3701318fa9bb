//! 应用主状态结构

use webspaces_core::{BusyGuard, Chrome, Resolution, Router, ViewId, WizardProgress, paths};

use super::{FocusPanel, ModalState, NavigationState, PageState};

/// 状态栏消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    /// 传输失败等非阻塞错误
    Error,
}

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 是否已登录（决定外壳是否显示）
    pub authenticated: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航外壳状态
    pub navigation: NavigationState,

    /// 路由表
    pub router: Router,

    /// 当前挂载的路由
    pub route: Resolution,

    /// 挂载代数；每次导航自增，用于丢弃过期的异步结果
    pub generation: u64,

    /// 当前视图的数据
    pub page: PageState,

    /// 在途动作
    pub busy: BusyGuard,

    /// 设置向导进度
    pub wizard: WizardProgress,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status: Option<StatusLine>,
}

impl App {
    /// 创建新的应用实例；尚未挂载任何视图，需要先导航一次
    pub fn new(router: Router) -> Self {
        let route = router.resolve(paths::HOME);
        Self {
            should_quit: false,
            authenticated: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            router,
            route,
            generation: 0,
            page: PageState::Static,
            busy: BusyGuard::new(),
            wizard: WizardProgress::default(),
            modal: ModalState::new(),
            status: None,
        }
    }

    pub fn view(&self) -> ViewId {
        self.route.view
    }

    /// 外壳只在登录后的带外壳视图中显示
    pub fn shell_visible(&self) -> bool {
        self.authenticated && self.view().chrome() == Chrome::WithShell
    }

    /// 键入的字符应当进入当前表单字段
    pub fn is_editing(&self) -> bool {
        !self.modal.is_open()
            && self.focus.is_content()
            && self.page.form().is_some_and(super::Form::focused_is_text)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            text: message.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            text: message.into(),
            kind: StatusKind::Error,
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
