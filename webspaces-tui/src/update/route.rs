//! 导航与挂载
//!
//! 所有跳转（外壳选择、向导按钮、跳转弹窗、重定向）都走 `navigate`：
//! 重新解析路径，重建视图状态，并发出挂载请求。
//! 离开视图只清除挂载读取的忙碌标记，在途的写操作标记保留到结果返回。

use webspaces_core::{Chrome, MountFetch, WizardStep};

use crate::backend::{Command, Request};
use crate::model::{App, FocusPanel, PageState};

/// 解析并挂载 `path` 对应的视图
pub fn navigate(app: &mut App, path: &str) -> Vec<Request> {
    let route = app.router.resolve(path);
    log::info!(
        "[router] {path} -> {} ({})",
        route.view,
        route.status_code()
    );

    app.generation += 1;
    app.busy.clear_reads();
    app.page = PageState::initial(route.view, &app.wizard);
    app.navigation.sync_with(route.view);
    app.modal.close();
    app.clear_status();
    if route.view.chrome() == Chrome::Bare {
        app.focus = FocusPanel::Content;
    }
    app.route = route;

    mount_requests(app)
}

/// 当前视图的挂载读取
pub fn mount_requests(app: &mut App) -> Vec<Request> {
    let command = match app.view().mount_fetch() {
        Some(MountFetch::Configs) => Command::FetchConfigs,
        Some(MountFetch::Domains) => Command::FetchDomains,
        Some(MountFetch::Status) => Command::FetchStatus,
        Some(MountFetch::Ports) => Command::FetchPorts,
        Some(MountFetch::Log) => Command::FetchLog,
        None => return Vec::new(),
    };
    begin(app, command)
}

/// 标记动作忙碌并生成请求；动作已在途时忽略
pub fn begin(app: &mut App, command: Command) -> Vec<Request> {
    if !app.busy.try_begin(command.action()) {
        return Vec::new();
    }
    vec![Request {
        generation: app.generation,
        command,
    }]
}

/// 向导前进：只处理不需要后端确认的步骤
pub fn wizard_next(app: &mut App) -> Vec<Request> {
    match WizardStep::from_view(app.view()) {
        Some(step) if !step.requires_backend() => match step.next() {
            Some(next) => navigate(app, next.path()),
            None => Vec::new(),
        },
        // ChooseOS / CreateRootPassword 必须提交成功后才能前进
        Some(_) => super::content::submit(app),
        None => Vec::new(),
    }
}

/// 向导后退：纯客户端跳转
pub fn wizard_previous(app: &mut App) -> Vec<Request> {
    match WizardStep::from_view(app.view()).and_then(WizardStep::previous) {
        Some(previous) => navigate(app, previous.path()),
        None => Vec::new(),
    }
}
