//! 内容面板更新逻辑
//!
//! 表单编辑、列表选择，以及每个视图的主操作（Enter）和删除操作（Delete）

use webspaces_core::{ViewId, paths};

use crate::backend::{Command, Request};
use crate::message::ContentMessage;
use crate::model::state::DashboardAction;
use crate::model::{App, PageState};

use super::route::{begin, mount_requests, navigate};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Request> {
    match msg {
        ContentMessage::Previous => match &mut app.page {
            PageState::ChooseOs(state) => state.select_previous(),
            PageState::Dashboard(state) => state.select_previous(),
            PageState::Domains(state) => state.select_previous(),
            page => {
                if let Some(form) = page.form_mut() {
                    form.previous();
                }
            }
        },
        ContentMessage::Next => match &mut app.page {
            PageState::ChooseOs(state) => state.select_next(),
            PageState::Dashboard(state) => state.select_next(),
            PageState::Domains(state) => state.select_next(),
            page => {
                if let Some(form) = page.form_mut() {
                    form.next();
                }
            }
        },
        ContentMessage::Input(c) => {
            if let Some(form) = app.page.form_mut() {
                form.input(c);
            }
        }
        ContentMessage::Backspace => {
            if let Some(form) = app.page.form_mut() {
                form.backspace();
            }
        }
        ContentMessage::Toggle => {
            if let Some(form) = app.page.form_mut() {
                form.toggle();
            }
        }
        ContentMessage::Submit => {
            // 文本字段上回车先移到下一个字段，最后一个字段才提交
            if let Some(form) = app.page.form_mut()
                && form.focused_is_text()
                && !form.on_last()
            {
                form.next();
                return Vec::new();
            }
            return submit(app);
        }
        ContentMessage::PreviousItem => {
            if let PageState::Ports(state) = &mut app.page {
                state.select_previous();
            }
        }
        ContentMessage::NextItem => {
            if let PageState::Ports(state) = &mut app.page {
                state.select_next();
            }
        }
        ContentMessage::Remove => return remove(app),
    }
    Vec::new()
}

/// 删除当前视图的选中项
fn remove(app: &mut App) -> Vec<Request> {
    let command = match &app.page {
        PageState::Domains(state) => match state.selected_domain() {
            Some(domain) => Command::RemoveDomain(domain.to_string()),
            None => return Vec::new(),
        },
        PageState::Ports(state) => match state.selected_port() {
            Some(port) => Command::RemovePort(port),
            None => return Vec::new(),
        },
        PageState::Terminal(_) => Command::ClearLog,
        PageState::Dashboard(_) => {
            app.modal.show_confirm_delete();
            return Vec::new();
        }
        _ => return Vec::new(),
    };
    begin(app, command)
}

/// 当前视图的主操作
pub fn submit(app: &mut App) -> Vec<Request> {
    match app.view() {
        ViewId::Home => return navigate(app, paths::LOGIN),
        ViewId::Welcome => return navigate(app, paths::CHOOSE_OS),
        ViewId::Congrats => return navigate(app, paths::DASHBOARD),
        ViewId::NotFound => return navigate(app, paths::HOME),
        ViewId::Terminal => return mount_requests(app),
        _ => {}
    }
    if matches!(&app.page, PageState::Configs(state) if !state.loaded) {
        app.set_status("Configuration is still loading");
        return Vec::new();
    }

    let command = match &mut app.page {
        PageState::Login(state) => {
            state.error = None;
            Command::Login {
                email: state.email().to_string(),
                password: state.password().to_string(),
            }
        }
        PageState::Configs(state) => Command::SubmitConfigs(state.to_form()),
        PageState::Domains(state) => Command::AddDomain(state.pending_domain().to_string()),
        PageState::Ports(state) => Command::SubmitPorts(state.to_form()),
        PageState::ChooseOs(state) => Command::ChooseOs(state.choice()),
        PageState::CreateRoot(state) => Command::SetRootPassword {
            password: state.password().to_string(),
            confirm: state.confirm().to_string(),
            ssh: state.ssh().to_string(),
        },
        PageState::Dashboard(state) => match state.action() {
            DashboardAction::Refresh => return mount_requests(app),
            DashboardAction::Power(action) => Command::Power(action),
            DashboardAction::Delete => {
                app.modal.show_confirm_delete();
                return Vec::new();
            }
        },
        PageState::Terminal(_) | PageState::Static => return Vec::new(),
    };
    begin(app, command)
}
