//! 后台结果处理
//!
//! 写操作的结果无论是否过期都会结束其忙碌标记，并先记录向导进度和会话变化；
//! 过期（挂载代数不一致）的结果随后被丢弃。其余结果按视图效果作用于 Model：
//! Update 改本地状态，Redirect 重新导航，Alert 弹出阻塞提示，Notify 写入状态栏。

use webspaces_core::services::append_domain;
use webspaces_core::{ViewEffect, ViewId, WizardProgress};

use crate::backend::Request;
use crate::message::{RemoteMessage, RemoteResult};
use crate::model::{App, PageState};

use super::route::{mount_requests, navigate};

/// 处理后台结果
pub fn update(app: &mut App, msg: RemoteMessage) -> Vec<Request> {
    let action = msg.result.action();
    let current = msg.generation == app.generation;
    // 过期的挂载读取已在导航时清除，同名的新读取可能正在进行
    if current || !action.is_mount_read() {
        app.busy.finish(action);
    }
    record_session(app, &msg.result);
    if !current {
        log::debug!(
            "[update] Dropping stale {action:?} result (generation {} != {})",
            msg.generation,
            app.generation
        );
        return Vec::new();
    }

    match msg.result {
        RemoteResult::LoggedIn(effect) => match effect {
            // 登录失败在表单内显示，不弹窗
            ViewEffect::Alert(message) => {
                if let PageState::Login(state) = &mut app.page {
                    state.error = Some(message);
                }
                Vec::new()
            }
            other => apply(app, other, |_, ()| {}),
        },

        RemoteResult::ConfigsFetched(effect) => apply(app, effect, |app, form| {
            if let PageState::Configs(state) = &mut app.page {
                state.fill(&form);
            }
        }),

        RemoteResult::ConfigsSubmitted(effect) => apply(app, effect, |app, form| {
            if let PageState::Configs(state) = &mut app.page {
                state.fill(&form);
            }
            app.set_status("Configuration saved");
        }),

        RemoteResult::DomainsFetched(effect) => apply(app, effect, |app, domains| {
            if let PageState::Domains(state) = &mut app.page {
                state.set_domains(domains);
            }
        }),

        RemoteResult::DomainAdded(effect) => apply(app, effect, |app, domain| {
            let mut added = false;
            if let PageState::Domains(state) = &mut app.page {
                added = append_domain(&mut state.domains, domain.clone());
                state.input.clear();
            }
            if added {
                app.set_status(format!("Added {domain}"));
            } else {
                app.set_status(format!("{domain} is already listed"));
            }
        }),

        RemoteResult::DomainRemoved(effect) => apply(app, effect, |app, domain| {
            if let PageState::Domains(state) = &mut app.page {
                state.remove(&domain);
            }
            app.set_status(format!("Removed {domain}"));
        }),

        RemoteResult::PortsFetched(effect) => apply(app, effect, |app, forwards| {
            if let PageState::Ports(state) = &mut app.page {
                state.set_forwards(forwards);
            }
        }),

        RemoteResult::PortsSubmitted(effect) => {
            let saved = effect.is_update();
            let mut requests = apply(app, effect, |app, ports| {
                app.set_status(format!(
                    "Ports saved: {} -> {}, {} -> {}",
                    ports.external1, ports.internal1, ports.external2, ports.internal2
                ));
            });
            if saved {
                requests.extend(mount_requests(app));
            }
            requests
        }

        RemoteResult::PortRemoved(effect) => apply(app, effect, |app, port| {
            if let PageState::Ports(state) = &mut app.page {
                state.remove(port);
            }
            app.set_status(format!("Removed forward from port {port}"));
        }),

        RemoteResult::OsChosen { effect, .. } => apply(app, effect, |_, ()| {}),

        RemoteResult::RootPasswordSet(effect) => apply(app, effect, |_, ()| {}),

        RemoteResult::StatusFetched(effect) => apply(app, effect, |app, status| {
            if let PageState::Dashboard(state) = &mut app.page {
                state.status = Some(status);
            }
        }),

        RemoteResult::PowerApplied { effect, .. } => {
            let applied = effect.is_update();
            let mut requests = apply(app, effect, |app, action| {
                app.set_status(format!("{} requested", action.label()));
            });
            if applied && app.view() == ViewId::Dashboard {
                requests.extend(mount_requests(app));
            }
            requests
        }

        RemoteResult::WebspaceDeleted(effect) => apply(app, effect, |_, ()| {}),

        RemoteResult::LogFetched(effect) => apply(app, effect, |app, log| {
            if let PageState::Terminal(state) = &mut app.page {
                state.set_log(log);
            }
        }),

        RemoteResult::LogCleared(effect) => apply(app, effect, |app, ()| {
            if let PageState::Terminal(state) = &mut app.page {
                state.set_log(String::new());
            }
            app.set_status("Console log cleared");
        }),
    }
}

/// 后端已接受的会话变化，即使结果已过期也要记下
fn record_session(app: &mut App, result: &RemoteResult) {
    match result {
        RemoteResult::LoggedIn(effect) if effect.is_redirect() => app.authenticated = true,
        RemoteResult::OsChosen { os, effect } if effect.is_redirect() => {
            app.wizard.record_os(*os);
        }
        RemoteResult::RootPasswordSet(effect) if effect.is_redirect() => {
            app.wizard.record_root_password();
        }
        RemoteResult::WebspaceDeleted(effect) if effect.is_redirect() => {
            app.wizard = WizardProgress::default();
        }
        _ => {}
    }
}

fn apply<T>(
    app: &mut App,
    effect: ViewEffect<T>,
    on_update: impl FnOnce(&mut App, T),
) -> Vec<Request> {
    match effect {
        ViewEffect::Update(value) => {
            on_update(app, value);
            Vec::new()
        }
        ViewEffect::Redirect(path) => navigate(app, &path),
        ViewEffect::Alert(message) => {
            app.modal.show_alert("Request rejected", &message);
            Vec::new()
        }
        ViewEffect::Notify(message) => {
            log::warn!("[update] {message}");
            app.set_error_status(message);
            Vec::new()
        }
    }
}
