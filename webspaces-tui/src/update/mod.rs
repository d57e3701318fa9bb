//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要访问后端时不直接调用，而是返回 `Request` 列表，由主循环交给 Backend 执行。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 内容面板（表单、主操作）
//!         mod modal;              // 弹窗
//!         mod navigation;         // 导航外壳
//!         mod remote;             // 后台结果
//!         mod route;              // 导航与挂载
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Request> {...}
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;
mod remote;
mod route;

use crate::backend::Request;
use crate::message::AppMessage;
use crate::model::App;

use route::navigate;

/// 处理应用消息，更新状态，返回需要执行的后台请求
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Request> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 弹窗打开或外壳不可见时不切换焦点
            if !app.modal.is_open() && app.shell_visible() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => return navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => return content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => return modal::update(app, modal_msg),

        AppMessage::Remote(remote_msg) => return remote::update(app, remote_msg),

        AppMessage::Navigate(path) => return navigate(app, &path),

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                return route::wizard_previous(app);
            }
        }

        AppMessage::Refresh => return route::mount_requests(app),

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::OpenGoTo => {
            let current = app.route.path.clone();
            app.modal.show_goto(&current);
        }

        AppMessage::WizardNext => return route::wizard_next(app),

        AppMessage::WizardPrevious => return route::wizard_previous(app),

        AppMessage::Noop => {}
    }
    Vec::new()
}
