//! 弹窗更新逻辑

use crate::backend::{Command, Request};
use crate::message::ModalMessage;
use crate::model::{App, Modal};

use super::route::{begin, navigate};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Request> {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::Confirm => match app.modal.active.take() {
            Some(Modal::GoTo { input }) => {
                let path = input.trim();
                let path = if path.is_empty() { "/" } else { path };
                return navigate(app, path);
            }
            Some(Modal::ConfirmDelete { focus: 1 }) => {
                return begin(app, Command::DeleteWebspace);
            }
            _ => {}
        },
        ModalMessage::ToggleFocus => {
            if let Some(Modal::ConfirmDelete { focus }) = &mut app.modal.active {
                *focus = usize::from(*focus == 0);
            }
        }
        ModalMessage::Input(c) => {
            if let Some(input) = app.modal.goto_input_mut() {
                input.push(c);
            }
        }
        ModalMessage::Backspace => {
            if let Some(input) = app.modal.goto_input_mut() {
                input.pop();
            }
        }
    }
    Vec::new()
}
