//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use webspaces_core::ViewId;

use crate::event::keymap::Keymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if Keymap::FORCE_QUIT.matches(&key, true) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if let Some(msg) = Keymap::global(&key, app.is_editing()) {
        return msg;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() && app.shell_visible() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航外壳的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 跳转到选中项
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let horizontal = matches!(app.view(), ViewId::ChooseOs | ViewId::Dashboard);
    let msg = match key.code {
        KeyCode::Up | KeyCode::BackTab => ContentMessage::Previous,
        KeyCode::Down => ContentMessage::Next,
        KeyCode::Left if horizontal => ContentMessage::Previous,
        KeyCode::Right if horizontal => ContentMessage::Next,
        KeyCode::PageUp => ContentMessage::PreviousItem,
        KeyCode::PageDown => ContentMessage::NextItem,
        KeyCode::Delete => ContentMessage::Remove,
        KeyCode::Enter => ContentMessage::Submit,
        KeyCode::Backspace => ContentMessage::Backspace,
        KeyCode::Char(' ') if !app.is_editing() => ContentMessage::Toggle,
        KeyCode::Char(c)
            if app.is_editing() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            ContentMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    let goto = matches!(app.modal.active, Some(Modal::GoTo { .. }));
    let confirm = matches!(app.modal.active, Some(Modal::ConfirmDelete { .. }));
    if Keymap::BACK.matches(&key, false) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    let msg = match key.code {
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab | KeyCode::Left | KeyCode::Right if confirm => ModalMessage::ToggleFocus,
        KeyCode::Backspace if goto => ModalMessage::Backspace,
        KeyCode::Char(c) if goto => ModalMessage::Input(c),
        KeyCode::Char('q') => ModalMessage::Close,
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}
