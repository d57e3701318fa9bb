//! 快捷键配置
//!
//! 每个全局快捷键有一个随时可用的组合键，以及一个可选的单字母形式。
//! 单字母形式只在没有文本字段获得焦点时生效，避免吞掉输入。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::AppMessage;

#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    pub letter: Option<char>,
}

impl Shortcut {
    const fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers::NONE,
            code,
            letter: None,
        }
    }

    /// `Alt+c`，不编辑时也可以直接按 `c`
    const fn alt(c: char) -> Self {
        Self {
            modifiers: KeyModifiers::ALT,
            code: KeyCode::Char(c),
            letter: Some(c),
        }
    }

    const fn ctrl(c: char) -> Self {
        Self {
            modifiers: KeyModifiers::CONTROL,
            code: KeyCode::Char(c),
            letter: None,
        }
    }

    const fn or_letter(mut self, c: char) -> Self {
        self.letter = Some(c);
        self
    }

    pub fn matches(&self, key: &KeyEvent, editing: bool) -> bool {
        if key.modifiers == self.modifiers && key.code == self.code {
            return true;
        }
        match (self.letter, key.code) {
            (Some(letter), KeyCode::Char(c)) => {
                !editing && c == letter && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
            }
            _ => false,
        }
    }
}

pub struct Keymap;

impl Keymap {
    pub const FORCE_QUIT: Shortcut = Shortcut::ctrl('c');
    pub const BACK: Shortcut = Shortcut::plain(KeyCode::Esc);

    /// 焦点无关的快捷键，按顺序匹配
    pub const GLOBAL: [(Shortcut, fn() -> AppMessage); 8] = [
        (Shortcut::alt('q'), || AppMessage::Quit),
        (Shortcut::alt('h').or_letter('?'), || AppMessage::ShowHelp),
        (Shortcut::alt('r'), || AppMessage::Refresh),
        (Shortcut::alt('g'), || AppMessage::OpenGoTo),
        (Shortcut::alt('n'), || AppMessage::WizardNext),
        (Shortcut::alt('p'), || AppMessage::WizardPrevious),
        (Shortcut::plain(KeyCode::Esc), || AppMessage::GoBack),
        (Shortcut::plain(KeyCode::Tab), || AppMessage::ToggleFocus),
    ];

    /// 第一个匹配的全局快捷键对应的消息
    pub fn global(key: &KeyEvent, editing: bool) -> Option<AppMessage> {
        Self::GLOBAL
            .iter()
            .find(|(shortcut, _)| shortcut.matches(key, editing))
            .map(|(_, message)| message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), modifiers)
    }

    #[test]
    fn letter_only_applies_when_not_editing() {
        let quit = Shortcut::alt('q');
        assert!(quit.matches(&key(KeyModifiers::NONE, 'q'), false));
        assert!(!quit.matches(&key(KeyModifiers::NONE, 'q'), true));
        assert!(quit.matches(&key(KeyModifiers::ALT, 'q'), true));
    }

    #[test]
    fn help_has_a_question_mark_letter() {
        let msg = Keymap::global(&key(KeyModifiers::SHIFT, '?'), false);
        assert!(matches!(msg, Some(AppMessage::ShowHelp)));
        assert!(Keymap::global(&key(KeyModifiers::NONE, 'h'), false).is_none());
    }
}
