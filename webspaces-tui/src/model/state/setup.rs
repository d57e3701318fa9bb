//! 设置向导页状态：选择系统、设置 root 密码

use webspaces_core::WizardProgress;
use webspaces_gateway::OsChoice;

use super::form::{Field, Form};

/// 选择系统页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseOsState {
    /// `OsChoice::ALL` 中的索引
    pub selected: usize,
}

impl ChooseOsState {
    /// 预选之前已被接受的系统
    pub fn new(progress: &WizardProgress) -> Self {
        let selected = progress
            .os
            .and_then(|os| OsChoice::ALL.iter().position(|o| *o == os))
            .unwrap_or(0);
        Self { selected }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < OsChoice::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn choice(&self) -> OsChoice {
        OsChoice::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(OsChoice::Arch)
    }
}

const PASSWORD: usize = 0;
const CONFIRM: usize = 1;
const SSH: usize = 2;

/// 设置 root 密码页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRootState {
    pub form: Form,
}

impl CreateRootState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::secret("Password", "Enter Password"),
                Field::secret("Confirm", "Re-enter Password"),
                Field::text("SSH Key (Optional)", "ssh-ed25519 AAAA..."),
            ]),
        }
    }

    pub fn password(&self) -> &str {
        self.form.text(PASSWORD)
    }

    pub fn confirm(&self) -> &str {
        self.form.text(CONFIRM)
    }

    pub fn ssh(&self) -> &str {
        self.form.text(SSH)
    }
}

impl Default for CreateRootState {
    fn default() -> Self {
        Self::new()
    }
}
