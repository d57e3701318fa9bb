//! 端口页状态

use webspaces_core::PortsForm;
use webspaces_gateway::PortMap;

use super::form::{Field, Form};

/// 端口页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortsState {
    pub form: Form,
    /// 当前生效的转发（外部端口 -> 内部端口）
    pub forwards: PortMap,
    /// 转发列表中的选中行
    pub selected: usize,
    pub loaded: bool,
}

impl PortsState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::text("External Port 1", "External Port"),
                Field::text("External Port 2", "External Port"),
                Field::text("Internal Port 1", "Internal Port"),
                Field::text("Internal Port 2", "Internal Port"),
            ]),
            forwards: PortMap::new(),
            selected: 0,
            loaded: false,
        }
    }

    pub fn to_form(&self) -> PortsForm {
        PortsForm {
            external1: self.form.text(0).to_string(),
            external2: self.form.text(1).to_string(),
            internal1: self.form.text(2).to_string(),
            internal2: self.form.text(3).to_string(),
        }
    }

    pub fn set_forwards(&mut self, forwards: PortMap) {
        self.forwards = forwards;
        self.selected = self.selected.min(self.forwards.len().saturating_sub(1));
        self.loaded = true;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.forwards.len() {
            self.selected += 1;
        }
    }

    /// 选中行的外部端口
    pub fn selected_port(&self) -> Option<u16> {
        self.forwards.keys().nth(self.selected).copied()
    }

    pub fn remove(&mut self, external: u16) {
        self.forwards.remove(&external);
        self.selected = self.selected.min(self.forwards.len().saturating_sub(1));
    }
}

impl Default for PortsState {
    fn default() -> Self {
        Self::new()
    }
}
