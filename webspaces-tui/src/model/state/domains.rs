//! 域名页状态

use super::form::{Field, Form};

/// 域名页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainsState {
    /// 已绑定的域名
    pub domains: Vec<String>,
    /// 列表中选中的域名（Delete 解绑）
    pub selected: usize,
    /// 新域名输入框
    pub input: Form,
    /// 是否已从后端读取
    pub loaded: bool,
}

impl DomainsState {
    pub fn new() -> Self {
        Self {
            domains: Vec::new(),
            selected: 0,
            input: Form::new(vec![Field::text("Domain", "example.com")]),
            loaded: false,
        }
    }

    pub fn pending_domain(&self) -> &str {
        self.input.text(0)
    }

    pub fn set_domains(&mut self, domains: Vec<String>) {
        self.domains = domains;
        self.selected = 0;
        self.loaded = true;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.domains.len() {
            self.selected += 1;
        }
    }

    pub fn selected_domain(&self) -> Option<&str> {
        self.domains.get(self.selected).map(String::as_str)
    }

    /// 移除已解绑的域名，选中项保持在列表范围内
    pub fn remove(&mut self, domain: &str) {
        self.domains.retain(|d| d != domain);
        self.selected = self.selected.min(self.domains.len().saturating_sub(1));
    }
}

impl Default for DomainsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_the_last_row_moves_selection_up() {
        let mut state = DomainsState::new();
        state.set_domains(vec!["a.com".into(), "b.com".into()]);
        state.select_next();
        assert_eq!(state.selected_domain(), Some("b.com"));

        state.remove("b.com");
        assert_eq!(state.selected_domain(), Some("a.com"));
        state.remove("a.com");
        assert_eq!(state.selected_domain(), None);
    }
}
