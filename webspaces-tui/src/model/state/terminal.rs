//! 终端页状态：控制台日志

/// 终端页状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalState {
    pub log: String,
    pub loaded: bool,
}

impl TerminalState {
    pub fn set_log(&mut self, log: String) {
        self.log = log;
        self.loaded = true;
    }
}
