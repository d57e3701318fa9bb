//! 登录页状态

use super::form::{Field, Form};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

/// 登录页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub form: Form,
    /// 登录被拒绝时的行内错误
    pub error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::text("Email", "member@example.com"),
                Field::secret("Password", "Password"),
            ]),
            error: None,
        }
    }

    pub fn email(&self) -> &str {
        self.form.text(EMAIL)
    }

    pub fn password(&self) -> &str {
        self.form.text(PASSWORD)
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}
