//! 配置页状态

use webspaces_core::{ConfigsForm, SslSetting};

use super::form::{Field, Form};

const HTTP: usize = 0;
const HTTPS: usize = 1;
const STARTUP: usize = 2;
const SSL: usize = 3;

const SSL_LABEL: &str = "Enable SSL Termination";

/// 配置页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigsState {
    pub form: Form,
    /// 是否已从后端读取
    pub loaded: bool,
    /// 最近一次填充的表单，提交时据此保留原始 JSON 类型
    source: ConfigsForm,
}

impl ConfigsState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::text("HTTP Port", "HTTP Port"),
                Field::text("HTTPS Port", "HTTPS Port"),
                Field::text("Startup Delay (Seconds)", "Delay"),
                Field::toggle(SSL_LABEL),
            ]),
            loaded: false,
            source: ConfigsForm::default(),
        }
    }

    /// 用后端返回的配置填充表单（原样显示）
    ///
    /// SSL 不是布尔值时改为文本框，内容不做任何解释。
    pub fn fill(&mut self, configs: &ConfigsForm) {
        self.form.set_text(HTTP, configs.http.clone());
        self.form.set_text(HTTPS, configs.https.clone());
        self.form.set_text(STARTUP, configs.startup.clone());
        match &configs.ssl {
            SslSetting::Toggle(on) => {
                self.form.replace(SSL, Field::toggle(SSL_LABEL));
                self.form.set_flag(SSL, *on);
            }
            SslSetting::Text(text) => {
                self.form.replace(SSL, Field::text(SSL_LABEL, "SSL"));
                self.form.set_text(SSL, text.clone());
            }
        }
        self.source = configs.clone();
        self.loaded = true;
    }

    pub fn to_form(&self) -> ConfigsForm {
        let ssl = match &self.source.ssl {
            SslSetting::Toggle(_) => SslSetting::Toggle(self.form.flag(SSL)),
            SslSetting::Text(_) => SslSetting::Text(self.form.text(SSL).to_string()),
        };
        ConfigsForm {
            http: self.form.text(HTTP).to_string(),
            https: self.form.text(HTTPS).to_string(),
            startup: self.form.text(STARTUP).to_string(),
            ssl,
            fetched: self.source.fetched.clone(),
        }
    }
}

impl Default for ConfigsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use webspaces_gateway::Configs;

    #[test]
    fn fill_then_read_back() {
        let mut state = ConfigsState::new();
        let configs = ConfigsForm::from_configs(&Configs {
            http: json!("8080"),
            https: json!(8443),
            startup: json!("3"),
            ssl: json!(true),
        });
        state.fill(&configs);
        assert!(state.loaded);
        assert!(state.form.flag(SSL));
        assert_eq!(state.to_form(), configs);
    }

    #[test]
    fn text_ssl_is_edited_as_text() {
        let mut state = ConfigsState::new();
        state.fill(&ConfigsForm::from_configs(&Configs {
            http: json!("80"),
            https: json!(8443),
            startup: json!(0),
            ssl: json!("on"),
        }));
        assert_eq!(state.form.text(SSL), "on");
        assert!(state.form.fields[SSL].is_text());

        let submitted = state.to_form().to_configs();
        assert_eq!(submitted.ssl, json!("on"));
        assert_eq!(submitted.https, json!(8443));
    }
}
