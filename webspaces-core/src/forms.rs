//! 表单输入与请求体之间的转换

use serde_json::Value;
use webspaces_gateway::{Configs, PortMapping, display_value};

use crate::error::{CoreError, CoreResult};

/// 配置页表单：三个文本框和 SSL 设置
///
/// 文本按后端返回原样显示。提交时未改动的字段原样回传，
/// 改动过的字段尽量保持原来的 JSON 类型。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigsForm {
    pub http: String,
    pub https: String,
    pub startup: String,
    pub ssl: SslSetting,
    /// 读取到的原始值
    pub fetched: Configs,
}

/// SSL 设置：后端给出布尔值（或没有给出）时是开关，其他值按文本原样编辑
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SslSetting {
    Toggle(bool),
    Text(String),
}

impl Default for SslSetting {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl ConfigsForm {
    pub fn from_configs(configs: &Configs) -> Self {
        Self {
            http: display_value(&configs.http),
            https: display_value(&configs.https),
            startup: display_value(&configs.startup),
            ssl: match &configs.ssl {
                Value::Bool(on) => SslSetting::Toggle(*on),
                Value::Null => SslSetting::Toggle(false),
                other => SslSetting::Text(display_value(other)),
            },
            fetched: configs.clone(),
        }
    }

    pub fn to_configs(&self) -> Configs {
        Configs {
            http: edited_value(&self.fetched.http, &self.http),
            https: edited_value(&self.fetched.https, &self.https),
            startup: edited_value(&self.fetched.startup, &self.startup),
            ssl: match &self.ssl {
                SslSetting::Toggle(on) => Value::Bool(*on),
                SslSetting::Text(text) => edited_value(&self.fetched.ssl, text),
            },
        }
    }
}

/// 把编辑后的文本还原为 JSON 值
///
/// 文本未变时返回原值；数字和布尔在文本仍能解析时保持类型，否则作为字符串。
fn edited_value(original: &Value, text: &str) -> Value {
    if display_value(original) == text {
        return original.clone();
    }
    match original {
        Value::Number(_) => text
            .trim()
            .parse::<serde_json::Number>()
            .map_or_else(|_| Value::String(text.to_string()), Value::Number),
        Value::Bool(_) => match text.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        },
        _ => Value::String(text.to_string()),
    }
}

/// 端口页表单：两个外部端口、两个内部端口
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortsForm {
    pub external1: String,
    pub external2: String,
    pub internal1: String,
    pub internal2: String,
}

impl PortsForm {
    pub fn parse(&self) -> CoreResult<PortMapping> {
        Ok(PortMapping {
            external1: parse_port("External port 1", &self.external1)?,
            external2: parse_port("External port 2", &self.external2)?,
            internal1: parse_port("Internal port 1", &self.internal1)?,
            internal2: parse_port("Internal port 2", &self.internal2)?,
        })
    }
}

fn parse_port(label: &str, raw: &str) -> CoreResult<u16> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    raw.parse::<u16>()
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| CoreError::Validation(format!("{label} must be a port between 1 and 65535")))
}
