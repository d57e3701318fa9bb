//! 配置服务
//!
//! 配置文件：`<config dir>/webspaces/config.json`，不存在时按默认值创建。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 后端地址环境变量
pub const ENV_API_URL: &str = "WEBSPACES_API_URL";
/// 成员身份环境变量
pub const ENV_USER: &str = "WEBSPACES_USER";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端 API 根地址
    pub api_base_url: String,
    /// 随请求携带的成员身份
    pub user: Option<String>,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 读取类请求的重试次数
    pub get_retries: u32,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            user: None,
            request_timeout_secs: 15,
            get_retries: webspaces_gateway::DEFAULT_GET_RETRIES,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖文件中的值
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(user) = lookup(ENV_USER).filter(|v| !v.trim().is_empty()) {
            self.user = Some(user.trim().to_string());
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("webspaces")
        .join("config.json")
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            let config = AppConfig::default();
            self.save(&config)?;
            log::info!("[config] Created default config at {}", self.path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
