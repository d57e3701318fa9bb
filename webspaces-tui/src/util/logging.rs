//! 日志初始化
//!
//! 终端被 UI 占用，日志只写文件：`<data dir>/webspaces/logs/webspaces-tui.log`。
//! 过滤规则依次取 `WEBSPACES_LOG`、`RUST_LOG`，都没有时为 `info`。
//! 库中通过 `log` 记录的日志也会转到这里。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG: &str = "WEBSPACES_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// 日志文件路径
pub fn log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("webspaces")
        .join("logs")
        .join("webspaces-tui.log")
}

/// 选出生效的过滤指令
fn filter_directive(webspaces_log: Option<String>, rust_log: Option<String>) -> String {
    webspaces_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// 安装全局 subscriber，返回日志文件路径
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let directive = filter_directive(std::env::var(ENV_LOG).ok(), std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()?;

    tracing::info!("Webspaces TUI starting (log filter: {directive})");
    Ok(path)
}
