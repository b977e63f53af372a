//! 日志初始化
//!
//! 终端被 ratatui 占用，日志只能写文件。
//! core 通过 `log` 门面输出，tracing-subscriber 的 tracing-log 桥接会一并收集。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE_NAME: &str = "record-manager-tui.log";

/// 获取日志目录路径
fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("record-manager-tui")
}

/// 初始化日志，返回日志文件路径
///
/// 级别由 `RUST_LOG` 控制，默认 info。
pub fn init_logging() -> Result<PathBuf> {
    let dir = get_log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}
