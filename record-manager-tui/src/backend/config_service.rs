//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use record_manager_core::SubmitPolicy;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("record-manager-tui")
}

/// 获取配置文件路径
fn get_config_file() -> PathBuf {
    get_config_dir().join("config.json")
}

/// 应用配置
///
/// 缺失的字段取默认值，旧版本的配置文件仍可读取。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 界面主题
    pub theme: Theme,
    /// 校验失败时提交是否仍写入记录
    pub submit_policy: SubmitPolicy,
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置文件路径
    pub fn new() -> Self {
        Self::with_path(get_config_file())
    }

    /// 使用指定配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
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
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;

        // 文件损坏时不阻止启动，回退到默认配置
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable config file {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))?;

        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
