//! Application configuration domain model

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database path (path info only, no existence check)
    pub database_path: PathBuf,

    /// Simulated latency of the fixture menu source, in milliseconds.
    /// `None` when the config does not set it.
    pub menu_source_latency_ms: Option<u64>,

    /// Whether logs are also written to rolling files
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            database_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("database_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            menu_source_latency_ms: toml_value
                .get("menu")
                .and_then(|m| m.get("source_latency_ms"))
                .and_then(|v| v.as_integer())
                .map(|ms| ms.max(0) as u64),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            menu_source_latency_ms: None,
            file_logging: false,
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// The base directory should be computed by the caller using
    /// platform-specific logic (e.g., the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("little_lemon.db"),
            menu_source_latency_ms: Some(500),
            file_logging: true,
        }
    }
}
