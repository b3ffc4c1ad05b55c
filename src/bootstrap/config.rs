//! # Configuration Loader / 配置加载器
//!
//! `load_config` is pure data loading: whatever is in the file becomes the
//! `AppConfig`, without validation. `resolve_config` picks the file to read
//! and fills facts the file left empty from the system defaults.
//!
//! 仅纯数据加载；缺省值只在 `resolve_config` 中补齐。

use std::path::{Path, PathBuf};

use anyhow::Context;
use ll_app::AppPaths;
use ll_core::config::AppConfig;
use tracing::{debug, info};

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Configuration for this process.
///
/// Order: the explicit `--config` file (must exist), else `<data_dir>/config.toml`
/// when present, else the system defaults rooted at `data_dir`. Settings a
/// config file leaves out (database path, menu latency) come from the defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    paths: &AppPaths,
    data_dir: &Path,
) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_system_defaults(data_dir.to_path_buf());

    let candidate: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => paths
            .config_path
            .exists()
            .then(|| paths.config_path.clone()),
    };

    let Some(path) = candidate else {
        debug!("No config file, using system defaults");
        return Ok(defaults);
    };

    let mut config = load_config(&path)?;
    if config.database_path.as_os_str().is_empty() {
        config.database_path = defaults.database_path;
    }
    if config.menu_source_latency_ms.is_none() {
        config.menu_source_latency_ms = defaults.menu_source_latency_ms;
    }
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
