//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `ll-infra` and `ll-app` at the same time.
//! It assembles; it does not decide.
//!
//! 仅用于"组装"，不用于"决策"。

use std::sync::Arc;
use std::time::Duration;

use ll_app::AppDeps;
use ll_core::config::AppConfig;
use ll_core::ports::MenuSourcePort;
use ll_infra::{FixtureMenuSource, LocalStore};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Opens the local store and builds the application dependencies.
///
/// # Errors / 错误
///
/// Returns `WiringError::DatabaseInit` if the path is not valid UTF-8 or the
/// store cannot be opened.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<(LocalStore, AppDeps)> {
    let db_url = config
        .database_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;
    let store = LocalStore::open(db_url).map_err(|e| WiringError::DatabaseInit(e.to_string()))?;

    let deps = deps_for(&store, config);
    info!(database = db_url, "Dependencies wired");
    Ok((store, deps))
}

/// Dependencies backed by an already opened store.
pub fn deps_for(store: &LocalStore, config: &AppConfig) -> AppDeps {
    let menu_source: Arc<dyn MenuSourcePort> = Arc::new(FixtureMenuSource::bundled(
        Duration::from_millis(config.menu_source_latency_ms.unwrap_or_default()),
    ));

    AppDeps {
        menu_repo: store.menu_repository(),
        menu_source,
        profile_repo: store.profile_repository(),
        onboarding_state: store.onboarding_state(),
    }
}
