//! Local store handle
//!
//! `LocalStore` is only obtainable through [`LocalStore::open`], which creates
//! the schema. Every repository handed out afterwards can assume an
//! initialized database.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, info_span};

use ll_core::ports::{
    MenuRepositoryPort, OnboardingStatePort, StorageError, UserProfileRepositoryPort,
};

use crate::db::executor::DieselSqliteExecutor;
use crate::db::mappers::{MenuItemRowMapper, OnboardingRowMapper, UserProfileRowMapper};
use crate::db::pool::{init_db_pool, IN_MEMORY_URL};
use crate::db::repositories::{
    DieselMenuRepository, DieselOnboardingRepository, DieselUserProfileRepository,
};

pub struct LocalStore {
    database_url: String,
    menu: Arc<dyn MenuRepositoryPort>,
    profile: Arc<dyn UserProfileRepositoryPort>,
    onboarding: Arc<dyn OnboardingStatePort>,
}

impl LocalStore {
    /// Opens (creating if needed) the database at `database_url` and runs the
    /// schema migrations.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(database_url: &str) -> Result<Self, StorageError> {
        let _span = info_span!("infra.store.open", database_url).entered();

        if database_url != IN_MEMORY_URL {
            if let Some(parent) = Path::new(database_url).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StorageError::Unavailable(format!(
                            "cannot create database directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
            }
        }

        let pool = init_db_pool(database_url)
            .map_err(|e| StorageError::Unavailable(format!("{:#}", e)))?;
        let executor = DieselSqliteExecutor::new(pool);

        let menu: Arc<dyn MenuRepositoryPort> = Arc::new(DieselMenuRepository::new(
            executor.clone(),
            MenuItemRowMapper,
        ));
        let profile: Arc<dyn UserProfileRepositoryPort> = Arc::new(
            DieselUserProfileRepository::new(executor.clone(), UserProfileRowMapper),
        );
        let onboarding: Arc<dyn OnboardingStatePort> = Arc::new(DieselOnboardingRepository::new(
            executor,
            OnboardingRowMapper,
            UserProfileRowMapper,
        ));

        info!("local store opened");
        Ok(Self {
            database_url: database_url.to_string(),
            menu,
            profile,
            onboarding,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::open(IN_MEMORY_URL)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn menu_repository(&self) -> Arc<dyn MenuRepositoryPort> {
        self.menu.clone()
    }

    pub fn profile_repository(&self) -> Arc<dyn UserProfileRepositoryPort> {
        self.profile.clone()
    }

    pub fn onboarding_state(&self) -> Arc<dyn OnboardingStatePort> {
        self.onboarding.clone()
    }

    /// Releases this handle. The pool closes once every repository handed
    /// out by the store has been dropped too.
    pub fn close(self) {
        info!(database_url = %self.database_url, "local store closed");
    }
}
