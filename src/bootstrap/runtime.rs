use ll_app::{App, UseCases};
use ll_core::config::AppConfig;
use ll_infra::LocalStore;

use super::wiring::{deps_for, wire_dependencies, WiringResult};

/// Running application: the open store plus the wired use cases.
pub struct AppRuntime {
    store: LocalStore,
    app: App,
}

impl AppRuntime {
    pub fn new(config: &AppConfig) -> WiringResult<Self> {
        let (store, deps) = wire_dependencies(config)?;
        Ok(Self {
            store,
            app: App::new(deps),
        })
    }

    /// Runtime over an existing store, e.g. an in-memory one.
    pub fn with_store(store: LocalStore, config: &AppConfig) -> Self {
        let app = App::new(deps_for(&store, config));
        Self { store, app }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        self.app.usecases()
    }

    pub fn shutdown(self) {
        let Self { store, app } = self;
        drop(app);
        store.close();
    }
}
