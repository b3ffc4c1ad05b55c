use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use ll_core::menu::{ensure_unique_ids, MenuItem};
use ll_core::ports::{MenuRepositoryPort, MenuSourcePort};

/// Re-fetches the menu and replaces the stored copy.
///
/// User-triggered, so errors are returned and the call can be retried; the
/// replace is a full overwrite.
pub struct RefreshMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
    menu_source: Arc<dyn MenuSourcePort>,
}

impl RefreshMenu {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>, menu_source: Arc<dyn MenuSourcePort>) -> Self {
        Self {
            menu_repo,
            menu_source,
        }
    }

    pub fn from_ports(
        menu_repo: Arc<dyn MenuRepositoryPort>,
        menu_source: Arc<dyn MenuSourcePort>,
    ) -> Self {
        Self::new(menu_repo, menu_source)
    }

    pub async fn execute(&self) -> anyhow::Result<Vec<MenuItem>> {
        let span = info_span!("usecase.refresh_menu.execute");

        async {
            let items = self
                .menu_source
                .fetch_menu()
                .await
                .context("Failed to fetch menu")?;
            ensure_unique_ids(&items).context("Menu source returned an invalid menu")?;
            self.menu_repo
                .replace_all(&items)
                .await
                .context("Failed to store menu")?;

            info!(count = items.len(), "Menu refreshed");
            Ok(items)
        }
        .instrument(span)
        .await
    }
}
