use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use ll_core::menu::MenuItem;
use ll_core::ports::MenuRepositoryPort;
use ll_core::SoftRead;

/// Name search over the stored menu.
///
/// A blank query means "no filter" and lists the whole menu.
pub struct SearchMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
}

impl SearchMenu {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { menu_repo }
    }

    pub fn from_ports(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self::new(menu_repo)
    }

    pub async fn execute(&self, query: &str) -> SoftRead<Vec<MenuItem>> {
        let query = query.trim();
        let span = info_span!("usecase.search_menu.execute", query);

        async {
            let result = if query.is_empty() {
                self.menu_repo.list_all().await
            } else {
                self.menu_repo.search_by_name(query).await
            };

            let read = SoftRead::from_result(result);
            match read.reason() {
                Some(reason) => warn!(%reason, "Menu search failed, showing empty list"),
                None => debug!(count = read.value().len(), "Menu search finished"),
            }
            read
        }
        .instrument(span)
        .await
    }
}
