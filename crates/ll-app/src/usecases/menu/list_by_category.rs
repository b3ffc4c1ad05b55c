use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use ll_core::menu::{MenuCategory, MenuItem};
use ll_core::ports::MenuRepositoryPort;
use ll_core::SoftRead;

/// Items of one category, straight from the store.
pub struct ListMenuByCategory {
    menu_repo: Arc<dyn MenuRepositoryPort>,
}

impl ListMenuByCategory {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { menu_repo }
    }

    pub fn from_ports(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self::new(menu_repo)
    }

    pub async fn execute(&self, category: MenuCategory) -> SoftRead<Vec<MenuItem>> {
        let span = info_span!("usecase.list_menu_by_category.execute", %category);

        async {
            let read = SoftRead::from_result(self.menu_repo.find_by_category(category).await);
            match read.reason() {
                Some(reason) => warn!(%reason, "Category read failed, showing empty list"),
                None => debug!(count = read.value().len(), "Category items loaded"),
            }
            read
        }
        .instrument(span)
        .await
    }
}
