use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, warn, Instrument};

use ll_core::menu::{ensure_unique_ids, MenuItem};
use ll_core::ports::{MenuRepositoryPort, MenuSourcePort};
use ll_core::SoftRead;

/// Use case run when the menu screen opens.
///
/// Serves the stored menu. The first time (empty store) it fetches the menu
/// from the source and stores it. Any failure degrades to an empty menu.
pub struct LoadMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
    menu_source: Arc<dyn MenuSourcePort>,
}

impl LoadMenu {
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

    pub async fn execute(&self) -> SoftRead<Vec<MenuItem>> {
        let span = info_span!("usecase.load_menu.execute");

        async {
            let cached = match self.menu_repo.list_all().await {
                Ok(items) => items,
                Err(err) => {
                    warn!(error = %err, "Menu read failed, showing empty menu");
                    return SoftRead::degraded(Vec::new(), err.to_string());
                }
            };

            if !cached.is_empty() {
                info!(count = cached.len(), "Menu served from local store");
                return SoftRead::Loaded(cached);
            }

            match self.seed().await {
                Ok(items) => {
                    info!(count = items.len(), "Menu fetched and stored");
                    SoftRead::Loaded(items)
                }
                Err(err) => {
                    let reason = format!("{err:#}");
                    warn!(%reason, "Menu seeding failed, showing empty menu");
                    SoftRead::degraded(Vec::new(), reason)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn seed(&self) -> anyhow::Result<Vec<MenuItem>> {
        let items = self
            .menu_source
            .fetch_menu()
            .await
            .context("Failed to fetch menu")?;
        ensure_unique_ids(&items)?;
        self.menu_repo
            .replace_all(&items)
            .await
            .context("Failed to store menu")?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{menu_item, MockMenuRepo, MockMenuSource};
    use ll_core::menu::MenuCategory;
    use ll_core::ports::StorageError;

    #[tokio::test]
    async fn serves_cached_menu_without_fetching() {
        let cached = vec![menu_item("1", "Bruschetta", MenuCategory::Starters)];
        let mut repo = MockMenuRepo::new();
        let returned = cached.clone();
        repo.expect_list_all().return_once(move || Ok(returned));
        repo.expect_replace_all().never();
        let mut source = MockMenuSource::new();
        source.expect_fetch_menu().never();

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert_eq!(result, SoftRead::Loaded(cached));
    }

    #[tokio::test]
    async fn seeds_empty_store_from_source() {
        let fetched = vec![
            menu_item("1", "Bruschetta", MenuCategory::Starters),
            menu_item("12", "Water", MenuCategory::Drinks),
        ];
        let mut repo = MockMenuRepo::new();
        repo.expect_list_all().return_once(|| Ok(Vec::new()));
        repo.expect_replace_all()
            .withf(|items: &[MenuItem]| items.len() == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut source = MockMenuSource::new();
        let returned = fetched.clone();
        source.expect_fetch_menu().return_once(move || Ok(returned));

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert_eq!(result, SoftRead::Loaded(fetched));
    }

    #[tokio::test]
    async fn read_failure_degrades_to_empty_menu() {
        let mut repo = MockMenuRepo::new();
        repo.expect_list_all()
            .return_once(|| Err(StorageError::Read("disk I/O error".to_string())));
        let source = MockMenuSource::new();

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert!(result.is_degraded());
        assert!(result.value().is_empty());
        assert!(result.reason().unwrap().contains("disk I/O error"));
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_menu() {
        let mut repo = MockMenuRepo::new();
        repo.expect_list_all().return_once(|| Ok(Vec::new()));
        repo.expect_replace_all().never();
        let mut source = MockMenuSource::new();
        source
            .expect_fetch_menu()
            .return_once(|| Err(anyhow::anyhow!("connection refused")));

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert!(result.is_degraded());
        assert!(result.into_value().is_empty());
    }

    #[tokio::test]
    async fn duplicate_ids_from_source_are_not_stored() {
        let mut repo = MockMenuRepo::new();
        repo.expect_list_all().return_once(|| Ok(Vec::new()));
        repo.expect_replace_all().never();
        let mut source = MockMenuSource::new();
        source.expect_fetch_menu().return_once(|| {
            Ok(vec![
                menu_item("1", "Water", MenuCategory::Drinks),
                menu_item("1", "Coke", MenuCategory::Drinks),
            ])
        });

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert!(result.is_degraded());
        assert!(result.reason().unwrap().contains("duplicate menu item id"));
    }

    #[tokio::test]
    async fn store_failure_while_seeding_degrades() {
        let mut repo = MockMenuRepo::new();
        repo.expect_list_all().return_once(|| Ok(Vec::new()));
        repo.expect_replace_all()
            .returning(|_| Err(StorageError::Write("database is locked".to_string())));
        let mut source = MockMenuSource::new();
        source
            .expect_fetch_menu()
            .return_once(|| Ok(vec![menu_item("1", "Water", MenuCategory::Drinks)]));

        let result = LoadMenu::new(Arc::new(repo), Arc::new(source)).execute().await;

        assert!(result.is_degraded());
        assert!(result.value().is_empty());
    }
}
