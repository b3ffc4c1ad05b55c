use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use ll_core::menu::{name_contains, MenuCategory, MenuItem};
use ll_core::ports::{MenuRepositoryPort, StorageError};

use crate::db::models::{MenuItemRow, NewMenuItemRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::menu;

pub struct DieselMenuRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselMenuRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

impl<E, M> DieselMenuRepository<E, M>
where
    M: RowMapper<MenuItemRow, MenuItem>,
{
    fn map_rows(&self, rows: &[MenuItemRow]) -> anyhow::Result<Vec<MenuItem>> {
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(self.mapper.to_domain(row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl<E, M> MenuRepositoryPort for DieselMenuRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<MenuItem, NewMenuItemRow> + RowMapper<MenuItemRow, MenuItem> + Send + Sync,
{
    async fn replace_all(&self, items: &[MenuItem]) -> Result<(), StorageError> {
        let rows = items
            .iter()
            .map(|item| self.mapper.to_row(item))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| StorageError::Write(e.to_string()))?;

        let (removed, inserted) = self
            .executor
            .run(move |conn| {
                conn.transaction::<_, anyhow::Error, _>(|conn| {
                    let removed = diesel::delete(menu::table).execute(conn)?;
                    let inserted = if rows.is_empty() {
                        0
                    } else {
                        diesel::insert_into(menu::table)
                            .values(&rows)
                            .execute(conn)?
                    };
                    Ok((removed, inserted))
                })
            })
            .map_err(|e| StorageError::Write(e.to_string()))?;

        debug!(removed, inserted, "menu replaced");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<MenuItem>, StorageError> {
        self.executor
            .run(|conn| {
                let rows = menu::table.load::<MenuItemRow>(conn)?;
                self.map_rows(&rows)
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    async fn find_by_category(
        &self,
        category: MenuCategory,
    ) -> Result<Vec<MenuItem>, StorageError> {
        self.executor
            .run(|conn| {
                let rows = menu::table
                    .filter(menu::category.eq(category.as_str()))
                    .load::<MenuItemRow>(conn)?;
                self.map_rows(&rows)
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<MenuItem>, StorageError> {
        // SQLite LIKE only folds ASCII and treats `%`/`_` as wildcards, so the
        // match runs here instead.
        self.executor
            .run(|conn| {
                let rows: Vec<MenuItemRow> = menu::table
                    .load::<MenuItemRow>(conn)?
                    .into_iter()
                    .filter(|row| name_contains(&row.name, query))
                    .collect();
                self.map_rows(&rows)
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::executor::DieselSqliteExecutor;
    use crate::db::mappers::MenuItemRowMapper;
    use crate::db::pool::init_db_pool;
    use ll_core::menu::{MenuItemId, Price};
    use tempfile::TempDir;

    fn item(id: &str, name: &str, category: MenuCategory) -> MenuItem {
        MenuItem {
            id: MenuItemId::from(id),
            name: name.to_string(),
            price: Price::new(9.5).unwrap(),
            category,
            description: Some(format!("{name} description")),
            image: Some("🍽".to_string()),
        }
    }

    fn repo(dir: &TempDir) -> DieselMenuRepository<DieselSqliteExecutor, MenuItemRowMapper> {
        let db_path = dir.path().join("menu.db");
        let pool = init_db_pool(db_path.to_str().unwrap()).expect("Failed to init db");
        DieselMenuRepository::new(DieselSqliteExecutor::new(pool), MenuItemRowMapper)
    }

    #[tokio::test]
    async fn replace_all_overwrites_previous_menu() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.replace_all(&[
            item("1", "Bruschetta", MenuCategory::Starters),
            item("2", "Pasta", MenuCategory::Mains),
        ])
        .await
        .unwrap();
        repo.replace_all(&[item("3", "Beer", MenuCategory::Drinks)])
            .await
            .unwrap();

        let items = repo.list_all().await.unwrap();
        assert_eq!(items, vec![item("3", "Beer", MenuCategory::Drinks)]);
    }

    #[tokio::test]
    async fn replace_all_with_empty_list_clears_menu() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);

        repo.replace_all(&[item("1", "Water", MenuCategory::Drinks)])
            .await
            .unwrap();
        repo.replace_all(&[]).await.unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_replace_keeps_previous_menu() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let original = vec![item("1", "Hummus", MenuCategory::Starters)];
        repo.replace_all(&original).await.unwrap();

        let duplicate_ids = vec![
            item("7", "Pasta", MenuCategory::Mains),
            item("7", "Tiramisu", MenuCategory::Desserts),
        ];
        let result = repo.replace_all(&duplicate_ids).await;

        assert!(matches!(result, Err(StorageError::Write(_))));
        assert_eq!(repo.list_all().await.unwrap(), original);
    }

    #[tokio::test]
    async fn find_by_category_returns_only_matching_items() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.replace_all(&[
            item("1", "Bruschetta", MenuCategory::Starters),
            item("5", "Greek Salad", MenuCategory::Mains),
            item("7", "Pasta", MenuCategory::Mains),
            item("14", "Beer", MenuCategory::Drinks),
        ])
        .await
        .unwrap();

        let mains = repo.find_by_category(MenuCategory::Mains).await.unwrap();

        assert_eq!(mains.len(), 2);
        assert!(mains.iter().all(|i| i.category == MenuCategory::Mains));
        assert!(mains.contains(&item("5", "Greek Salad", MenuCategory::Mains)));
        assert!(repo
            .find_by_category(MenuCategory::Desserts)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn search_by_name_is_case_insensitive_and_literal() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        repo.replace_all(&[
            item("5", "Greek Salad", MenuCategory::Mains),
            item("8", "Caesar Salad", MenuCategory::Mains),
            item("15", "Iced Tea", MenuCategory::Drinks),
        ])
        .await
        .unwrap();

        let salads = repo.search_by_name("SALAD").await.unwrap();
        assert_eq!(salads.len(), 2);

        assert_eq!(repo.search_by_name("").await.unwrap().len(), 3);
        assert!(repo.search_by_name("%").await.unwrap().is_empty());
        assert!(repo.search_by_name("_ced").await.unwrap().is_empty());
    }
}
