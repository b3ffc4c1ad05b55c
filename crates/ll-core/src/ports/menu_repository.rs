use async_trait::async_trait;

use crate::menu::{MenuCategory, MenuItem};
use crate::ports::errors::StorageError;

#[async_trait]
pub trait MenuRepositoryPort: Send + Sync {
    /// Atomically replace the whole menu with `items`.
    ///
    /// Either every item is stored or the previous menu is kept. Retrying
    /// after a failure is safe because the operation is a full replace.
    async fn replace_all(&self, items: &[MenuItem]) -> Result<(), StorageError>;

    /// All stored items, order not significant.
    async fn list_all(&self) -> Result<Vec<MenuItem>, StorageError>;

    /// Items whose category equals `category`.
    async fn find_by_category(&self, category: MenuCategory)
        -> Result<Vec<MenuItem>, StorageError>;

    /// Items whose name contains `query`, ignoring case.
    ///
    /// `query` is matched literally; the empty string matches every item.
    async fn search_by_name(&self, query: &str) -> Result<Vec<MenuItem>, StorageError>;
}
