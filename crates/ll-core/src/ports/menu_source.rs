use async_trait::async_trait;

use crate::menu::MenuItem;

/// Supplier of menu data, e.g. a remote API or a bundled fixture.
#[async_trait]
pub trait MenuSourcePort: Send + Sync {
    async fn fetch_menu(&self) -> anyhow::Result<Vec<MenuItem>>;
}
