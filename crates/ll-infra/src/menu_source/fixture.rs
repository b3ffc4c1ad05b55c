use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use ll_core::menu::MenuItem;
use ll_core::ports::MenuSourcePort;

const BUNDLED_MENU: &str = include_str!("../../fixtures/menu.json");

/// Menu source backed by a JSON document, with a simulated network delay.
#[derive(Debug, Clone)]
pub struct FixtureMenuSource {
    document: String,
    latency: Duration,
}

impl FixtureMenuSource {
    /// The restaurant's menu as shipped with the application.
    pub fn bundled(latency: Duration) -> Self {
        Self::from_json(BUNDLED_MENU, latency)
    }

    pub fn from_json(document: impl Into<String>, latency: Duration) -> Self {
        Self {
            document: document.into(),
            latency,
        }
    }
}

#[async_trait]
impl MenuSourcePort for FixtureMenuSource {
    async fn fetch_menu(&self) -> anyhow::Result<Vec<MenuItem>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let items: Vec<MenuItem> =
            serde_json::from_str(&self.document).context("Failed to parse menu document")?;
        debug!(count = items.len(), "menu fetched from fixture");
        Ok(items)
    }
}
