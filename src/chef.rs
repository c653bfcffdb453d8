//! Recipe suggestion collaborator.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::inventory::Inventory;
use crate::matcher::{self, Suggestion};

/// Something that proposes a meal for an inventory snapshot.
#[async_trait]
pub trait Chef: Send + Sync {
    /// `Ok(None)` means nothing suitable; errors are reported to the user,
    /// never retried.
    async fn suggest(&self, inventory: &Inventory, intent: Option<&str>)
    -> Result<Option<Suggestion>>;
}

/// The rule-table chef behind a fixed "thinking" delay.
#[derive(Debug, Clone)]
pub struct MockChef {
    delay: Duration,
}

impl MockChef {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockChef {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl Chef for MockChef {
    async fn suggest(
        &self,
        inventory: &Inventory,
        intent: Option<&str>,
    ) -> Result<Option<Suggestion>> {
        tokio::time::sleep(self.delay).await;
        Ok(matcher::suggest_with_rule(inventory, intent))
    }
}
