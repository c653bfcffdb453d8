//! Ingestion collaborators: receipt scanning and fridge analysis.
//!
//! The real thing would call OCR and vision services. The mock waits a
//! fixed delay and hands back a canned batch with fresh ids.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use crate::catalog;
use crate::error::Result;
use crate::model::InventoryItem;

/// Source of new inventory items.
#[async_trait]
pub trait Ingestion: Send + Sync {
    /// Items read off a shopping receipt.
    async fn scan(&self) -> Result<Vec<InventoryItem>>;

    /// Items spotted by the fridge camera.
    async fn analyze(&self) -> Result<Vec<InventoryItem>>;
}

/// Simulated ingestion: fixed delay, fixed batches.
#[derive(Debug, Clone)]
pub struct MockIngestion {
    delay: Duration,
}

impl MockIngestion {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockIngestion {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl Ingestion for MockIngestion {
    async fn scan(&self) -> Result<Vec<InventoryItem>> {
        tokio::time::sleep(self.delay).await;
        let batch = catalog::receipt_batch(Local::now().date_naive());
        debug!(items = batch.len(), "receipt scanned");
        Ok(batch)
    }

    async fn analyze(&self) -> Result<Vec<InventoryItem>> {
        tokio::time::sleep(self.delay).await;
        let batch = catalog::fridge_batch(Local::now().date_naive());
        debug!(items = batch.len(), "fridge analyzed");
        Ok(batch)
    }
}
