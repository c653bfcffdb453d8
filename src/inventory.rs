//! Inventory mutation rules.
//!
//! Every operation consumes the collection and returns the new one, so
//! callers always swap in a complete result. Unknown ids are silent
//! no-ops; nothing here returns an error.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{InventoryItem, ItemId};

/// Days a restocked item stays good for.
pub const RESTOCK_SHELF_LIFE_DAYS: u64 = 7;

/// Default lookahead for "expiring soon".
pub const EXPIRY_WINDOW_DAYS: i64 = 3;

/// The tracked goods, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Merge a batch in. No dedup by name or category; the batch is
    /// expected to carry fresh ids.
    pub fn add(mut self, batch: impl IntoIterator<Item = InventoryItem>) -> Self {
        self.items.extend(batch);
        self
    }

    /// Consume the listed items for a meal.
    ///
    /// Items with `quantity <= 1` are depleted (quantity, freshness and
    /// stock level all zeroed) but stay in the collection so a restock can
    /// still find them. Larger quantities and the stock level are halved
    /// and floored; freshness is untouched.
    pub fn cook(self, ingredient_ids: &[ItemId]) -> Self {
        self.map_listed(ingredient_ids, |item| {
            if item.quantity <= 1.0 {
                item.quantity = 0.0;
                item.freshness = 0;
                item.stock_level = 0;
            } else {
                item.quantity = (item.quantity * 0.5).floor();
                item.stock_level /= 2;
            }
        })
    }

    /// Replenish the listed items: full stock, full freshness, a new
    /// expiry date a week from `today`, and quantity back up to the
    /// item's restock quantity if it had fallen below it.
    pub fn restock(self, item_ids: &[ItemId], today: NaiveDate) -> Self {
        let expiry = today + Days::new(RESTOCK_SHELF_LIFE_DAYS);
        self.map_listed(item_ids, |item| {
            item.stock_level = 100;
            item.freshness = 100;
            item.expiry_date = expiry;
            item.quantity = item.quantity.max(item.restock_quantity());
        })
    }

    /// Drop the listed items entirely.
    pub fn remove(mut self, item_ids: &[ItemId]) -> Self {
        let ids: HashSet<&ItemId> = item_ids.iter().collect();
        self.items.retain(|item| !ids.contains(&item.id));
        self
    }

    /// Change one item's minimum threshold.
    pub fn set_threshold(self, id: &ItemId, threshold: u32) -> Self {
        self.map_listed(std::slice::from_ref(id), |item| {
            item.min_threshold = Some(threshold);
        })
    }

    fn map_listed(mut self, ids: &[ItemId], mut f: impl FnMut(&mut InventoryItem)) -> Self {
        if ids.is_empty() {
            return self;
        }
        let ids: HashSet<&ItemId> = ids.iter().collect();
        for item in self.items.iter_mut().filter(|item| ids.contains(&item.id)) {
            f(item);
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items with quantity > 0. The recipe matcher's candidate pool.
    pub fn available(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|item| item.is_available())
    }

    pub fn depleted(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|item| item.is_depleted())
    }

    /// Items at or below their minimum threshold.
    pub fn restock_candidates(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|item| item.needs_restock())
    }

    pub fn expiring(&self, today: NaiveDate, window_days: i64) -> impl Iterator<Item = &InventoryItem> {
        self.items
            .iter()
            .filter(move |item| item.is_expiring(today, window_days))
    }

    /// Mean freshness, rounded. Zero for an empty inventory.
    pub fn average_freshness(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let sum: u32 = self.items.iter().map(|item| u32::from(item.freshness)).sum();
        (f64::from(sum) / self.items.len() as f64).round() as u8
    }

    /// Sum of item prices.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn stats(&self, today: NaiveDate, window_days: i64) -> InventoryStats {
        InventoryStats {
            total_items: self.len(),
            average_freshness: self.average_freshness(),
            expiring: self.expiring(today, window_days).count(),
            depleted: self.depleted().count(),
            needs_restock: self.restock_candidates().count(),
            total_value: self.total_value(),
        }
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Dashboard figures for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub average_freshness: u8,
    pub expiring: usize,
    pub depleted: usize,
    pub needs_restock: usize,
    pub total_value: f64,
}
