//! Single-writer inventory store.
//!
//! The store owns the authoritative inventory and the event stream. All
//! mutations go through its commands; consumers get snapshots.

use chrono::{NaiveDate, Utc};
use opentelemetry::KeyValue;
use tracing::debug;

use crate::event::{Event, EventKind};
use crate::inventory::Inventory;
use crate::model::{InventoryItem, ItemId, RecipeId};
use crate::telemetry::metrics;

/// Owns the inventory. Every command swaps in a complete new collection
/// and records one event.
#[derive(Debug, Default)]
pub struct Store {
    inventory: Inventory,
    events: Vec<Event>,
}

impl Store {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            events: Vec::new(),
        }
    }

    /// Read-only view of the current inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Owned copy of the current inventory.
    pub fn snapshot(&self) -> Inventory {
        self.inventory.clone()
    }

    /// Merge a batch. Returns how many items were added.
    pub fn add(&mut self, source: &str, batch: Vec<InventoryItem>) -> usize {
        let ids: Vec<ItemId> = batch.iter().map(|item| item.id.clone()).collect();
        let added = ids.len();
        self.apply(|inv| inv.add(batch));

        metrics::items_added().add(added as u64, &[KeyValue::new("source", source.to_string())]);
        debug!(source, added, "items added");

        self.record(EventKind::ItemsAdded {
            source: source.to_string(),
            ids,
        });
        added
    }

    /// Consume ingredients for a meal. Returns the ids that ended up
    /// depleted by this call.
    pub fn cook(&mut self, recipe: Option<&RecipeId>, ingredient_ids: &[ItemId]) -> Vec<ItemId> {
        let ingredients = self.known(ingredient_ids);
        let was_available: Vec<ItemId> = ingredients
            .iter()
            .filter(|id| self.inventory.get(id).is_some_and(InventoryItem::is_available))
            .cloned()
            .collect();
        self.apply(|inv| inv.cook(&ingredients));

        let depleted: Vec<ItemId> = was_available
            .into_iter()
            .filter(|id| self.inventory.get(id).is_some_and(InventoryItem::is_depleted))
            .collect();

        metrics::meals_cooked().add(1, &[]);
        debug!(
            ingredients = ingredients.len(),
            depleted = depleted.len(),
            "meal cooked"
        );

        self.record(EventKind::MealCooked {
            recipe: recipe.cloned(),
            ingredients,
            depleted: depleted.clone(),
        });
        depleted
    }

    /// Replenish items. Returns how many known items were restocked.
    pub fn restock(&mut self, item_ids: &[ItemId], today: NaiveDate) -> usize {
        let ids = self.known(item_ids);
        self.apply(|inv| inv.restock(&ids, today));

        metrics::items_restocked().add(ids.len() as u64, &[]);
        debug!(restocked = ids.len(), "items restocked");

        let count = ids.len();
        self.record(EventKind::ItemsRestocked { ids });
        count
    }

    /// Drop items. Returns how many were removed.
    pub fn remove(&mut self, item_ids: &[ItemId]) -> usize {
        let ids = self.known(item_ids);
        self.apply(|inv| inv.remove(&ids));

        debug!(removed = ids.len(), "items removed");

        let count = ids.len();
        self.record(EventKind::ItemsRemoved { ids });
        count
    }

    /// Change an item's minimum threshold. False if the id is unknown.
    pub fn set_threshold(&mut self, id: &ItemId, threshold: u32) -> bool {
        if self.inventory.get(id).is_none() {
            return false;
        }
        self.apply(|inv| inv.set_threshold(id, threshold));
        self.record(EventKind::ThresholdChanged {
            id: id.clone(),
            threshold,
        });
        true
    }

    /// Append an event that does not change the inventory.
    pub fn record(&mut self, kind: EventKind) -> &Event {
        let seq = self.events.len() as u64 + 1;
        self.events.push(Event {
            seq,
            timestamp: Utc::now(),
            kind,
        });
        &self.events[self.events.len() - 1]
    }

    /// Events with `seq` strictly greater than `since_seq`.
    pub fn events_since(&self, since_seq: u64) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.seq > since_seq)
            .cloned()
            .collect()
    }

    fn apply(&mut self, f: impl FnOnce(Inventory) -> Inventory) {
        let current = std::mem::take(&mut self.inventory);
        self.inventory = f(current);
    }

    /// Listed ids that exist, first occurrence only.
    fn known(&self, ids: &[ItemId]) -> Vec<ItemId> {
        let mut out: Vec<ItemId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.inventory.get(id).is_some() && !out.contains(id) {
                out.push(id.clone());
            }
        }
        out
    }
}
