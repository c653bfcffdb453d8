//! Structured events recorded by the store on every command.
//!
//! Consumers read the event stream to build dashboards or audit logs.
//! Notifications are the user's view; events are the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ItemId, RecipeId};

/// A structured event emitted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic sequence number, starting at 1. Consumers can detect gaps.
    pub seq: u64,
    /// When this event occurred.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    ItemsAdded {
        source: String,
        ids: Vec<ItemId>,
    },
    MealCooked {
        recipe: Option<RecipeId>,
        ingredients: Vec<ItemId>,
        depleted: Vec<ItemId>,
    },
    ItemsRestocked {
        ids: Vec<ItemId>,
    },
    ItemsRemoved {
        ids: Vec<ItemId>,
    },
    ThresholdChanged {
        id: ItemId,
        threshold: u32,
    },
    IngestionFailed {
        source: String,
        error: String,
    },
    RecipeSuggested {
        rule: Option<String>,
        recipe: Option<RecipeId>,
    },
}
