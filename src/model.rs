//! Core data model.
//!
//! An inventory item is one tracked good in the kitchen. A recipe is an
//! ephemeral suggestion naming the items it would consume. Chat messages
//! are the transcript the chef conversation produces.

pub mod chat;
pub mod item;
pub mod recipe;

pub use chat::{ChatMessage, Role};
pub use item::{Category, FreshnessBand, InventoryItem, ItemId};
pub use recipe::{Recipe, RecipeId};
