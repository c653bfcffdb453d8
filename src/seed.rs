//! Seed inventory loaded from TOML.
//!
//! ```toml
//! [[item]]
//! id = "1"
//! name = "Organic Milk"
//! quantity = 500
//! unit = "ml"
//! expiryDate = "2026-10-20"
//! category = "Dairy"
//! freshness = 15
//! stockLevel = 25
//! price = 1.89
//! minThreshold = 100
//! ```
//!
//! `id` may be omitted; a fresh one is generated.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::inventory::Inventory;
use crate::model::{Category, InventoryItem, ItemId};

/// Top-level TOML wrapper.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    item: Vec<SeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedItem {
    id: Option<String>,
    name: String,
    quantity: f64,
    unit: String,
    expiry_date: NaiveDate,
    category: Category,
    freshness: u8,
    stock_level: u8,
    #[serde(default)]
    price: f64,
    image: Option<String>,
    min_threshold: Option<u32>,
    par_quantity: Option<f64>,
}

impl SeedItem {
    fn into_item(self) -> Result<InventoryItem> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(self.quantity) || !valid(self.price) {
            return Err(Error::Seed(format!(
                "{}: quantity and price must be finite and non-negative",
                self.name
            )));
        }
        if self.freshness > 100 || self.stock_level > 100 {
            return Err(Error::Seed(format!(
                "{}: freshness and stockLevel must be within 0-100",
                self.name
            )));
        }
        if self.par_quantity.is_some_and(|par| !valid(par)) {
            return Err(Error::Seed(format!(
                "{}: parQuantity must be finite and non-negative",
                self.name
            )));
        }
        Ok(InventoryItem {
            id: self.id.map(ItemId::from).unwrap_or_default(),
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            expiry_date: self.expiry_date,
            category: self.category,
            freshness: self.freshness,
            stock_level: self.stock_level,
            price: self.price,
            image: self.image,
            min_threshold: self.min_threshold,
            par_quantity: self.par_quantity.or(Some(self.quantity)),
        })
    }
}

/// Parse a seed document.
pub fn parse(content: &str) -> Result<Inventory> {
    let file: SeedFile = toml::from_str(content).map_err(|e| Error::Seed(e.to_string()))?;
    file.item
        .into_iter()
        .map(SeedItem::into_item)
        .collect::<Result<Vec<_>>>()
        .map(Inventory::new)
}

/// Load a seed file from disk.
pub fn load(path: &Path) -> Result<Inventory> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Seed(format!("cannot read {}: {e}", path.display())))?;
    parse(&content)
}
