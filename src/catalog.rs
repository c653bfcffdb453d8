//! Built-in seed data and the canned ingestion batches.
//!
//! Expiry dates are relative to the day the data is produced.

use chrono::{Days, NaiveDate};

use crate::inventory::Inventory;
use crate::model::{Category, InventoryItem, ItemId};

struct Entry {
    id: &'static str,
    name: &'static str,
    quantity: f64,
    unit: &'static str,
    expires_in: u64,
    category: Category,
    freshness: u8,
    stock_level: u8,
    price: f64,
}

impl Entry {
    fn build(&self, id: ItemId, today: NaiveDate) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name.to_string(),
            quantity: self.quantity,
            unit: self.unit.to_string(),
            expiry_date: today + Days::new(self.expires_in),
            category: self.category,
            freshness: self.freshness,
            stock_level: self.stock_level,
            price: self.price,
            image: None,
            min_threshold: None,
            par_quantity: Some(self.quantity),
        }
    }
}

const SEED: &[Entry] = &[
    Entry {
        id: "1",
        name: "Organic Milk",
        quantity: 500.0,
        unit: "ml",
        expires_in: 1,
        category: Category::Dairy,
        freshness: 15,
        stock_level: 25,
        price: 1.89,
    },
    Entry {
        id: "2",
        name: "Fusilli Pasta",
        quantity: 500.0,
        unit: "g",
        expires_in: 180,
        category: Category::Pantry,
        freshness: 100,
        stock_level: 100,
        price: 2.50,
    },
    Entry {
        id: "3",
        name: "Bell Peppers",
        quantity: 3.0,
        unit: "pcs",
        expires_in: 5,
        category: Category::Produce,
        freshness: 60,
        stock_level: 60,
        price: 3.20,
    },
    Entry {
        id: "4",
        name: "Avocado",
        quantity: 1.0,
        unit: "pcs",
        expires_in: 2,
        category: Category::Produce,
        freshness: 20,
        stock_level: 10,
        price: 1.50,
    },
];

const RECEIPT: &[Entry] = &[
    Entry {
        id: "5",
        name: "Greek Yogurt",
        quantity: 400.0,
        unit: "g",
        expires_in: 10,
        category: Category::Dairy,
        freshness: 95,
        stock_level: 100,
        price: 2.20,
    },
    Entry {
        id: "6",
        name: "Sourdough Bread",
        quantity: 1.0,
        unit: "loaf",
        expires_in: 4,
        category: Category::Pantry,
        freshness: 90,
        stock_level: 100,
        price: 3.50,
    },
    Entry {
        id: "7",
        name: "Spinach",
        quantity: 200.0,
        unit: "g",
        expires_in: 6,
        category: Category::Produce,
        freshness: 85,
        stock_level: 100,
        price: 1.99,
    },
    Entry {
        id: "8",
        name: "Oat Milk",
        quantity: 1.0,
        unit: "L",
        expires_in: 14,
        category: Category::Beverage,
        freshness: 100,
        stock_level: 100,
        price: 2.80,
    },
];

const FRIDGE: &[Entry] = &[
    Entry {
        id: "9",
        name: "Leftover Pizza",
        quantity: 2.0,
        unit: "slices",
        expires_in: 1,
        category: Category::Snack,
        freshness: 30,
        stock_level: 20,
        price: 0.00,
    },
    Entry {
        id: "10",
        name: "Carrots",
        quantity: 500.0,
        unit: "g",
        expires_in: 7,
        category: Category::Produce,
        freshness: 80,
        stock_level: 80,
        price: 1.20,
    },
];

/// The starting inventory, with its fixed short ids.
pub fn seed_inventory(today: NaiveDate) -> Inventory {
    SEED.iter()
        .map(|entry| entry.build(ItemId::from(entry.id), today))
        .collect()
}

/// Items a receipt scan yields. Fresh ids on every call.
pub fn receipt_batch(today: NaiveDate) -> Vec<InventoryItem> {
    fresh_batch(RECEIPT, today)
}

/// Items a fridge camera pass yields. Fresh ids on every call.
pub fn fridge_batch(today: NaiveDate) -> Vec<InventoryItem> {
    fresh_batch(FRIDGE, today)
}

fn fresh_batch(entries: &[Entry], today: NaiveDate) -> Vec<InventoryItem> {
    entries
        .iter()
        .map(|entry| entry.build(ItemId::new(), today))
        .collect()
}
