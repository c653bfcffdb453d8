//! Restock orders: what is short, and what it costs to refill.

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::model::{InventoryItem, ItemId};

/// Flat fee added to every order, in euro.
pub const SERVICE_FEE: f64 = 2.50;

const LOW_STOCK_LEVEL: u8 = 30;
const SPOILING_FRESHNESS: u8 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retailer {
    #[default]
    Jumbo,
    Spar,
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Retailer::Jumbo => "Jumbo Fulfillment",
            Retailer::Spar => "SPAR QuickConnect",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Retailer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jumbo" => Ok(Retailer::Jumbo),
            "spar" => Ok(Retailer::Spar),
            other => Err(format!("unknown retailer: {other}")),
        }
    }
}

/// Why an item made the shortage list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortageReason {
    Spoiling,
    LowQuantity,
    BelowThreshold,
}

impl std::fmt::Display for ShortageReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShortageReason::Spoiling => "spoiling",
            ShortageReason::LowQuantity => "low quantity",
            ShortageReason::BelowThreshold => "below threshold",
        };
        write!(f, "{s}")
    }
}

/// Spoiling wins over a low gauge, which wins over the threshold check.
pub fn shortage_reason(item: &InventoryItem) -> Option<ShortageReason> {
    if item.freshness < SPOILING_FRESHNESS {
        Some(ShortageReason::Spoiling)
    } else if item.stock_level < LOW_STOCK_LEVEL {
        Some(ShortageReason::LowQuantity)
    } else if item.needs_restock() {
        Some(ShortageReason::BelowThreshold)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub reason: ShortageReason,
    pub stock_level: u8,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub retailer: Retailer,
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub service_fee: f64,
    pub delivery: f64,
    pub total: f64,
}

impl OrderSummary {
    /// Build the order for everything currently short.
    pub fn for_inventory(inventory: &Inventory, retailer: Retailer) -> Self {
        let lines: Vec<OrderLine> = inventory
            .items()
            .iter()
            .filter_map(|item| {
                shortage_reason(item).map(|reason| OrderLine {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    reason,
                    stock_level: item.stock_level,
                    price: item.price,
                })
            })
            .collect();
        let subtotal: f64 = lines.iter().map(|line| line.price).sum();
        Self {
            retailer,
            lines,
            subtotal,
            service_fee: SERVICE_FEE,
            delivery: 0.0,
            total: subtotal + SERVICE_FEE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.lines.iter().map(|line| line.id.clone()).collect()
    }
}
