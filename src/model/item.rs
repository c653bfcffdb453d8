//! Inventory items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Threshold used when an item carries no explicit `min_threshold`.
pub const DEFAULT_MIN_THRESHOLD: u32 = 1;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One tracked good.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Opaque identifier. Assigned at creation, never changed.
    pub id: ItemId,

    pub name: String,

    /// Non-negative amount, measured in `unit`.
    pub quantity: f64,

    /// Free-form unit label ("g", "ml", "pcs", "loaf").
    pub unit: String,

    pub expiry_date: NaiveDate,

    pub category: Category,

    /// Quality score, 0–100. Zero means depleted.
    pub freshness: u8,

    /// How full the container is, 0–100. Independent of `quantity`.
    pub stock_level: u8,

    /// Estimated price in euro.
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Quantity floor at or below which the item needs restocking.
    /// None = [`DEFAULT_MIN_THRESHOLD`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_threshold: Option<u32>,

    /// Quantity a restock brings the item back up to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_quantity: Option<f64>,
}

impl InventoryItem {
    pub fn effective_threshold(&self) -> u32 {
        self.min_threshold.unwrap_or(DEFAULT_MIN_THRESHOLD)
    }

    /// `quantity <= min_threshold`.
    pub fn needs_restock(&self) -> bool {
        self.quantity <= f64::from(self.effective_threshold())
    }

    /// Quantity an order refills this item to: the par quantity, but never
    /// less than one unit above the threshold, so a refilled item no longer
    /// needs restocking.
    pub fn restock_quantity(&self) -> f64 {
        let floor = f64::from(self.effective_threshold()) + 1.0;
        self.par_quantity.map_or(floor, |par| par.max(floor))
    }

    pub fn is_depleted(&self) -> bool {
        self.quantity <= 0.0
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0.0
    }

    /// Whole days from `today` until expiry. Negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Expired items also count as expiring; nothing is auto-purged.
    pub fn is_expiring(&self, today: NaiveDate, window_days: i64) -> bool {
        self.days_until_expiry(today) <= window_days
    }

    pub fn freshness_band(&self) -> FreshnessBand {
        FreshnessBand::from_score(self.freshness)
    }

    /// Case-insensitive substring match on the display name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Id
// ---------------------------------------------------------------------------

/// Newtype for item IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// A fresh, collision-resistant id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Produce,
    Pantry,
    Protein,
    Beverage,
    Snack,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Dairy => "Dairy",
            Category::Produce => "Produce",
            Category::Pantry => "Pantry",
            Category::Protein => "Protein",
            Category::Beverage => "Beverage",
            Category::Snack => "Snack",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dairy" => Ok(Category::Dairy),
            "produce" => Ok(Category::Produce),
            "pantry" => Ok(Category::Pantry),
            "protein" => Ok(Category::Protein),
            "beverage" => Ok(Category::Beverage),
            "snack" => Ok(Category::Snack),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Freshness
// ---------------------------------------------------------------------------

/// Coarse freshness bucket used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessBand {
    /// Score 0.
    Empty,
    /// Above 70.
    Fresh,
    /// Above 30.
    Fair,
    Spoiling,
}

impl FreshnessBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => FreshnessBand::Empty,
            71.. => FreshnessBand::Fresh,
            31..=70 => FreshnessBand::Fair,
            _ => FreshnessBand::Spoiling,
        }
    }
}

impl std::fmt::Display for FreshnessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FreshnessBand::Empty => "empty",
            FreshnessBand::Fresh => "fresh",
            FreshnessBand::Fair => "fair",
            FreshnessBand::Spoiling => "spoiling",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, min_threshold: Option<u32>) -> InventoryItem {
        InventoryItem {
            id: ItemId::from("x"),
            name: "Organic Milk".to_string(),
            quantity,
            unit: "ml".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            category: Category::Dairy,
            freshness: 50,
            stock_level: 50,
            price: 1.0,
            image: None,
            min_threshold,
            par_quantity: None,
        }
    }

    #[test]
    fn threshold_defaults_to_one() {
        assert!(item(1.0, None).needs_restock());
        assert!(!item(2.0, None).needs_restock());
        assert!(item(5.0, Some(5)).needs_restock());
    }

    #[test]
    fn expiring_includes_past_dates() {
        let it = item(1.0, None);
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(it.days_until_expiry(today), 3);
        assert!(it.is_expiring(today, 3));
        assert!(!it.is_expiring(NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(), 3));
        assert!(it.is_expiring(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), 3));
    }

    #[test]
    fn freshness_bands() {
        assert_eq!(FreshnessBand::from_score(0), FreshnessBand::Empty);
        assert_eq!(FreshnessBand::from_score(15), FreshnessBand::Spoiling);
        assert_eq!(FreshnessBand::from_score(30), FreshnessBand::Spoiling);
        assert_eq!(FreshnessBand::from_score(31), FreshnessBand::Fair);
        assert_eq!(FreshnessBand::from_score(71), FreshnessBand::Fresh);
    }

    #[test]
    fn refill_level_clears_the_threshold() {
        assert_eq!(item(0.0, None).restock_quantity(), 2.0);

        let mut low_par = item(0.0, Some(4));
        low_par.par_quantity = Some(0.0);
        assert_eq!(low_par.restock_quantity(), 5.0);

        let mut full_par = item(0.0, None);
        full_par.par_quantity = Some(500.0);
        assert_eq!(full_par.restock_quantity(), 500.0);
    }

    #[test]
    fn name_match_ignores_case() {
        assert!(item(1.0, None).name_contains("MILK"));
    }
}
