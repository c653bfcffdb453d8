//! Integration tests for the inventory mutation rules.

use chrono::NaiveDate;
use purchais::catalog;
use purchais::inventory::Inventory;
use purchais::model::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn item(id: &str, name: &str, category: Category, quantity: f64) -> InventoryItem {
    InventoryItem {
        id: ItemId::from(id),
        name: name.to_string(),
        quantity,
        unit: "pcs".to_string(),
        expiry_date: NaiveDate::from_ymd_opt(2026, 10, 25).unwrap(),
        category,
        freshness: 60,
        stock_level: 81,
        price: 1.50,
        image: None,
        min_threshold: None,
        par_quantity: None,
    }
}

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|s| ItemId::from(*s)).collect()
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_is_a_pure_merge() {
    let base = catalog::seed_inventory(today());
    let batch = catalog::receipt_batch(today());

    let merged = base.clone().add(batch.clone());

    assert_eq!(merged.len(), base.len() + batch.len());
    for original in base.items().iter().chain(batch.iter()) {
        assert_eq!(merged.get(&original.id), Some(original));
    }
}

#[test]
fn add_does_not_dedup_by_name() {
    let inv = Inventory::new(vec![item("a", "Carrots", Category::Produce, 5.0)])
        .add(vec![item("b", "Carrots", Category::Produce, 5.0)]);
    assert_eq!(inv.len(), 2);
}

#[test]
fn add_empty_batch_is_noop() {
    let base = catalog::seed_inventory(today());
    assert_eq!(base.clone().add(Vec::new()), base);
}

// ---------------------------------------------------------------------------
// Cook
// ---------------------------------------------------------------------------

#[test]
fn cook_halves_quantity_and_stock_level() {
    let inv = Inventory::new(vec![item("a", "Carrots", Category::Produce, 7.0)]);
    let cooked = inv.cook(&ids(&["a"]));
    let a = cooked.get(&ItemId::from("a")).unwrap();
    assert_eq!(a.quantity, 3.0);
    assert_eq!(a.stock_level, 40);
    assert_eq!(a.freshness, 60);
}

#[test]
fn cook_depletes_single_units_and_keeps_them() {
    let inv = Inventory::new(vec![
        item("one", "Avocado", Category::Produce, 1.0),
        item("zero", "Lemon", Category::Produce, 0.0),
    ]);
    let cooked = inv.cook(&ids(&["one", "zero"]));

    assert_eq!(cooked.len(), 2, "depleted items stay in the collection");
    for id in ["one", "zero"] {
        let it = cooked.get(&ItemId::from(id)).unwrap();
        assert_eq!(it.quantity, 0.0);
        assert_eq!(it.freshness, 0);
        assert_eq!(it.stock_level, 0);
    }
}

#[test]
fn cook_leaves_unlisted_items_alone() {
    let inv = Inventory::new(vec![
        item("a", "Carrots", Category::Produce, 10.0),
        item("b", "Rice", Category::Pantry, 10.0),
    ]);
    let before = inv.get(&ItemId::from("b")).cloned();
    let cooked = inv.cook(&ids(&["a"]));
    assert_eq!(cooked.get(&ItemId::from("b")).cloned(), before);
}

#[test]
fn cook_applies_once_per_item_even_if_listed_twice() {
    let inv = Inventory::new(vec![item("a", "Carrots", Category::Produce, 8.0)]);
    let cooked = inv.cook(&ids(&["a", "a"]));
    assert_eq!(cooked.get(&ItemId::from("a")).unwrap().quantity, 4.0);
}

#[test]
fn cook_with_unknown_ids_is_noop() {
    let base = catalog::seed_inventory(today());
    assert_eq!(base.clone().cook(&ids(&["nope"])), base);
    assert_eq!(base.clone().cook(&[]), base);
}

#[test]
fn cooking_seed_milk_halves_it() {
    let cooked = catalog::seed_inventory(today()).cook(&ids(&["1"]));
    let milk = cooked.get(&ItemId::from("1")).unwrap();
    assert_eq!(milk.quantity, 250.0);
    assert_eq!(milk.stock_level, 12);
    assert_eq!(milk.freshness, 15);
}

// ---------------------------------------------------------------------------
// Restock
// ---------------------------------------------------------------------------

#[test]
fn restock_resets_levels_and_expiry() {
    let mut stale = item("a", "Carrots", Category::Produce, 5.0);
    stale.freshness = 3;
    stale.stock_level = 7;
    stale.expiry_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let restocked = Inventory::new(vec![stale]).restock(&ids(&["a"]), today());
    let a = restocked.get(&ItemId::from("a")).unwrap();
    assert_eq!(a.freshness, 100);
    assert_eq!(a.stock_level, 100);
    assert_eq!(a.expiry_date, NaiveDate::from_ymd_opt(2026, 10, 26).unwrap());
    assert_eq!(a.quantity, 5.0, "quantity above the refill level is kept");
}

#[test]
fn threshold_item_is_a_restock_candidate_and_gets_refreshed() {
    let mut low = item("a", "Avocado", Category::Produce, 1.0);
    low.min_threshold = Some(1);
    low.freshness = 20;
    low.stock_level = 10;
    let inv = Inventory::new(vec![low, item("b", "Rice", Category::Pantry, 10.0)]);

    let candidates: Vec<&ItemId> = inv.restock_candidates().map(|i| &i.id).collect();
    assert_eq!(candidates, vec![&ItemId::from("a")]);

    let restocked = inv.restock(&ids(&["a"]), today());
    let a = restocked.get(&ItemId::from("a")).unwrap();
    assert_eq!(a.freshness, 100);
    assert_eq!(a.stock_level, 100);
}

#[test]
fn restock_refills_a_fully_depleted_item() {
    let mut milk = item("m", "Organic Milk", Category::Dairy, 1.0);
    milk.par_quantity = Some(500.0);
    let inv = Inventory::new(vec![milk, item("p", "Pear", Category::Produce, 1.0)])
        .cook(&ids(&["m", "p"]));
    assert!(inv.get(&ItemId::from("m")).unwrap().is_depleted());

    let restocked = inv.restock(&ids(&["m", "p"]), today());
    assert_eq!(restocked.get(&ItemId::from("m")).unwrap().quantity, 500.0);
    // No par quantity: refilled to one above the default threshold.
    let pear = restocked.get(&ItemId::from("p")).unwrap();
    assert_eq!(pear.quantity, 2.0);
    assert!(!pear.needs_restock());
}

#[test]
fn restocked_seed_avocado_leaves_the_shortage_list() {
    let avocado = ids(&["4"]);
    let inv = catalog::seed_inventory(today());
    assert!(inv.get(&avocado[0]).unwrap().needs_restock());

    let restocked = inv.restock(&avocado, today());
    let a = restocked.get(&avocado[0]).unwrap();
    assert_eq!(a.quantity, 2.0);
    assert!(!a.needs_restock());
    assert_eq!(restocked.restock_candidates().count(), 0);
}

// ---------------------------------------------------------------------------
// Remove / threshold / queries
// ---------------------------------------------------------------------------

#[test]
fn remove_drops_only_listed_items() {
    let inv = catalog::seed_inventory(today()).remove(&ids(&["2", "missing"]));
    assert_eq!(inv.len(), 3);
    assert!(inv.get(&ItemId::from("2")).is_none());
}

#[test]
fn set_threshold_changes_restock_candidacy() {
    let inv = Inventory::new(vec![item("a", "Eggs", Category::Protein, 4.0)]);
    assert_eq!(inv.restock_candidates().count(), 0);
    let inv = inv.set_threshold(&ItemId::from("a"), 6);
    assert_eq!(inv.get(&ItemId::from("a")).unwrap().min_threshold, Some(6));
    assert_eq!(inv.restock_candidates().count(), 1);
}

#[test]
fn seed_stats() {
    let inv = catalog::seed_inventory(today());
    let stats = inv.stats(today(), 3);
    assert_eq!(stats.total_items, 4);
    // (15 + 100 + 60 + 20) / 4 = 48.75
    assert_eq!(stats.average_freshness, 49);
    // Milk (1 day) and avocado (2 days).
    assert_eq!(stats.expiring, 2);
    assert_eq!(stats.depleted, 0);
    // Avocado: quantity 1 <= default threshold 1.
    assert_eq!(stats.needs_restock, 1);
    assert!((stats.total_value - 9.09).abs() < 1e-9);
}

#[test]
fn empty_inventory_stats_are_zero() {
    let stats = Inventory::default().stats(today(), 3);
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.average_freshness, 0);
}

#[test]
fn fresh_batches_get_new_ids_each_time() {
    let first = catalog::receipt_batch(today());
    let second = catalog::receipt_batch(today());
    assert_eq!(first.len(), 4);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
    }
    assert_eq!(catalog::fridge_batch(today()).len(), 2);
}
