//! Recipe matching.
//!
//! A fixed, ordered rule table. Rules run against the available inventory
//! (quantity > 0) in priority order and the first one that produces a
//! recipe wins. Matching only reads the inventory.

use crate::inventory::Inventory;
use crate::model::{Category, InventoryItem, ItemId, Recipe, RecipeId};

/// Intent that unlocks the quick-lunch salad.
pub const QUICK_LUNCH: &str = "Quick Lunch";

/// Freshness below which a dairy item counts as about to turn.
const EXPIRING_DAIRY_FRESHNESS: u8 = 30;

/// What a rule gets to look at.
pub struct Context<'a> {
    pub available: Vec<&'a InventoryItem>,
    pub intent: Option<&'a str>,
}

impl<'a> Context<'a> {
    pub fn new(inventory: &'a Inventory, intent: Option<&'a str>) -> Self {
        Self {
            available: inventory.available().collect(),
            intent,
        }
    }

    fn produce_ids(&self) -> Vec<ItemId> {
        self.available
            .iter()
            .filter(|item| item.category == Category::Produce)
            .map(|item| item.id.clone())
            .collect()
    }
}

/// A guard/action pair. `apply` returns None when the rule does not fire.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&Context<'_>) -> Option<Recipe>,
}

/// All rules, highest priority first.
pub const RULES: &[Rule] = &[
    Rule {
        name: "quick_lunch",
        apply: quick_lunch,
    },
    Rule {
        name: "expiring_milk",
        apply: expiring_milk,
    },
    Rule {
        name: "pasta",
        apply: pasta,
    },
    Rule {
        name: "kitchen_sink",
        apply: kitchen_sink,
    },
];

/// A recipe together with the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub rule: &'static str,
    pub recipe: Recipe,
}

/// Pick at most one recipe for the inventory and optional intent.
pub fn suggest(inventory: &Inventory, intent: Option<&str>) -> Option<Recipe> {
    suggest_with_rule(inventory, intent).map(|s| s.recipe)
}

/// Like [`suggest`], but also reports which rule fired.
pub fn suggest_with_rule(inventory: &Inventory, intent: Option<&str>) -> Option<Suggestion> {
    let ctx = Context::new(inventory, intent);
    RULES.iter().find_map(|rule| {
        (rule.apply)(&ctx).map(|recipe| Suggestion {
            rule: rule.name,
            recipe,
        })
    })
}

/// Names of up to two depleted items, for the "nothing to cook" reply.
pub fn no_match_hint(inventory: &Inventory) -> Option<String> {
    let names: Vec<&str> = inventory
        .depleted()
        .take(2)
        .map(|item| item.name.as_str())
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(format!("You're out of {}.", names.join(" and ")))
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn quick_lunch(ctx: &Context<'_>) -> Option<Recipe> {
    if ctx.intent != Some(QUICK_LUNCH) {
        return None;
    }
    let produce = ctx.produce_ids();
    if produce.is_empty() {
        return None;
    }
    Some(kitchen_sink_salad(produce))
}

fn expiring_milk(ctx: &Context<'_>) -> Option<Recipe> {
    let dairy = ctx.available.iter().find(|item| {
        item.category == Category::Dairy
            && item.freshness < EXPIRING_DAIRY_FRESHNESS
            && item.name_contains("milk")
    })?;
    Some(Recipe {
        id: RecipeId::from("rec_1"),
        name: "Fluffy Pancakes".to_string(),
        description: format!(
            "Your {} is about to turn! Use it to make delicious breakfast pancakes.",
            dairy.name
        ),
        calories: 450,
        ingredients_needed: vec![dairy.id.clone()],
    })
}

fn pasta(ctx: &Context<'_>) -> Option<Recipe> {
    let pasta = ctx.available.iter().find(|item| item.name_contains("pasta"))?;
    let mut ingredients = vec![pasta.id.clone()];
    ingredients.extend(ctx.produce_ids());
    Some(Recipe {
        id: RecipeId::from("rec_2"),
        name: "Pasta Primavera".to_string(),
        description: "A classic way to use up fresh vegetables and your pasta stock.".to_string(),
        calories: 600,
        ingredients_needed: ingredients,
    })
}

fn kitchen_sink(ctx: &Context<'_>) -> Option<Recipe> {
    if ctx.available.is_empty() {
        return None;
    }
    Some(kitchen_sink_salad(ctx.produce_ids()))
}

fn kitchen_sink_salad(produce: Vec<ItemId>) -> Recipe {
    Recipe {
        id: RecipeId::from("rec_3"),
        name: "Kitchen Sink Salad".to_string(),
        description: "Combine all your remaining produce for a healthy detox bowl.".to_string(),
        calories: 320,
        ingredients_needed: produce,
    }
}
