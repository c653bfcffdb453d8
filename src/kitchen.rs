//! Kitchen session: the single owner of the inventory store, driving the
//! ingestion, chef and notification collaborators.
//!
//! Scan and analyze share one busy flag; the chef has its own and also
//! refuses new questions while a suggested recipe awaits a decision.
//! Started tasks always run to completion and apply their effect. Store
//! locks are never held across an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use opentelemetry::KeyValue;
use tracing::{Instrument, error, info, warn};

use crate::catalog;
use crate::chef::{Chef, MockChef};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{Event, EventKind};
use crate::ingest::{Ingestion, MockIngestion};
use crate::inventory::{EXPIRY_WINDOW_DAYS, Inventory, InventoryStats};
use crate::matcher;
use crate::model::{ChatMessage, ItemId, Recipe};
use crate::notify::Notifier;
use crate::order::{OrderSummary, Retailer};
use crate::seed;
use crate::store::Store;
use crate::telemetry::kitchen::{record_outcome, start_operation_span};
use crate::telemetry::metrics;

const GREETING: &str = "Hello! I'm your culinary optimization engine. \
     Ask me what to cook based on your expiring inventory.";
const DEFAULT_QUESTION: &str = "What can I cook with my current ingredients?";
const MATCH_PREAMBLE: &str =
    "Based on your inventory, I recommend optimizing for freshness. Here is a match:";
const NO_MATCH: &str = "I couldn't find a suitable recipe with your current items. \
     Consider restocking basic produce.";
const CHEF_FAILURE: &str = "System error calculating recipes.";

/// What the chef said in reply to a question.
#[derive(Debug, Clone, PartialEq)]
pub enum ChefReply {
    /// A recipe, now pending a cook/dismiss decision.
    Recipe(Recipe),
    /// Nothing suitable. `hint` names up to two depleted items.
    NoMatch { hint: Option<String> },
    /// The chef failed; reported in the transcript, not retried.
    Failed,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Scan,
    Analyze,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Scan => "scan",
            Source::Analyze => "analyze",
        }
    }
}

struct Session {
    store: Store,
    transcript: Vec<ChatMessage>,
    pending: Option<Recipe>,
}

/// Clears a busy flag when the task holding it finishes.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool, what: &'static str) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::Busy(what))?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The kitchen. Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct Kitchen {
    session: Arc<Mutex<Session>>,
    ingestion: Arc<dyn Ingestion>,
    chef: Arc<dyn Chef>,
    notifier: Arc<dyn Notifier>,
    ingest_busy: Arc<AtomicBool>,
    chef_busy: Arc<AtomicBool>,
    order_busy: Arc<AtomicBool>,
    order_delay: Duration,
    expiry_window_days: i64,
}

impl Kitchen {
    pub fn new(
        inventory: Inventory,
        ingestion: Arc<dyn Ingestion>,
        chef: Arc<dyn Chef>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session {
                store: Store::new(inventory),
                transcript: vec![ChatMessage::chef(GREETING)],
                pending: None,
            })),
            ingestion,
            chef,
            notifier,
            ingest_busy: Arc::new(AtomicBool::new(false)),
            chef_busy: Arc::new(AtomicBool::new(false)),
            order_busy: Arc::new(AtomicBool::new(false)),
            order_delay: Duration::from_millis(1500),
            expiry_window_days: EXPIRY_WINDOW_DAYS,
        }
    }

    /// Mock collaborators with the configured delays and seed inventory.
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let inventory = initial_inventory(config)?;
        info!(items = inventory.len(), "kitchen seeded");
        Ok(Self::new(
            inventory,
            Arc::new(MockIngestion::new(config.ingest_delay)),
            Arc::new(MockChef::new(config.suggest_delay)),
            notifier,
        )
        .with_order_delay(config.order_delay)
        .with_expiry_window(config.expiry_window_days))
    }

    pub fn with_order_delay(mut self, delay: Duration) -> Self {
        self.order_delay = delay;
        self
    }

    pub fn with_expiry_window(mut self, days: i64) -> Self {
        self.expiry_window_days = days;
        self
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn snapshot(&self) -> Inventory {
        self.lock().store.snapshot()
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock().transcript.clone()
    }

    pub fn pending_recipe(&self) -> Option<Recipe> {
        self.lock().pending.clone()
    }

    pub fn events_since(&self, since_seq: u64) -> Vec<Event> {
        self.lock().store.events_since(since_seq)
    }

    pub fn stats(&self) -> InventoryStats {
        self.lock()
            .store
            .inventory()
            .stats(today(), self.expiry_window_days)
    }

    pub fn order_preview(&self, retailer: Retailer) -> OrderSummary {
        OrderSummary::for_inventory(self.lock().store.inventory(), retailer)
    }

    pub fn is_ingesting(&self) -> bool {
        self.ingest_busy.load(Ordering::Acquire)
    }

    pub fn is_asking_chef(&self) -> bool {
        self.chef_busy.load(Ordering::Acquire)
    }

    pub fn is_ordering(&self) -> bool {
        self.order_busy.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Ingestion
    // -----------------------------------------------------------------------

    /// Scan a receipt and merge the result. Returns the number of items
    /// added; a failed scan is logged and adds nothing.
    pub async fn scan(&self) -> Result<usize> {
        self.ingest(Source::Scan).await
    }

    /// Analyze the fridge and merge the result. Same contract as `scan`.
    pub async fn analyze(&self) -> Result<usize> {
        self.ingest(Source::Analyze).await
    }

    async fn ingest(&self, source: Source) -> Result<usize> {
        let _busy = BusyGuard::acquire(&self.ingest_busy, "ingestion")?;
        let operation = source.as_str();
        let span = start_operation_span(operation);
        let started = Instant::now();

        async {
            let result = match source {
                Source::Scan => self.ingestion.scan().await,
                Source::Analyze => self.ingestion.analyze().await,
            };

            match result {
                Ok(batch) => {
                    let added = self.lock().store.add(operation, batch);
                    self.notifier
                        .notify(&format!("{added} items added to inventory."));
                    record_outcome(&span, operation, "ok", started);
                    Ok(added)
                }
                Err(e) => {
                    error!(source = operation, error = %e, "ingestion failed");
                    metrics::ingestion_failures()
                        .add(1, &[KeyValue::new("source", operation)]);
                    self.lock().store.record(EventKind::IngestionFailed {
                        source: operation.to_string(),
                        error: e.to_string(),
                    });
                    record_outcome(&span, operation, "failed", started);
                    Ok(0)
                }
            }
        }
        .instrument(span.clone())
        .await
    }

    // -----------------------------------------------------------------------
    // Chef
    // -----------------------------------------------------------------------

    /// Ask for a recipe, optionally with an intent such as "Quick Lunch".
    pub async fn ask_chef(&self, intent: Option<&str>) -> Result<ChefReply> {
        let _busy = BusyGuard::acquire(&self.chef_busy, "recipe suggestion")?;
        let span = start_operation_span("ask_chef");
        let started = Instant::now();

        let snapshot = {
            let mut session = self.lock();
            if session.pending.is_some() {
                return Err(Error::Busy("recipe decision"));
            }
            session
                .transcript
                .push(ChatMessage::user(intent.unwrap_or(DEFAULT_QUESTION)));
            session.store.snapshot()
        };

        async {
            let result = self.chef.suggest(&snapshot, intent).await;
            let mut session = self.lock();

            let reply = match result {
                Ok(Some(suggestion)) => {
                    metrics::recipe_suggestions()
                        .add(1, &[KeyValue::new("rule", suggestion.rule)]);
                    info!(rule = suggestion.rule, recipe = %suggestion.recipe.name, "recipe suggested");
                    session.store.record(EventKind::RecipeSuggested {
                        rule: Some(suggestion.rule.to_string()),
                        recipe: Some(suggestion.recipe.id.clone()),
                    });
                    session.transcript.push(ChatMessage::chef(MATCH_PREAMBLE));
                    session.transcript.push(ChatMessage::RecipeCard {
                        recipe: suggestion.recipe.clone(),
                    });
                    session.pending = Some(suggestion.recipe.clone());
                    ChefReply::Recipe(suggestion.recipe)
                }
                Ok(None) => {
                    metrics::recipe_suggestions().add(1, &[KeyValue::new("rule", "none")]);
                    session.store.record(EventKind::RecipeSuggested {
                        rule: None,
                        recipe: None,
                    });
                    let hint = matcher::no_match_hint(&snapshot);
                    let text = match &hint {
                        Some(hint) => format!("{NO_MATCH} {hint}"),
                        None => NO_MATCH.to_string(),
                    };
                    session.transcript.push(ChatMessage::chef(text));
                    ChefReply::NoMatch { hint }
                }
                Err(e) => {
                    warn!(error = %e, "recipe suggestion failed");
                    session.transcript.push(ChatMessage::chef(CHEF_FAILURE));
                    ChefReply::Failed
                }
            };
            drop(session);

            let outcome = match reply {
                ChefReply::Recipe(_) => "recipe",
                ChefReply::NoMatch { .. } => "no_match",
                ChefReply::Failed => "failed",
            };
            record_outcome(&span, "ask_chef", outcome, started);
            Ok(reply)
        }
        .instrument(span.clone())
        .await
    }

    /// Cook the pending recipe. None if nothing was pending.
    pub fn cook_pending(&self) -> Option<Recipe> {
        let recipe = {
            let mut session = self.lock();
            let recipe = session.pending.take()?;
            session
                .store
                .cook(Some(&recipe.id), &recipe.ingredients_needed);
            session.transcript.push(ChatMessage::chef(format!(
                "Excellent choice. I've updated your inventory to reflect the usage \
                 of ingredients for {}. Bon Appétit!",
                recipe.name
            )));
            recipe
        };
        self.notifier.notify("Meal prepared. Inventory updated.");
        Some(recipe)
    }

    /// Drop the pending recipe without cooking it.
    pub fn dismiss_pending(&self) -> Option<Recipe> {
        self.lock().pending.take()
    }

    // -----------------------------------------------------------------------
    // Direct commands
    // -----------------------------------------------------------------------

    /// Consume the given items. Returns the ids that became depleted.
    pub fn cook(&self, ingredient_ids: &[ItemId]) -> Vec<ItemId> {
        let depleted = self.lock().store.cook(None, ingredient_ids);
        self.notifier.notify("Meal prepared. Inventory updated.");
        depleted
    }

    /// Replenish the given items. Returns how many were known.
    pub fn restock(&self, item_ids: &[ItemId]) -> usize {
        let restocked = self.lock().store.restock(item_ids, today());
        self.notifier.notify("Restock order processed successfully.");
        restocked
    }

    pub fn remove(&self, item_ids: &[ItemId]) -> usize {
        let removed = self.lock().store.remove(item_ids);
        if removed > 0 {
            self.notifier.notify(&format!("{removed} items removed."));
        }
        removed
    }

    pub fn set_threshold(&self, id: &ItemId, threshold: u32) -> bool {
        self.lock().store.set_threshold(id, threshold)
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// Order everything currently short and restock it once the order
    /// lands. `Ok(None)` when nothing is short.
    pub async fn place_order(&self, retailer: Retailer) -> Result<Option<OrderSummary>> {
        let _busy = BusyGuard::acquire(&self.order_busy, "restock order")?;
        let summary = self.order_preview(retailer);
        if summary.is_empty() {
            return Ok(None);
        }

        let span = start_operation_span("place_order");
        let started = Instant::now();
        async {
            info!(
                retailer = %retailer,
                lines = summary.lines.len(),
                total = summary.total,
                "placing restock order"
            );
            tokio::time::sleep(self.order_delay).await;
            self.restock(&summary.item_ids());
            record_outcome(&span, "place_order", "ok", started);
            Ok(Some(summary))
        }
        .instrument(span.clone())
        .await
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Every mutation swaps in a complete inventory, so a poisoned
        // session is still consistent.
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The seed file if configured, else the built-in catalog.
pub fn initial_inventory(config: &Config) -> Result<Inventory> {
    match &config.seed_file {
        Some(path) => seed::load(path),
        None => Ok(catalog::seed_inventory(today())),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
