//! purchais CLI: inspect the kitchen and run the demo session.

use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use purchais::config::Config;
use purchais::inventory::Inventory;
use purchais::kitchen::{ChefReply, Kitchen, initial_inventory};
use purchais::matcher;
use purchais::model::ChatMessage;
use purchais::notify::TracingNotifier;
use purchais::order::{OrderSummary, Retailer};
use purchais::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(name = "purchais", about = "Kitchen inventory with a rule-based chef")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the seed inventory
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show items expiring within the configured window
    Expiring,
    /// Ask the chef for a recipe
    Suggest {
        /// Intent, e.g. "Quick Lunch"
        #[arg(long)]
        intent: Option<String>,
    },
    /// Show what a restock order would contain
    Shortages {
        /// jumbo or spar
        #[arg(long, default_value = "jumbo")]
        retailer: Retailer,
    },
    /// Run a scripted session: scan, analyze, suggest, cook, order
    Demo {
        /// Intent passed to the chef, e.g. "Quick Lunch"
        #[arg(long)]
        intent: Option<String>,
        /// Retailer for the closing restock order: jumbo or spar
        #[arg(long, default_value = "jumbo")]
        retailer: Retailer,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let _guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: "purchais".to_string(),
        log_level: config.log_level.clone(),
    })?;

    match cli.command {
        Command::List { json } => cmd_list(&config, json),
        Command::Expiring => cmd_expiring(&config),
        Command::Suggest { intent } => cmd_suggest(&config, intent.as_deref()),
        Command::Shortages { retailer } => cmd_shortages(&config, retailer),
        Command::Demo { intent, retailer } => cmd_demo(&config, intent.as_deref(), retailer).await,
    }
}

fn cmd_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let inventory = initial_inventory(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }
    print_inventory(&inventory);
    Ok(())
}

fn cmd_expiring(config: &Config) -> anyhow::Result<()> {
    let inventory = initial_inventory(config)?;
    let today = Local::now().date_naive();
    let expiring: Vec<_> = inventory
        .expiring(today, config.expiry_window_days)
        .collect();

    if expiring.is_empty() {
        println!("All clear! Nothing expiring soon.");
        return Ok(());
    }
    for item in expiring {
        println!(
            "{:<20}  expires {}  ({} days)",
            item.name,
            item.expiry_date,
            item.days_until_expiry(today)
        );
    }
    Ok(())
}

fn cmd_suggest(config: &Config, intent: Option<&str>) -> anyhow::Result<()> {
    let inventory = initial_inventory(config)?;
    match matcher::suggest_with_rule(&inventory, intent) {
        Some(suggestion) => {
            let recipe = suggestion.recipe;
            println!("{} ({} kcal)  [rule: {}]", recipe.name, recipe.calories, suggestion.rule);
            println!("{}", recipe.description);
            let names: Vec<&str> = recipe
                .ingredients_needed
                .iter()
                .filter_map(|id| inventory.get(id).map(|item| item.name.as_str()))
                .collect();
            println!("Uses: {}", if names.is_empty() { "-".to_string() } else { names.join(", ") });
        }
        None => {
            println!("No suitable recipe.");
            if let Some(hint) = matcher::no_match_hint(&inventory) {
                println!("{hint}");
            }
        }
    }
    Ok(())
}

fn cmd_shortages(config: &Config, retailer: Retailer) -> anyhow::Result<()> {
    let inventory = initial_inventory(config)?;
    print_order(&OrderSummary::for_inventory(&inventory, retailer));
    Ok(())
}

async fn cmd_demo(config: &Config, intent: Option<&str>, retailer: Retailer) -> anyhow::Result<()> {
    let kitchen = Kitchen::from_config(config, Arc::new(TracingNotifier))?;

    println!("Scanning receipt...");
    kitchen.scan().await?;
    println!("Analyzing fridge...");
    kitchen.analyze().await?;
    print_inventory(&kitchen.snapshot());

    println!("\nAsking the chef...");
    match kitchen.ask_chef(intent).await? {
        ChefReply::Recipe(recipe) => {
            println!("Cooking {}", recipe.name);
            kitchen.cook_pending();
        }
        ChefReply::NoMatch { .. } | ChefReply::Failed => {}
    }
    print_transcript(&kitchen.transcript());

    println!("\nPlacing restock order...");
    match kitchen.place_order(retailer).await? {
        Some(summary) => print_order(&summary),
        None => println!("Supply chain optimal. Nothing to order."),
    }

    let stats = kitchen.stats();
    println!(
        "\n{} items, avg freshness {}%, {} expiring, {} need restock",
        stats.total_items, stats.average_freshness, stats.expiring, stats.needs_restock
    );
    Ok(())
}

fn print_inventory(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("No items in memory. Scan a receipt or use the camera.");
        return;
    }
    println!(
        "{:<12}  {:<20}  {:<9}  {:>10}  {:<6}  {:>5}  {:<8}  {:>5}  EXPIRES",
        "ID", "NAME", "CATEGORY", "QTY", "UNIT", "FRESH", "", "STOCK"
    );
    println!("{}", "-".repeat(102));
    for item in inventory.items() {
        let short_id: String = item.id.as_str().chars().take(12).collect();
        let out = if item.is_depleted() { " (OUT)" } else { "" };
        println!(
            "{:<12}  {:<20}  {:<9}  {:>10}  {:<6}  {:>4}%  {:<8}  {:>4}%  {}{}",
            short_id,
            item.name,
            item.category,
            item.quantity,
            item.unit,
            item.freshness,
            item.freshness_band().to_string(),
            item.stock_level,
            item.expiry_date,
            out
        );
    }
    println!("\n{} item(s)", inventory.len());
}

fn print_order(summary: &OrderSummary) {
    if summary.is_empty() {
        println!("Supply chain optimal. No low stock items detected.");
        return;
    }
    println!("Order via {}", summary.retailer);
    for line in &summary.lines {
        println!(
            "  {:<20}  {:<15}  ({:>3}%)  €{:.2}",
            line.name, line.reason, line.stock_level, line.price
        );
    }
    println!("  Subtotal     €{:.2}", summary.subtotal);
    println!("  Service fee  €{:.2}", summary.service_fee);
    println!("  Delivery     free");
    println!("  Total        €{:.2}", summary.total);
}

fn print_transcript(transcript: &[ChatMessage]) {
    for message in transcript {
        match message {
            ChatMessage::Text { role, text } => println!("[{role:?}] {text}"),
            ChatMessage::RecipeCard { recipe } => println!(
                "[Chef] >> {} ({} kcal): {}",
                recipe.name, recipe.calories, recipe.description
            ),
        }
    }
}
