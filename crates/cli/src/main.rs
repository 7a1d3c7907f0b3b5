use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{CuisineStats, Minutes, Restaurant, RestaurantDatabase};
use pipeline::{RestaurantBrowser, SearchQuery};
use std::path::PathBuf;
use std::sync::Arc;

/// DineFinder - Restaurant Browser
#[derive(Parser)]
#[command(name = "dine-finder")]
#[command(about = "Browse restaurants by cuisine, location, rating and delivery time", long_about = None)]
struct Cli {
    /// Load restaurants from a JSON or `::`-delimited file instead of the built-in sample data
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search restaurants; every criterion is optional
    Search {
        /// Cuisine to match (case-insensitive)
        #[arg(long)]
        cuisine: Option<String>,

        /// Location to match (case-insensitive)
        #[arg(long)]
        location: Option<String>,

        /// Minimum rating, inclusive
        #[arg(long)]
        min_rating: Option<f32>,

        /// Maximum delivery time in minutes, inclusive
        #[arg(long)]
        max_delivery: Option<Minutes>,
    },

    /// List every restaurant
    List,

    /// Show per-cuisine statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let database = match &cli.data {
        Some(path) => RestaurantDatabase::load_from_file(path)
            .with_context(|| format!("Failed to load restaurants from {}", path.display()))?,
        None => {
            tracing::debug!("Using built-in sample restaurants");
            RestaurantDatabase::seeded()
        }
    };
    let browser = RestaurantBrowser::new(Arc::new(database));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            cuisine,
            location,
            min_rating,
            max_delivery,
        } => {
            let query = SearchQuery {
                cuisine,
                location,
                min_rating,
                max_delivery_speed: max_delivery,
            };
            handle_search(&browser, &query, cli.json)?
        }
        Commands::List => handle_search(&browser, &SearchQuery::new(), cli.json)?,
        Commands::Stats => handle_stats(&browser, cli.json)?,
    }

    Ok(())
}

/// Handle the 'search' and 'list' commands
fn handle_search(browser: &RestaurantBrowser, query: &SearchQuery, json: bool) -> Result<()> {
    let results = browser.search(query);

    if json {
        let output = serde_json::json!({
            "query": query,
            "count": results.len(),
            "results": results,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to encode results")?
        );
        return Ok(());
    }

    print_restaurants(&results);
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(browser: &RestaurantBrowser, json: bool) -> Result<()> {
    let stats = browser.database().cuisine_stats();

    if json {
        let output: Vec<serde_json::Value> = stats
            .iter()
            .map(|(cuisine, s)| serde_json::json!({ "cuisine": cuisine, "stats": s }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to encode statistics")?
        );
        return Ok(());
    }

    print_stats(&stats);
    Ok(())
}

/// Helper function to format and print a result table
fn print_restaurants(restaurants: &[&Restaurant]) {
    if restaurants.is_empty() {
        println!("{}", "No restaurants matched.".yellow());
        return;
    }

    println!(
        "{}",
        format!("{} restaurant(s):", restaurants.len()).bold().blue()
    );
    for (idx, restaurant) in restaurants.iter().enumerate() {
        let delivery = restaurant
            .delivery_speed
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| "no delivery time".to_string());
        println!(
            "{}. {} [{}] {} - Rating: {:.1} - {}",
            (idx + 1).to_string().green(),
            restaurant.name.bold(),
            restaurant.cuisine,
            restaurant.location,
            restaurant.rating,
            delivery
        );
    }
}

fn print_stats(stats: &[(String, CuisineStats)]) {
    println!("{}", "Cuisine statistics:".bold().blue());
    for (cuisine, s) in stats {
        let fastest = s
            .fastest_delivery
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{}{}: {} restaurant(s), avg rating {:.2}, fastest delivery {}",
            "• ".green(),
            cuisine,
            s.restaurant_count,
            s.avg_rating,
            fastest
        );
    }
}
