use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use onecart::analysis::{SpeedBand, hero_minutes, winner};
use onecart::config::SearchConfig;
use onecart::utils::app_time::now;
use onecart::{CATALOG, Category, CategoryId, NavEvent, NavView, NavigationEngine, ResultRecord, SortKey};

/// Print the ranked mock comparison for a category without opening the GUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// groceries, cosmetics, transport, medicines or shopping
    #[arg(long)]
    category: String,

    /// Search text; blank or missing searches the category's demo query
    #[arg(long, default_value = "")]
    query: String,

    /// price, time (or delivery) or rating
    #[arg(long, default_value = "price")]
    sort: SortKey,

    /// Emit JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Comparison<'a> {
    category: CategoryId,
    query: &'a str,
    sort: SortKey,
    results: &'a [ResultRecord],
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    CATALOG.validate().context("Built-in catalog is inconsistent")?;

    let category = CATALOG
        .get_category(&args.category)
        .with_context(|| format!("Cannot compare prices for '{}'", args.category))?;

    let mut engine = NavigationEngine::new(category, SearchConfig::instant());
    engine.dispatch(NavEvent::SearchSubmitted(args.query.clone()));
    engine.poll(now());
    if args.sort != SortKey::default() {
        engine.dispatch(NavEvent::SortKeyChanged(args.sort));
    }

    let Some(results) = engine.current_results() else {
        bail!(
            "Search for '{}' did not finish (stuck in {})",
            engine.query(),
            engine.current_view()
        );
    };
    debug_assert_eq!(engine.current_view(), NavView::Results);

    if args.json {
        let comparison = Comparison {
            category: category.id,
            query: engine.query(),
            sort: engine.sort_key(),
            results,
        };
        let out = serde_json::to_string_pretty(&comparison)
            .context("Failed to serialize comparison")?;
        println!("{}", out);
    } else {
        print_table(category, engine.query(), engine.sort_key(), results);
    }
    Ok(())
}

fn print_table(category: &Category, query: &str, sort: SortKey, results: &[ResultRecord]) {
    println!("{} - \"{}\" sorted by {}", category.short_label(), query, sort);
    println!(
        "{:<4}{:<16}{:>10}{:>10}{:>8}  {}",
        "#", "Platform", "Price", "Was", "Rating", "Delivery"
    );
    for (i, r) in results.iter().enumerate() {
        println!(
            "{:<4}{:<16}{:>10}{:>10}{:>8.1}  {}",
            i + 1,
            r.platform,
            r.price,
            r.original_price.unwrap_or("-"),
            r.rating,
            r.delivery
        );
    }

    let Some(best) = winner(results, sort) else {
        return;
    };
    if !category.id.has_winner_card() {
        println!("Best pick: {} at {}", best.platform, best.price);
        return;
    }
    let minutes = hero_minutes(&best);
    let savings = best
        .savings()
        .map(|s| format!(", saves ₹{}", s))
        .unwrap_or_default();
    println!(
        "Best pick: {} at {} ({} delivery, ~{} min{})",
        best.platform,
        best.price,
        SpeedBand::for_minutes(minutes),
        minutes,
        savings
    );
}
