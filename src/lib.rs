#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// The navigation state machine
pub mod engine;

// Re-export commonly used types
pub use analysis::rank;
pub use data::{CATALOG, CatalogError, CategoryCatalog};
pub use domain::{CategoryId, SortKey};
pub use engine::{NavEvent, NavView, NavigationEngine, Transition};
pub use models::{Category, ResultRecord, Subcategory};
pub use ui::{LaunchOptions, OneCartApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open this category on launch (groceries, cosmetics, transport, medicines, shopping)
    #[arg(long)]
    pub category: Option<String>,

    /// Start a search for this query as soon as the category opens
    #[arg(long)]
    pub query: Option<String>,
}

impl From<Cli> for LaunchOptions {
    fn from(cli: Cli) -> Self {
        LaunchOptions {
            category: cli.category,
            query: cli.query,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, launch: LaunchOptions) -> Box<dyn eframe::App> {
    Box::new(OneCartApp::new(cc, launch))
}
