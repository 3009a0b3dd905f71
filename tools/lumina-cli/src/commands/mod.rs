//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod categories;
pub mod config;
pub mod product;

use clap::{Args, Subcommand};
use lumina_commerce::search::SortOption;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show (default: all).
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Case-insensitive title search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: default, price_asc, price_desc, rating_desc.
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<f64>,

    /// Page to show (paged mode).
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Items per page.
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Use infinite-scroll mode instead of pages.
    #[arg(long)]
    pub infinite: bool,

    /// In infinite mode, reveal this many more pages.
    #[arg(long, default_value = "0")]
    pub load_more: usize,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u64,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with totals.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: u64,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Remove one unit of a product.
    Decrease {
        /// Product ID.
        id: u64,
    },
    /// Remove a product entirely.
    Remove {
        /// Product ID.
        id: u64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
