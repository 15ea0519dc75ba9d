//! Clayhouse CLI - browse the catalog and manage a local cart and favorites.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category
//! clayhouse catalog list --category Garden
//!
//! # Add a product to the cart, or add it and go straight to checkout
//! clayhouse cart add 1
//! clayhouse cart buy 1
//!
//! # Show the cart
//! clayhouse cart show
//!
//! # Toggle a favorite
//! clayhouse favorites toggle 3
//!
//! # Remove lines (disabled unless explicitly allowed)
//! clayhouse --allow-removal cart remove 1
//! ```
//!
//! # Environment Variables
//!
//! - `CLAYHOUSE_DATA_DIR` - Where cart and favorites are stored (default: `.clayhouse`)
//! - `CLAYHOUSE_CATALOG` - Catalog JSON file (default: built-in collection)
//! - `CLAYHOUSE_ALLOW_REMOVAL` - Enable `cart remove` and `cart decrement`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clayhouse_core::ProductId;

mod commands;

use commands::{CliError, Context};

#[derive(Parser)]
#[command(name = "clayhouse")]
#[command(author, version, about = "Clayhouse storefront CLI")]
struct Cli {
    /// Directory holding the persisted cart and favorites
    #[arg(long, env = "CLAYHOUSE_DATA_DIR", default_value = ".clayhouse", global = true)]
    data_dir: PathBuf,

    /// Catalog JSON file (defaults to the built-in collection)
    #[arg(long, env = "CLAYHOUSE_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Enable cart line removal and quantity decrement
    #[arg(long, env = "CLAYHOUSE_ALLOW_REMOVAL", global = true)]
    allow_removal: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only show this category ("All" for everything)
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and subtotal
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Add one unit of a product and show the cart for checkout
    Buy { product_id: ProductId },
    /// Remove a product's line entirely
    Remove { product_id: ProductId },
    /// Remove one unit of a product
    Decrement { product_id: ProductId },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorite products
    List,
    /// Add a product to favorites, or remove it if already there
    Toggle { product_id: ProductId },
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clayhouse_cli=info,clayhouse_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli, &mut out) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut ctx = Context::load(&cli.data_dir, cli.catalog.as_deref(), cli.allow_removal)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => {
                commands::catalog::list(&ctx.store, &category, out)?;
            }
            CatalogAction::Categories => commands::catalog::categories(ctx.store.catalog(), out)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx.store, out)?,
            CartAction::Add { product_id } => commands::cart::add(&mut ctx.store, product_id, out)?,
            CartAction::Buy { product_id } => commands::cart::buy(&mut ctx.store, product_id, out)?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&mut ctx.store, product_id, out)?;
            }
            CartAction::Decrement { product_id } => {
                commands::cart::decrement(&mut ctx.store, product_id, out)?;
            }
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::List => commands::favorites::list(&ctx.store, out)?,
            FavoritesAction::Toggle { product_id } => {
                commands::favorites::toggle(&mut ctx.store, product_id, out)?;
            }
        },
    }
    Ok(())
}
