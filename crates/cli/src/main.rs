//! Prime Beef CLI - Inspect and edit the persisted cart.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product described on the command line
//! pb-cli add A --name Ribeye --price 9.99 -q 2
//!
//! # Add a product looked up in a YAML catalog
//! pb-cli add tenderloin --catalog products.yaml
//!
//! # Adjust and inspect
//! pb-cli decrease A
//! pb-cli show
//!
//! # Print the checkout link
//! pb-cli checkout
//! ```
//!
//! # Commands
//!
//! - `add`, `remove`, `increase`, `decrease`, `clear` - Cart mutations
//! - `show` - Lines and totals (`--json` for the persisted form)
//! - `checkout` - Messaging link with the order summary
//! - `product-url` - Detail page link for a product
//! - `catalog check` - Validate a YAML product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prime_beef_storefront::CartStore;
use prime_beef_storefront::config::StorefrontConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CommandError;
use commands::cart::AddArgs;

#[derive(Parser)]
#[command(name = "pb-cli")]
#[command(author, version, about = "Prime Beef cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add(AddArgs),
    /// Remove a product's line
    Remove {
        /// Product id
        id: String,
    },
    /// Add one unit to a line
    Increase {
        /// Product id
        id: String,
    },
    /// Take one unit from a line (removes it at one)
    Decrease {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show cart lines and totals
    Show {
        /// Print the persisted JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the checkout messaging link
    Checkout {
        /// Print the plain message as well
        #[arg(long)]
        message: bool,
    },
    /// Print the detail page URL for a product
    ProductUrl {
        /// Product id
        id: String,
    },
    /// Work with product catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate a YAML product catalog
    Check {
        /// Path to the catalog file
        file: PathBuf,
    },
}

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pb_cli=info,prime_beef_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).map_err(Into::into);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let mut out = io::stdout().lock();

    if let Commands::Catalog { action } = &cli.command {
        return match action {
            CatalogAction::Check { file } => commands::catalog::check(file, &mut out),
        };
    }

    let mut store = CartStore::open(config.storage());
    tracing::debug!(data_dir = %config.data_dir.display(), lines = store.len(), "Cart opened");

    match cli.command {
        Commands::Add(args) => commands::cart::add(&mut store, &args, &mut out)?,
        Commands::Remove { id } => commands::cart::remove(&mut store, &id.into(), &mut out)?,
        Commands::Increase { id } => commands::cart::increase(&mut store, &id.into(), &mut out)?,
        Commands::Decrease { id } => commands::cart::decrease(&mut store, &id.into(), &mut out)?,
        Commands::Clear => commands::cart::clear(&mut store, &mut out)?,
        Commands::Show { json } => commands::cart::show(&store, json, &mut out)?,
        Commands::Checkout { message } => commands::checkout::link(&store, message, &mut out)?,
        Commands::ProductUrl { id } => {
            commands::checkout::product_url(&config.page_url, &id.into(), &mut out)?;
        }
        Commands::Catalog { .. } => {}
    }

    out.flush()?;
    Ok(())
}
