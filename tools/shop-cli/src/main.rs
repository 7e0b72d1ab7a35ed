//! Plant shop CLI - a terminal storefront over the cart store.
//!
//! Commands:
//! - `plantshop catalog` - List or show products
//! - `plantshop cart` - Apply a scripted list of cart operations
//! - `plantshop replay` - Replay a JSON recording of cart actions
//! - `plantshop session` - Browse the shop interactively
//! - `plantshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shop_observability::{init_tracing, LogLevel};

use commands::{CartArgs, CatalogArgs, ConfigArgs, ReplayArgs, SessionArgs};

/// Plant shop - browse the catalog and manage a cart from the terminal
#[derive(Parser)]
#[command(name = "plantshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or show catalog products
    Catalog(CatalogArgs),

    /// Apply cart operations and print the resulting cart
    Cart(CartArgs),

    /// Replay a recorded list of cart actions
    Replay(ReplayArgs),

    /// Browse the shop interactively
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        ctx.config.logging.level
    };
    init_tracing(level, ctx.config.logging.format);

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Replay(args) => commands::replay::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
