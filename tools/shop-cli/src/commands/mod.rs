//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod replay;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List all products.
    List,
    /// Show details for one product.
    Show {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations to apply in order: add:<id>, inc:<id>, dec:<id>, rm:<id>.
    #[arg(required = true)]
    pub ops: Vec<String>,

    /// Print the outcome of every operation.
    #[arg(short, long)]
    pub trace: bool,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of cart actions.
    pub file: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Skip the splash screen.
    #[arg(long)]
    pub skip_splash: bool,
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
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
