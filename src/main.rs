//! gselect CLI - browse and pick GIS elements grouped by mapset
//!
//! Usage: gselect <COMMAND>
//!
//! Commands:
//!   tree   Print the mapset/element tree for an element type
//!   pick   Resolve a selection and print it as comma-joined text
//!   types  List the element types and their aliases

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::pick::PickArgs;
use gselect::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config);

    match cli.command {
        Commands::Tree {
            element_type,
            mapsets,
            ascii,
        } => {
            let catalog = commands::open_catalog(cli.catalog.as_deref(), &config)?;
            commands::tree::cmd_tree(catalog, &element_type, mapsets, ascii, cli.json, &config)
        }
        Commands::Pick {
            element_type,
            mapsets,
            select,
            multiple,
            strict,
        } => {
            let catalog = commands::open_catalog(cli.catalog.as_deref(), &config)?;
            let args = PickArgs {
                element_type,
                mapsets,
                select,
                multiple,
                strict,
            };
            commands::pick::cmd_pick(catalog, args, cli.json, &config)
        }
        Commands::Types => commands::types::cmd_types(cli.json),
    }
}

/// Log to stderr. `GSELECT_LOG` wins; otherwise `-v` raises the configured level.
fn init_tracing(verbose: u8, config: &Config) {
    let directive = match verbose {
        0 => config.output.verbosity.filter_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("GSELECT_LOG").unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
