//! tsheet library root.
//! Exposes the CLI parser, the high-level run() function, and the internal modules.

pub mod cli;
pub mod codes;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Codes { .. } => cli::commands::codes::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::init_tracing(cli.verbose);

    // `init` writes the configuration, so it runs before anything is loaded.
    if matches!(cli.command, Commands::Init { .. }) {
        return cli::commands::init::handle(&cli);
    }

    let cfg = Config::load(Path::new(&cli.config))?;
    tracing::debug!(config = %cli.config, base = %cfg.base_dir().display(), "configuration loaded");

    if !matches!(cli.command, Commands::Config { .. }) {
        cfg.ensure_directories()?;
    }

    dispatch(&cli, &cfg)
}
