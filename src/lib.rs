//! rPunchclock library root.
//! Exposes the CLI parser, the high-level run() function and the attendance
//! core (event log store + deriver) for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Dept { .. } => c::dept::handle(&cli.command, cfg),
        Commands::Employee { .. } => c::employee::handle(&cli.command, cfg),
        Commands::Login { .. } => c::login::handle(&cli.command, cfg),
        Commands::Punch { .. } => c::punch::handle(&cli.command, cfg),
        Commands::Status { .. } => c::status::handle(&cli.command, cfg),
        Commands::Hours { .. } => c::hours::handle(&cli.command, cfg),
        Commands::History { .. } => c::history::handle(&cli.command, cfg),
        Commands::Stats { .. } => c::stats::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; in test mode the user's config file is ignored
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
