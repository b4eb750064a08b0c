mod analytics;
mod cli;
mod config;
mod db;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    // First run: materialize the defaults so they are discoverable and editable
    if !AppConfig::config_path()?.exists() {
        config.save().context("Writing default config")?;
    }

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    log::debug!("database at {}", db_path.display());

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        Some(Commands::Task { action }) => {
            handlers::handle_task(&conn, &config, &action)?;
        }
        Some(Commands::Goal { action }) => {
            handlers::handle_goal(&conn, &action)?;
        }
        Some(Commands::Gym { action }) => {
            handlers::handle_gym(&conn, &config, &action)?;
        }
        Some(Commands::Win { action }) => {
            handlers::handle_win(&conn, &action)?;
        }
        Some(Commands::Thread { action }) => {
            handlers::handle_thread(&conn, &action)?;
        }
        Some(Commands::Log { action }) => {
            handlers::handle_log(&conn, &config, &action)?;
        }
        Some(Commands::Focus { minutes }) => {
            handlers::handle_focus(&conn, minutes)?;
        }
        Some(Commands::Stats { week }) => {
            handlers::handle_stats(&conn, &config, week)?;
        }
        Some(Commands::Calendar { month, year }) => {
            handlers::handle_calendar(&conn, &config, month, year)?;
        }
        Some(Commands::Export { json }) => {
            handlers::handle_export(&conn, &config, json)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
