//! Tally - persistent counter CLI backed by SQLite

mod cli;
mod config;
mod counter;
mod db;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use thiserror::Error;

/// Single error surface for the binary layer.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Db(#[from] db::DbError),

    #[error("counter query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CounterOutput {
    db_path: String,
    value: i64,
}

fn main() {
    let cli = Cli::parse();
    let db_path = config::resolve_db_path(cli.db.as_deref());

    // The default location lives under .tally/; create the directory on
    // demand and let open() report the real error if this fails.
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    match run(&cli.command, &db_path) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: &Commands, db_path: &Path) -> Result<String, AppError> {
    let path_str = db_path.to_string_lossy();

    let raw = db::open(&path_str)?;
    let db = db::bootstrap(raw)?;

    let value = match command {
        Commands::Init | Commands::Show => counter::value(&db)?,
        Commands::Add { by } => counter::increment(&db, *by)?,
    };

    let output = serde_json::to_string_pretty(&CounterOutput {
        db_path: path_str.into_owned(),
        value,
    })?;

    db.close()?;
    Ok(output)
}
