//! CLI module for tally
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Persistent counter CLI backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Path to the counter database (overrides TALLY_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the database and ensure the counter schema exists
    Init,

    /// Print the current counter value
    Show,

    /// Increment the counter and print the new value
    Add {
        /// Amount to add
        #[arg(long, default_value = "1")]
        by: i64,
    },
}
