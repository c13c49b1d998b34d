//! Database layer for tally
//!
//! Connection acquisition runs in two strictly ordered phases: `open`
//! yields a live, verified connection with unknown schema state, and
//! `bootstrap` consumes it to produce a schema-ready handle. Application
//! code only ever sees the schema-ready type, so a connection that skipped
//! bootstrap cannot reach a query.

mod bootstrap;
mod connection;

pub use bootstrap::{bootstrap, TallyDb};
pub use connection::{open, PreInitDb};

use thiserror::Error;

/// Errors from connection acquisition, one variant per phase so callers can
/// tell where the sequence stopped.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database connection: {0}")]
    Connection(rusqlite::Error),

    #[error("failed to begin bootstrap transaction: {0}")]
    TxBegin(rusqlite::Error),

    #[error("schema bootstrap failed: {0}")]
    Bootstrap(rusqlite::Error),

    #[error("failed to commit bootstrap transaction: {0}")]
    Commit(rusqlite::Error),

    #[error("failed to close database connection: {0}")]
    Close(rusqlite::Error),
}
