//! Schema bootstrap for tally
//!
//! Runs on every process start, inside a transaction, and is idempotent:
//! the counter table is created only if missing and seeded only if empty.
//! Concurrent starters are serialized by SQLite's locking; a loser fails
//! cleanly and is surfaced rather than retried here.

use rusqlite::Connection;

use super::connection::PreInitDb;
use super::DbError;

/// Idempotent bootstrap batch: create the counter table if it does not
/// exist, seed a single zero row only when the table has no rows.
const BOOTSTRAP_SQL: &str = "\
CREATE TABLE IF NOT EXISTS counter (
  value INTEGER NOT NULL DEFAULT 0
);
INSERT INTO counter (value)
  SELECT 0 WHERE NOT EXISTS (SELECT 1 FROM counter);
";

/// A schema-ready database handle.
///
/// Constructed only by [`bootstrap`]; holding one means the bootstrap
/// transaction committed, so the counter table exists with at least one
/// row. Dropping the handle closes the underlying connection.
#[derive(Debug)]
pub struct TallyDb {
    conn: Connection,
}

impl TallyDb {
    /// Borrow the underlying connection for application queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error the driver reports.
    ///
    /// Dropping the handle also releases it; this exists for callers that
    /// want the error instead of a silent release.
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::Close(e))
    }
}

/// Ensure the counter schema exists, consuming the raw handle.
///
/// Returns the same underlying connection, now typed as schema-ready. The
/// connection is never closed here; release stays bound to the handle.
pub fn bootstrap(db: PreInitDb) -> Result<TallyDb, DbError> {
    let mut conn = db.conn;
    run_bootstrap_tx(&mut conn, BOOTSTRAP_SQL)?;
    Ok(TallyDb { conn })
}

/// Run a bootstrap batch inside a transaction.
///
/// The `Transaction` guard rolls back on drop unless explicitly committed,
/// so every early return below leaves the database untouched.
fn run_bootstrap_tx(conn: &mut Connection, sql: &str) -> Result<(), DbError> {
    let tx = conn.transaction().map_err(DbError::TxBegin)?;
    tx.execute_batch(sql).map_err(DbError::Bootstrap)?;
    tx.commit().map_err(DbError::Commit)
}
