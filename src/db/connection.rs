//! Database connection opening for tally
//!
//! First of the two acquisition phases. Opening produces a connection that
//! is proven live but whose schema state is unknown; the schema phase lives
//! in `bootstrap`.

use rusqlite::Connection;

use super::DbError;

/// An open, liveness-verified connection whose schema may be absent.
///
/// The inner connection is unreachable outside the `db` module; the only
/// way forward is [`bootstrap`](super::bootstrap), which consumes this
/// handle and returns a schema-ready one. Dropping the handle closes the
/// underlying connection.
#[derive(Debug)]
pub struct PreInitDb {
    pub(super) conn: Connection,
}

/// Open a database connection and verify it is actually usable.
///
/// SQLite opens files lazily, so constructing a `Connection` proves very
/// little: a path to garbage bytes "opens" fine and only errors on first
/// use. The pragma setup and the `SELECT 1` round trip force a real
/// exchange with the engine before the handle escapes.
///
/// On failure the partially-constructed connection is released by drop
/// before the error returns; nothing leaks on any exit path.
pub fn open(db_path: &str) -> Result<PreInitDb, DbError> {
    let conn = Connection::open(db_path).map_err(DbError::Connection)?;

    // WAL mode for better behavior when several starters hit the same file
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(DbError::Connection)?;

    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(DbError::Connection)?;

    // Liveness check: a completed round trip, not just object construction
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map_err(DbError::Connection)?;

    Ok(PreInitDb { conn })
}
