//! Counter operations for tally
//!
//! Application-level reads and updates over the schema-ready handle. The
//! bootstrap guarantees the table exists with at least one row, so these
//! statements never create anything.

use rusqlite::Result;

use crate::db::TallyDb;

/// Read the current counter value.
pub fn value(db: &TallyDb) -> Result<i64> {
    db.conn()
        .query_row("SELECT value FROM counter", [], |row| row.get(0))
}

/// Add `by` to the counter and return the new value.
pub fn increment(db: &TallyDb, by: i64) -> Result<i64> {
    db.conn()
        .execute("UPDATE counter SET value = value + ?1", [by])?;
    value(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{bootstrap, open};
    use tempfile::tempdir;

    #[test]
    fn test_value_starts_at_zero() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let db = bootstrap(open(db_path.to_str().unwrap()).unwrap()).unwrap();
        assert_eq!(value(&db).unwrap(), 0);
    }

    #[test]
    fn test_increment_adds_and_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let path = db_path.to_str().unwrap();

        let db = bootstrap(open(path).unwrap()).unwrap();
        assert_eq!(increment(&db, 1).unwrap(), 1);
        assert_eq!(increment(&db, 4).unwrap(), 5);
        db.close().unwrap();

        // Restart: the value survives and re-bootstrap does not reset it
        let db = bootstrap(open(path).unwrap()).unwrap();
        assert_eq!(value(&db).unwrap(), 5);
    }
}
