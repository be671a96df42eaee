//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The service calls store methods; it never executes SQL directly.
//! Every lookup is by primary key.

use crate::error::ApiResult;
use rusqlite::{Connection, OpenFlags};

mod client;
mod hierarchy;
pub mod seed;

pub use hierarchy::NamedTable;

pub struct Store {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

/// Row totals per table, used by the loader summary and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCounts {
    pub metros: i64,
    pub markets: i64,
    pub regions: i64,
    pub relationship_managers: i64,
    pub relationships: i64,
    pub clients: i64,
}

impl Store {
    /// Open (or create) a database for loading.
    pub fn open(path: &str) -> ApiResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        // Rollback journal, so read-only connections need no -shm file.
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an existing database for reading. Fails if it does not exist.
    pub fn open_read_only(path: &str) -> ApiResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ApiResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Apply the schema. Idempotent.
    pub fn migrate(&self) -> ApiResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        Ok(())
    }

    pub fn row_counts(&self) -> ApiResult<RowCounts> {
        Ok(RowCounts {
            metros: self.count("metros")?,
            markets: self.count("markets")?,
            regions: self.count("regions")?,
            relationship_managers: self.count("relationship_managers")?,
            relationships: self.count("relationships")?,
            clients: self.count("clients")?,
        })
    }

    fn count(&self, table: &'static str) -> ApiResult<i64> {
        let n = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(n)
    }
}
