//! The single write connection. All graph mutations are serialized here,
//! so two producers reinforcing the same triple in one cycle cannot lose
//! an update.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use tapestry_core::errors::TapestryResult;

use super::pragmas::{apply_pragmas, verify_wal_mode};
use crate::to_storage_err;

/// Owns the one connection allowed to write.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database path.
    pub fn open(path: &Path) -> TapestryResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        if !verify_wal_mode(&conn)? {
            tracing::warn!("database did not enter WAL journal mode");
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> TapestryResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> TapestryResult<T>
    where
        F: FnOnce(&Connection) -> TapestryResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
