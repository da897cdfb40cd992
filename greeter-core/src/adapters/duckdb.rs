//! DuckDB user store implementation

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use duckdb::{params, Connection};

use crate::domain::result::{Error, Result};
use crate::domain::{User, UserId};
use crate::ports::UserStore;

/// DuckDB-backed user store
///
/// Wraps a single connection in a `Mutex` so a shared store stays safe
/// across threads per its own contract.
pub struct DuckDbUserStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl DuckDbUserStore {
    /// Open (or create) the database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .map_err(|e| Error::database(format!("Failed to open {}: {}", db_path.display(), e)))?;

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: db_path.to_path_buf(),
        })
    }

    /// Create the users table if it does not exist
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGINT PRIMARY KEY,
                name TEXT NOT NULL
            )",
        )
        .map_err(|e| Error::database(format!("Failed to create schema: {}", e)))?;
        Ok(())
    }

    /// Insert or update a user row
    pub fn upsert_user(&self, user: &User) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO users (id, name) VALUES (?, ?)
             ON CONFLICT (id) DO UPDATE SET name = excluded.name",
            params![user.id, user.name],
        )
        .map_err(|e| Error::database(format!("Failed to upsert user {}: {}", user.id, e)))?;
        Ok(())
    }

    /// Path of the backing database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::database("Database connection mutex poisoned"))
    }
}

impl UserStore for DuckDbUserStore {
    fn name_by_id(&self, id: UserId) -> Result<String> {
        let conn = self.lock_conn()?;
        conn.query_row(
            "SELECT name FROM users WHERE id = ?",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| match e {
            duckdb::Error::QueryReturnedNoRows => Error::NotFound(id),
            other => Error::lookup(other.to_string()),
        })
    }
}
