//! SQLite storage
//!
//! One [`Storage`] owns the only connection for the whole process. It is
//! opened at startup, used to load the [`Catalog`](crate::prompt::Catalog), then
//! to record one answer per confirmed response, and closed once on exit.
//!
//! - [`schema`]: table definitions
//! - [`catalog`]: loading active elements and questions, adding new ones
//! - [`answers`]: the answer recorder and read-side queries

pub mod answers;
pub mod catalog;
pub mod schema;

pub use answers::{AnswerRow, QuestionSummary};

use crate::error::StorageError;
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

pub struct Storage {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Storage {
    /// Open (or create) the database file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;
        configure(&conn).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;
        info!("opened database {:?}", path);
        Ok(Storage {
            conn,
            path: Some(path),
        })
    }

    /// Fresh in-memory database with the schema already created
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let in_memory = |source| StorageError::Open {
            path: PathBuf::from(":memory:"),
            source,
        };
        let conn = Connection::open_in_memory().map_err(in_memory)?;
        configure(&conn).map_err(in_memory)?;
        let storage = Storage { conn, path: None };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Where the database lives, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create any missing tables and indexes
    pub fn init_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(schema::SCHEMA)
            .map_err(StorageError::Schema)?;
        debug!("schema ready");
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the connection, reporting any error SQLite raises on the way out
    pub fn close(self) -> Result<(), StorageError> {
        self.conn
            .close()
            .map_err(|(_, source)| StorageError::Close(source))?;
        info!("database closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let storage = Storage::open_in_memory().expect("open");
        storage.init_schema().expect("second init");
        assert_eq!(storage.answer_count().expect("count"), 0);
    }

    #[test]
    fn test_close() {
        let storage = Storage::open_in_memory().expect("open");
        assert!(storage.path().is_none());
        storage.close().expect("close");
    }
}
