//! Error types for the rater
//!
//! [`StorageError`] covers everything that can go wrong talking to SQLite. The
//! `Open`, `Schema`, `Load` and `EmptyCatalog` variants only happen at startup and
//! are fatal; `Write` happens per answer and is recoverable (the answer for that
//! prompt is lost, the session carries on).
//!
//! [`InputError`] is a rejected keystroke submission. It never changes session
//! state: the same prompt is shown again.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::storage::Storage`]
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened
    #[error("could not open database at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Creating tables or indexes failed
    #[error("could not create schema: {0}")]
    Schema(#[source] rusqlite::Error),

    /// Reading elements or questions failed
    #[error("could not load {what}: {source}")]
    Load {
        what: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// No active rows to draw prompts from
    #[error("no active {0} found, add some before rating")]
    EmptyCatalog(&'static str),

    /// Recording an answer (or authoring a row) failed and was rolled back
    #[error("could not record answer: {0}")]
    Write(#[source] rusqlite::Error),

    /// Closing the connection failed
    #[error("could not close database: {0}")]
    Close(#[source] rusqlite::Error),
}

/// A submitted answer that does not fit the active question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid input for yes/no question")]
    ExpectedBoolean,

    #[error("invalid numeric input for 5-star question")]
    ExpectedRating,

    /// Enter pressed before any answer key
    #[error("no answer selected")]
    NothingSelected,
}
