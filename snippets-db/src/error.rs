// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for snippet database operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for snippet database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during snippet database operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Database file not found
    #[error("Database not found at: {0}")]
    DatabaseNotFound(PathBuf),

    /// The database exists but has no snippets table
    #[error("Database at '{0}' has no snippets table")]
    SchemaMissing(PathBuf),

    /// Snippet keywords must not be empty
    #[error("Snippet keyword must not be empty")]
    EmptyKeyword,
}
