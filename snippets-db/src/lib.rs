// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! SQLite storage for named text snippets.
//!
//! This crate owns the connection to the snippets database and the four
//! operations run against it: storing, fetching, listing and searching.
//!
//! # Key Features
//!
//! - Upsert semantics for `put` (one row per keyword)
//! - Explicit "not found" and "empty" results instead of marker strings
//! - In-memory database for testing
//!
//! # Example
//!
//! ```ignore
//! use snippets_db::{Listing, OpenMode, SnippetDb};
//!
//! let mut db = SnippetDb::open("snippets.db", OpenMode::ReadWrite)?;
//! db.put("greeting", "hello world")?;
//!
//! if let Some(message) = db.get("greeting")? {
//!     println!("{message}");
//! }
//!
//! if let Listing::Entries(keywords) = db.catalog()? {
//!     println!("{}", keywords.join(", "));
//! }
//! ```

mod connection;
mod error;
mod query;
mod schema;
mod types;
mod write;

pub use connection::{OpenMode, SnippetDb};
pub use error::{Error, Result};
pub use types::*;
