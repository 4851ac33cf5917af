// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Read query operations for the snippets database.

use rusqlite::params;
use tracing::{debug, info};

use crate::connection::SnippetDb;
use crate::error::Result;
use crate::types::Listing;

impl SnippetDb {
    /// Retrieve the message stored under `keyword`.
    ///
    /// Matching is exact and case-sensitive. Returns `None` if no snippet has
    /// that keyword; a stored empty message is returned as `Some("")`.
    pub fn get(&self, keyword: &str) -> Result<Option<String>> {
        info!("Retrieving snippet {keyword:?}");
        let mut stmt = self
            .conn
            .prepare_cached("SELECT message FROM snippets WHERE keyword = ?1")?;

        let message = stmt.query_row(params![keyword], |row| row.get(0));

        match message {
            Ok(message) => {
                debug!("Snippet {keyword:?} retrieved");
                Ok(Some(message))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                debug!("No snippet stored under {keyword:?}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List every stored keyword in ascending order.
    pub fn catalog(&self) -> Result<Listing> {
        info!("Listing snippet keywords");
        let mut stmt = self
            .conn
            .prepare_cached("SELECT keyword FROM snippets ORDER BY keyword ASC")?;

        let mut keywords = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            keywords.push(row.get(0)?);
        }
        debug!("Found {} keywords", keywords.len());
        Ok(Listing::from_rows(keywords))
    }

    /// Find every message containing `needle`.
    ///
    /// The match is a plain case-sensitive substring test; `%` and `_` have
    /// no special meaning. Results are ordered by keyword.
    pub fn search(&self, needle: &str) -> Result<Listing> {
        info!("Searching snippets for {needle:?}");
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT message FROM snippets
            WHERE instr(message, ?1) > 0
            ORDER BY keyword ASC
            "#,
        )?;

        let mut messages = Vec::new();
        let mut rows = stmt.query(params![needle])?;
        while let Some(row) = rows.next()? {
            messages.push(row.get(0)?);
        }
        debug!("Found {} matching snippets", messages.len());
        Ok(Listing::from_rows(messages))
    }

    /// Count the number of stored snippets.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
