// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Write operations for the snippets database.

use rusqlite::{OptionalExtension, params};
use tracing::{debug, info};

use crate::connection::SnippetDb;
use crate::error::{Error, Result};
use crate::types::Snippet;

impl SnippetDb {
    /// Store `message` under `keyword`, replacing any existing message.
    ///
    /// Returns the stored snippet.
    pub fn put(&mut self, keyword: &str, message: &str) -> Result<Snippet> {
        info!("Storing snippet {keyword:?}: {message:?}");
        if keyword.is_empty() {
            return Err(Error::EmptyKeyword);
        }

        // Rolled back on drop if anything below fails.
        let tx = self.conn.transaction()?;

        let existed = tx
            .query_row(
                "SELECT 1 FROM snippets WHERE keyword = ?1",
                params![keyword],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        tx.execute(
            r#"
            INSERT INTO snippets (keyword, message)
            VALUES (?1, ?2)
            ON CONFLICT(keyword) DO UPDATE SET message = excluded.message
            "#,
            params![keyword, message],
        )?;

        tx.commit()?;

        if existed {
            debug!("Snippet {keyword:?} replaced");
        } else {
            debug!("Snippet {keyword:?} stored");
        }
        Ok(Snippet::new(keyword, message))
    }
}
