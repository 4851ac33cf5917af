// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database schema for the snippets table.

/// Name of the table holding snippets.
pub(crate) const SNIPPETS_TABLE: &str = "snippets";

/// Snippets schema SQL
pub(crate) const SCHEMA_SQL: &str = r#"
create table if not exists snippets (
    keyword text primary key not null check (length(keyword) > 0),
    message text not null
);
"#;
