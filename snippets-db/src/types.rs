// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Row and result types for the snippets table.

/// A stored snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Unique, non-empty name
    pub keyword: String,
    /// Stored text body (may be empty)
    pub message: String,
}

impl Snippet {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}

/// Result of a listing query (`catalog` or `search`).
///
/// `Entries` is never empty; a query with no rows yields `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// One or more results, in query order
    Entries(Vec<String>),
    /// The query matched no rows
    Empty,
}

impl Listing {
    /// Wrap query results, mapping an empty vector to `Listing::Empty`.
    pub fn from_rows(rows: Vec<String>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Entries(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Results as a slice; empty for `Listing::Empty`.
    pub fn entries(&self) -> &[String] {
        match self {
            Self::Entries(rows) => rows,
            Self::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries().iter().any(|entry| entry == value)
    }
}
