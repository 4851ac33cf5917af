// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};

/// Store and retrieve snippets of text
#[derive(Debug, Parser)]
#[command(name = "snippets", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Store a snippet
    Put {
        /// Name of the snippet
        name: String,
        /// Snippet text
        snippet: String,
    },

    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        name: String,
    },

    /// List the names of all stored snippets
    Catalog,

    /// Find snippets whose text contains a string
    Search {
        /// Text to look for
        string: String,
    },
}
