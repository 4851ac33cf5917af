// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Command-line front end for the snippets database.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
