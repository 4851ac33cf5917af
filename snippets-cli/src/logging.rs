// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

use std::fs::OpenOptions;

use crate::config::Config;
use crate::error::{CliError, IoContext};

/// Install the global logger described by `config`.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init(config: &Config) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    );

    if !config.log_file.as_os_str().is_empty() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .io_context(|| format!("Failed to open log file at {}", config.log_file.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init()?;
    Ok(())
}
