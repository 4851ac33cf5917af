// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use snippets_db::OpenMode;
use std::path::{Path, PathBuf};

use crate::error::{CliError, IoContext};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SNIPPETS_CONFIG";
/// Environment variable overriding `db_path`.
pub const DB_ENV: &str = "SNIPPETS_DB";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "snippets.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database
    pub db_path: PathBuf,

    /// File that log lines are appended to; empty logs to stderr
    pub log_file: PathBuf,

    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,

    /// Create the database and snippets table if missing
    pub create_if_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("snippets.db"),
            log_file: PathBuf::from("snippets.log"),
            log_level: "debug".to_string(),
            create_if_missing: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the environment and working directory.
    pub fn load() -> Result<Self, CliError> {
        Self::resolve(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os(DB_ENV).map(PathBuf::from),
            Path::new(DEFAULT_CONFIG_FILE),
        )
    }

    /// An explicit `config_file` must exist; `fallback` is only read if it
    /// does. `db_override` replaces whatever `db_path` the file set.
    pub fn resolve(
        config_file: Option<PathBuf>,
        db_override: Option<PathBuf>,
        fallback: &Path,
    ) -> Result<Self, CliError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(&path)?,
            None if fallback.exists() => Self::from_file(fallback)?,
            None => Self::default(),
        };

        if let Some(db_path) = db_override {
            config.db_path = db_path;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(CliError::config("db_path must not be empty"));
        }
        if self.log_level.trim().is_empty() {
            return Err(CliError::config("log_level must not be empty"));
        }
        Ok(())
    }

    pub fn open_mode(&self) -> OpenMode {
        if self.create_if_missing {
            OpenMode::Create
        } else {
            OpenMode::ReadWrite
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("snippets.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(None, None, &dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.db_path, PathBuf::from("snippets.db"));
        assert_eq!(config.log_file, PathBuf::from("snippets.log"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.open_mode(), OpenMode::ReadWrite);
    }

    #[test]
    fn test_fallback_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = write_config(
            dir.path(),
            "db_path = \"/tmp/other.db\"\ncreate_if_missing = true\n",
        );

        let config = Config::resolve(None, None, &fallback).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.open_mode(), OpenMode::Create);
    }

    #[test]
    fn test_db_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_config(dir.path(), "db_path = \"from-file.db\"\n");

        let config = Config::resolve(
            Some(file),
            Some(PathBuf::from("from-env.db")),
            Path::new("unused.toml"),
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("from-env.db"));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::resolve(
            Some(dir.path().join("missing.toml")),
            None,
            Path::new("unused.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_config(dir.path(), "database = \"typo.db\"\n");

        let err = Config::resolve(Some(file), None, Path::new("unused.toml")).unwrap_err();
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_config(dir.path(), "log_level = \"\"\n");

        let err = Config::resolve(Some(file), None, Path::new("unused.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
