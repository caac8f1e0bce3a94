//! Layered tool configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use tuongso_numerology::InterpretationTables;

use crate::error::ConfigError;
use crate::tables::load_tables;

/// Overrides `log.level`.
pub const ENV_LOG_LEVEL: &str = "TUONGSO_LOG_LEVEL";

/// Overrides `tables.path`.
pub const ENV_TABLES: &str = "TUONGSO_TABLES";

/// Accepted values for `log.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuongsoConfig {
    pub log: LogConfig,
    pub tables: TablesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of [`LOG_LEVELS`], stored lowercase.
    #[serde(deserialize_with = "lowercase_level")]
    pub level: String,
}

fn lowercase_level<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|level| level.to_ascii_lowercase())
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// TOML table asset. Built-in tables are used when unset.
    pub path: Option<PathBuf>,
}

impl TuongsoConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Apply `TUONGSO_*` variables from the process environment.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            debug!(%level, "log level from environment");
            self.log.level = level.to_ascii_lowercase();
        }
        if let Some(path) = lookup(ENV_TABLES).filter(|v| !v.is_empty()) {
            debug!(%path, "tables path from environment");
            self.tables.path = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log.level
            )));
        }
        Ok(())
    }

    /// Load the configured table asset, or the built-in tables when none is set.
    pub fn resolve_tables(&self) -> Result<InterpretationTables, ConfigError> {
        match &self.tables.path {
            Some(path) => load_tables(path),
            None => Ok(InterpretationTables::builtin().clone()),
        }
    }
}
