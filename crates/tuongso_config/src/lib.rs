//! Configuration for the tuongso tools.
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. A TOML file (`--config`)
//! 3. `TUONGSO_*` environment variables
//!
//! Interpretation tables can be swapped for a TOML asset with the same
//! shape as [`InterpretationTables`](tuongso_numerology::InterpretationTables).

pub mod config;
pub mod error;
pub mod tables;

pub use config::{
    ENV_LOG_LEVEL, ENV_TABLES, LOG_LEVELS, LogConfig, TablesConfig, TuongsoConfig,
};
pub use error::ConfigError;
pub use tables::{load_tables, parse_tables};
