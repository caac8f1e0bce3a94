//! Interpretation table assets.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use tuongso_numerology::InterpretationTables;

use crate::error::ConfigError;

/// Read a TOML table asset from disk.
pub fn load_tables(path: &Path) -> Result<InterpretationTables, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tables = parse_tables(&text, path)?;
    debug!(path = %path.display(), "loaded interpretation tables");
    Ok(tables)
}

/// Parse a TOML table asset. `origin` only labels errors.
pub fn parse_tables(text: &str, origin: &Path) -> Result<InterpretationTables, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(origin),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_round_trip_through_toml() {
        let text = toml::to_string(InterpretationTables::builtin()).unwrap();
        let parsed = parse_tables(&text, Path::new("builtin.toml")).unwrap();
        assert_eq!(&parsed, InterpretationTables::builtin());
    }

    #[test]
    fn missing_rows_rejected() {
        let text = r#"
interpretations = ["one"]
personality_traits = []
life_advice = []
"#;
        let err = parse_tables(text, Path::new("short.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("short.toml"));
    }

    #[test]
    fn empty_string_rejected() {
        let mut value = toml::Value::try_from(InterpretationTables::builtin()).unwrap();
        value["personality_traits"][3][3] = toml::Value::String(String::new());
        let text = toml::to_string(&value).unwrap();
        let err = parse_tables(&text, Path::new("blank.toml")).unwrap_err();
        assert!(err.to_string().contains("personality_traits"), "{err}");
    }

    #[test]
    fn missing_file() {
        let err = load_tables(Path::new("/nonexistent/tables.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
