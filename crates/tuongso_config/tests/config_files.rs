//! File-backed configuration and table asset loading.

use std::fs;

use tuongso_config::{ConfigError, TuongsoConfig, load_tables};
use tuongso_numerology::{BirthDate, Indices, InterpretationTables};

fn custom_tables_toml() -> String {
    let mut value = toml::Value::try_from(InterpretationTables::builtin()).unwrap();
    value["interpretations"][3] = toml::Value::String("Four".into());
    value["life_advice"][2][0] = toml::Value::String("Focus".into());
    toml::to_string(&value).unwrap()
}

#[test]
fn config_file_points_at_table_asset() {
    let dir = tempfile::tempdir().unwrap();
    let tables_path = dir.path().join("tables.toml");
    fs::write(&tables_path, custom_tables_toml()).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[log]\nlevel = \"debug\"\n\n[tables]\npath = {:?}\n",
            tables_path.display().to_string()
        ),
    )
    .unwrap();

    let config = TuongsoConfig::load_from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.log.level, "debug");

    let tables = config.resolve_tables().unwrap();
    let date = BirthDate::new(15, 6, 1990).unwrap();
    let r = tables.calculate(&date);
    assert_eq!(r.interpretation, "Four");
    assert_eq!(r.life_advice[0], "Focus");
    assert_eq!(r.personality_traits[0], "Thực tế");
}

#[test]
fn load_tables_directly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.toml");
    fs::write(&path, custom_tables_toml()).unwrap();

    let tables = load_tables(&path).unwrap();
    let r = tables.interpret(Indices::new(4, 1, 1).unwrap());
    assert_eq!(r.interpretation, "Four");
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuongsoConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn table_asset_with_wrong_row_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.toml");
    let mut value = toml::Value::try_from(InterpretationTables::builtin()).unwrap();
    if let Some(row) = value["life_advice"][0].as_array_mut() {
        row.pop();
    }
    fs::write(&path, toml::to_string(&value).unwrap()).unwrap();

    let err = load_tables(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
