//! Tests for TOML configuration.

use chrono::DateTime;
use patlog::{Config, DirectiveKind, Entry, Error, Level, Pattern};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert!(config.fields.skip.is_empty());
    assert_eq!(config.pattern().unwrap(), Pattern::default());
}

#[test]
fn pattern_from_config() {
    let config = Config::from_toml_str(
        r#"
        [[pattern]]
        directive = "time"
        format = "YYYY-MM-DD HH:mm:ss"

        [[pattern]]
        directive = "level"
        name = "lvl"
        format = "[%s]"

        [[pattern]]
        directive = "custom"
        format = "-"

        [[pattern]]
        directive = "message"
        "#,
    )
    .unwrap();

    let pattern = config.pattern().unwrap();
    assert_eq!(pattern.len(), 4);
    assert_eq!(pattern[1].kind(), DirectiveKind::Level);
    assert_eq!(pattern[1].name(), "lvl");
    assert_eq!(pattern[2].name(), "custom");

    let time = DateTime::parse_from_rfc3339("2016-07-02T22:26:01+00:00").unwrap();
    let entry = Entry::new(Level::Warn, "disk low").time(time);
    assert_eq!(
        config.renderer().render_string(&pattern, &entry),
        "2016-07-02 22:26:01 [WARN] - disk low \n"
    );
}

#[test]
fn unknown_directive_is_rejected() {
    let config = Config::from_toml_str(
        r#"
        [[pattern]]
        directive = "hostname"
        "#,
    )
    .unwrap();
    let err = config.pattern().unwrap_err();
    assert!(matches!(err, Error::UnknownDirective(ref name) if name == "hostname"));
}

#[test]
fn skip_fields_feed_the_renderer() {
    let config = Config::from_toml_str(
        r#"
        [fields]
        skip = ["password"]

        [[pattern]]
        directive = "fields"
        "#,
    )
    .unwrap();
    let entry = Entry::new(Level::Info, "login")
        .field("password", "hunter2")
        .field("user", "ann");
    let out = config
        .renderer()
        .render_string(&config.pattern().unwrap(), &entry);
    assert_eq!(out, "fields[user: ann] \n");
}

#[test]
fn level_parsing() {
    let config = Config::from_toml_str("[general]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(config.level().unwrap(), Level::Debug);

    let config = Config::from_toml_str("[general]\nlevel = \"loud\"\n").unwrap();
    assert!(matches!(config.level(), Err(Error::InvalidLevel(_))));
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn syntax_error_is_reported() {
    let err = Config::from_toml_str("[[pattern]\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
    assert!(err.to_string().starts_with("parse error"));
}

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patlog.toml");
    fs::write(&path, "[fields]\nskip = [\"trace_id\"]\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.field_filter().is_excluded("trace_id"));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config.pattern().unwrap(), Pattern::default());
}
