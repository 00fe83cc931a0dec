//! Config loading from disk

use agrc::{Casing, ConfigError, Options};

use super::helpers::{temp_home, SAMPLE_CONFIG};

#[test]
fn load_from_reads_every_recognized_key() {
    let (_dir, path) = temp_home(SAMPLE_CONFIG);
    let (options, report) = Options::load_from(&path).unwrap();

    assert_eq!(options.color_line_number, "\x1b[1;33m");
    assert_eq!(options.color_match, "\x1b[30;93m");
    assert_eq!(options.color_path, "\x1b[4;208m");
    assert_eq!(options.casing, Casing::Insensitive);
    assert_eq!(options.pager.as_deref(), Some("less -R"));

    assert_eq!(report.path.as_deref(), Some(path.as_path()));
    assert_eq!(report.applied, 5);
    assert_eq!(report.ignored, 1);
    assert!(report.malformed_lines.is_empty());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.agrc");

    let err = Options::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().starts_with("Cannot load '"));
}

#[test]
fn load_or_default_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let (options, report) = Options::load_or_default(&dir.path().join("missing.agrc"));
    assert_eq!(options, Options::default());
    assert!(report.is_none());
}

#[test]
fn directory_instead_of_file_is_a_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Options::load_from(dir.path()).is_err());
}

#[test]
fn empty_file_keeps_defaults() {
    let (_dir, path) = temp_home("");
    let (options, report) = Options::load_from(&path).unwrap();
    assert_eq!(options, Options::default());
    assert_eq!(report.applied, 0);
}

#[test]
fn color_value_with_nothing_recognized_disables_the_color() {
    let (_dir, path) = temp_home("[color]\nmatch = glittery\n");
    let (options, _) = Options::load_from(&path).unwrap();
    assert_eq!(options.color_match, "");
}

#[test]
fn non_utf8_bytes_do_not_discard_the_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(".agrc");
    std::fs::write(&path, b"; caf\xe9 settings\n[search]\ncase = sensitive\n").unwrap();

    let (options, report) = Options::load_from(&path).unwrap();
    assert_eq!(options.casing, Casing::Sensitive);
    assert_eq!(report.applied, 1);

    let (options, report) = Options::load_or_default(&path);
    assert_eq!(options.casing, Casing::Sensitive);
    assert!(report.is_some());
}
