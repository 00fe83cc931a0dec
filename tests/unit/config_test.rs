//! Unit tests for config dispatch

use agrc::{Casing, Dispatch, Options};
use serial_test::serial;

use super::helpers::temp_config;

#[test]
fn default_options_have_expected_values() {
    let options = Options::default();
    assert_eq!(options.color_line_number, "\x1b[1;33m");
    assert_eq!(options.color_match, "\x1b[30;43m");
    assert_eq!(options.color_path, "\x1b[1;32m");
    assert_eq!(options.casing, Casing::Default);
    assert!(options.pager.is_none());
}

#[test]
fn all_recognized_keys_apply() {
    let mut options = Options::default();
    let report = options.apply_str(
        "[color]\n\
         linenumber = bold yellow\n\
         match = black brightyellow\n\
         filename = ul green\n\
         [search]\n\
         case = insensitive\n\
         [output]\n\
         pager = less -R\n",
    );

    assert_eq!(report.applied, 5);
    assert_eq!(report.ignored, 0);
    assert_eq!(options.color_line_number, "\x1b[1;33m");
    assert_eq!(options.color_match, "\x1b[30;93m");
    assert_eq!(options.color_path, "\x1b[4;32m");
    assert_eq!(options.casing, Casing::Insensitive);
    assert_eq!(options.pager.as_deref(), Some("less -R"));
}

#[test]
fn unknown_section_does_not_disturb_other_settings() {
    let mut options = Options::default();
    let report = options.apply_str(
        "[bogus]\n\
         x = 1\n\
         [output]\n\
         pager = most\n",
    );

    assert_eq!(report.applied, 1);
    assert_eq!(report.ignored, 1);
    assert_eq!(options.pager.as_deref(), Some("most"));
    assert_eq!(options.color_match, Options::default().color_match);
}

#[test]
fn keys_are_scoped_to_their_section() {
    let mut options = Options::default();
    assert_eq!(options.apply("output", "case", "sensitive"), Dispatch::Ignored);
    assert_eq!(options.apply("search", "pager", "less"), Dispatch::Ignored);
    assert_eq!(options, Options::default());
}

#[test]
fn malformed_lines_are_reported_not_fatal() {
    let mut options = Options::default();
    let report = options.apply_str("[search\ncase = sensitive\n[search]\ncase = sensitive\n");
    assert_eq!(report.malformed_lines, vec![1]);
    // The first pair lands in the "" section and is ignored.
    assert_eq!(report.ignored, 1);
    assert_eq!(options.casing, Casing::Sensitive);
}

#[test]
fn options_serialize_to_json() {
    let mut options = Options::default();
    options.apply("search", "case", "sensitive");
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(value["casing"], "sensitive");
    assert_eq!(value["pager"], serde_json::Value::Null);
    assert_eq!(value["color_path"], "\x1b[1;32m");
}

#[test]
#[serial]
fn load_reads_agrc_from_home() {
    let (dir, path) = temp_config("[output]\npager = less -R\n[search]\ncase = sensitive\n");
    let saved = std::env::var_os("HOME");
    std::env::set_var("HOME", dir.path());

    assert_eq!(Options::config_path(), path);
    let loaded = Options::load();

    match saved {
        Some(v) => std::env::set_var("HOME", v),
        None => std::env::remove_var("HOME"),
    }

    let (options, report) = loaded.unwrap();
    assert_eq!(options.pager.as_deref(), Some("less -R"));
    assert_eq!(options.casing, Casing::Sensitive);
    assert_eq!(report.path.as_deref(), Some(path.as_path()));
    assert_eq!(report.applied, 2);
}
