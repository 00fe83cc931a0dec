//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A realistic ~/.agrc used across tests.
pub const SAMPLE_CONFIG: &str = "\
; agrc settings
[color]
linenumber = bold yellow
match = black brightyellow   ; highlight
filename = 208 ul

[search]
case = insensitive

[output]
pager = less -R

[plugins]
enabled = yes
";

/// Create a temp directory acting as HOME with `.agrc` holding `contents`.
pub fn temp_home(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".agrc");
    fs::write(&path, contents).expect("Failed to write temp config");
    (temp_dir, path)
}
