//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ConfigError;
use super::ini;
use super::types::Options;
use crate::paths::expand_user_path;

/// Location of the config file before tilde expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.agrc";

/// What happened while applying a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File the settings came from; `None` for in-memory text
    pub path: Option<PathBuf>,
    /// Recognized keys
    pub applied: usize,
    /// Keys with no effect
    pub ignored: usize,
    /// 1-based numbers of lines the tokenizer skipped
    pub malformed_lines: Vec<usize>,
}

/// Get the config file path (~/.agrc), expanded when `HOME` is known.
pub fn config_path() -> PathBuf {
    resolve_path(DEFAULT_CONFIG_PATH)
}

/// Tilde-expand a user supplied config path.
pub fn resolve_path(path: &str) -> PathBuf {
    PathBuf::from(expand_user_path(path))
}

/// Apply INI text to `options`.
pub fn apply_str(options: &mut Options, text: &str) -> LoadReport {
    let summary = ini::parse(text, |section, key, value| {
        options.apply(section, key, value) == super::Dispatch::Applied
    });

    for line in &summary.malformed_lines {
        debug!(line, "Skipping malformed config line");
    }

    LoadReport {
        path: None,
        applied: summary.pairs - summary.unrecognized,
        ignored: summary.unrecognized,
        malformed_lines: summary.malformed_lines,
    }
}

/// Load options from `path`, starting from defaults.
pub fn load_from(path: &Path) -> Result<(Options, LoadReport), ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Stray non-UTF-8 bytes (e.g. Latin-1 comments) must not discard the file.
    let contents = String::from_utf8_lossy(&bytes);

    let mut options = Options::default();
    let mut report = apply_str(&mut options, &contents);
    report.path = Some(path.to_path_buf());
    debug!(
        path = %path.display(),
        applied = report.applied,
        ignored = report.ignored,
        "Loaded config"
    );
    Ok((options, report))
}

/// Load options from `path`, falling back to defaults if it cannot be read.
///
/// The failure is logged once; no report is returned in that case.
pub fn load_or_default(path: &Path) -> (Options, Option<LoadReport>) {
    match load_from(path) {
        Ok((options, report)) => (options, Some(report)),
        Err(e) => {
            warn!("{}", e);
            (Options::default(), None)
        }
    }
}
