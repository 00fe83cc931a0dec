//! Configuration management for agrc
//!
//! Settings live in an INI file (`~/.agrc`):
//!
//! ```ini
//! [color]
//! linenumber = bold yellow
//! match = black yellow
//! filename = bold green
//!
//! [search]
//! case = insensitive
//!
//! [output]
//! pager = less -R
//! ```

mod dispatch;
mod error;
pub mod ini;
mod io;
mod types;

pub use dispatch::Dispatch;
pub use error::ConfigError;
pub use io::{LoadReport, DEFAULT_CONFIG_PATH};
pub use types::*;

use std::path::{Path, PathBuf};

impl Options {
    /// Get the config file path (~/.agrc)
    pub fn config_path() -> PathBuf {
        io::config_path()
    }

    /// Tilde-expand a config path given on the command line
    pub fn resolve_path(path: &str) -> PathBuf {
        io::resolve_path(path)
    }

    /// Load options from the default config file
    pub fn load() -> Result<(Self, LoadReport), ConfigError> {
        io::load_from(&io::config_path())
    }

    /// Load options from a specific file
    pub fn load_from(path: &Path) -> Result<(Self, LoadReport), ConfigError> {
        io::load_from(path)
    }

    /// Load options, or log the failure and return defaults
    pub fn load_or_default(path: &Path) -> (Self, Option<LoadReport>) {
        io::load_or_default(path)
    }

    /// Apply INI text on top of the current values
    pub fn apply_str(&mut self, text: &str) -> LoadReport {
        io::apply_str(self, text)
    }
}
