//! Config loading errors.

use std::path::{Path, PathBuf};

/// Errors that abort loading a config file.
///
/// Unknown keys and malformed lines never produce an error; only failing to
/// read the file does.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot load '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Path of the file that could not be loaded.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } => path,
        }
    }
}
