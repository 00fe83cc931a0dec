//! agrc Library
//!
//! Reads the `~/.agrc` settings of a code search tool: compiles color specs
//! into terminal escape sequences, expands `~` paths and loads the INI file
//! into [`Options`].

pub mod cli;
pub mod color;
pub mod config;
pub mod paths;

pub use color::{color_parse, Color, ColorSpec, WordOutcome};
pub use config::{Casing, ConfigError, Dispatch, LoadReport, Options};
pub use paths::{expand_user_path, try_expand_user_path, ExpandError};
