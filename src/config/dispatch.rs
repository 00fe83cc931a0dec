//! Routing of config keys into [`Options`].

use tracing::debug;

use super::types::{Casing, Options};
use crate::color::color_parse;

/// Whether a (section, key) pair was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Ignored,
}

impl Options {
    /// Apply one `key = value` pair found under `[section]`.
    ///
    /// Color keys store the compiled escape sequence, replacing the previous
    /// one. Unknown pairs are ignored so foreign sections do not stop loading.
    pub fn apply(&mut self, section: &str, key: &str, value: &str) -> Dispatch {
        match (section, key) {
            ("color", "linenumber") => self.color_line_number = color_parse(value),
            ("color", "match") => self.color_match = color_parse(value),
            ("color", "filename") => self.color_path = color_parse(value),
            ("search", "case") => match Casing::from_value(value) {
                Some(casing) => self.casing = casing,
                None => debug!(value, "Unknown [search] case value, keeping {:?}", self.casing),
            },
            ("output", "pager") => self.pager = Some(value.to_string()),
            _ => {
                debug!(section, key, "Ignoring unrecognized config key");
                return Dispatch::Ignored;
            }
        }
        Dispatch::Applied
    }
}
