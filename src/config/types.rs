//! Option type definitions and defaults

use serde::Serialize;

/// How the search treats letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Smart case: insensitive unless the pattern has an uppercase letter
    #[default]
    Default,
    Sensitive,
    Insensitive,
}

impl Casing {
    /// Parse the literal value of `[search] case`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "sensitive" => Some(Casing::Sensitive),
            "insensitive" => Some(Casing::Insensitive),
            _ => None,
        }
    }
}

/// Settings read from `~/.agrc`.
///
/// Color fields hold rendered escape sequences, not the spec text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    pub color_line_number: String,
    pub color_match: String,
    pub color_path: String,
    pub casing: Casing,
    /// Command that output is piped through, if any
    pub pager: Option<String>,
}

pub fn default_color_line_number() -> String {
    "\x1b[1;33m".to_string()
}

pub fn default_color_match() -> String {
    "\x1b[30;43m".to_string()
}

pub fn default_color_path() -> String {
    "\x1b[1;32m".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_line_number: default_color_line_number(),
            color_match: default_color_match(),
            color_path: default_color_path(),
            casing: Casing::default(),
            pager: None,
        }
    }
}
