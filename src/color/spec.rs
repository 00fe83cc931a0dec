//! Color spec compilation.
//!
//! A spec is a whitespace-separated list of words: `[fg [bg]] [attr]...`.
//! Color words fill the foreground first, then the background. Everything
//! else is tried as an attribute. Words that match neither are dropped and
//! parsing continues.

use tracing::trace;

use super::attr::{parse_attribute, AttributeSet};
use super::token::{parse_color, Color};
use super::CSI;

/// Capacity reserved for a rendered sequence.
///
/// The longest sequence a spec can produce is 42 bytes: all 13 attribute
/// codes plus two three-digit colors.
pub const COLOR_MAXLEN: usize = 75;

/// What happened to a single word of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    Foreground(Color),
    Background(Color),
    Attribute(u8),
    /// Not a color or attribute, or a third color
    Ignored,
}

/// Parsed foreground, background and attributes of one spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSpec {
    pub foreground: Color,
    pub background: Color,
    pub attributes: AttributeSet,
}

impl ColorSpec {
    /// Parse a spec, dropping words that are not understood.
    pub fn parse(value: &str) -> Self {
        let mut spec = Self::default();
        for word in words(value) {
            spec.apply_word(word);
        }
        spec
    }

    /// Parse a spec and report the outcome of every word.
    pub fn parse_with_outcomes(value: &str) -> (Self, Vec<(&str, WordOutcome)>) {
        let mut spec = Self::default();
        let outcomes = words(value)
            .map(|word| (word, spec.apply_word(word)))
            .collect();
        (spec, outcomes)
    }

    /// Route one word to the color or attribute slot it belongs to.
    pub fn apply_word(&mut self, word: &str) -> WordOutcome {
        if let Some(color) = parse_color(word) {
            if self.foreground == Color::Unspecified {
                self.foreground = color;
                return WordOutcome::Foreground(color);
            }
            if self.background == Color::Unspecified {
                self.background = color;
                return WordOutcome::Background(color);
            }
            // Third color: fall through, no attribute will match it.
        }

        match parse_attribute(word) {
            Some(code) => {
                self.attributes.insert(code);
                WordOutcome::Attribute(code)
            }
            None => {
                trace!(word, "Ignoring unrecognized color spec word");
                WordOutcome::Ignored
            }
        }
    }

    /// True when rendering would produce no escape sequence.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.foreground.is_empty() && self.background.is_empty()
    }

    /// Render the SGR escape sequence, or an empty string if nothing is set.
    ///
    /// Codes are emitted as attributes in ascending order, then the
    /// foreground value, then the background value.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(COLOR_MAXLEN);
        out.push_str(CSI);

        let codes = self
            .attributes
            .iter()
            .chain(self.foreground.code())
            .chain(self.background.code());
        for (index, code) in codes.enumerate() {
            if index > 0 {
                out.push(';');
            }
            out.push_str(&code.to_string());
        }
        out.push('m');

        debug_assert!(out.len() <= COLOR_MAXLEN);
        out
    }
}

/// Split on the C locale `isspace` set, which includes vertical tab.
fn words(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'))
        .filter(|word| !word.is_empty())
}

/// Compile a color spec straight to its escape sequence.
pub fn color_parse(value: &str) -> String {
    ColorSpec::parse(value).render()
}
