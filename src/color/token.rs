//! Color word parsing.
//!
//! A color word is one of the eight ANSI names (optionally prefixed with
//! `bright`, case-insensitive) or an integer in `-1..=255`. Integers `0..=15`
//! are rewritten to the portable 30-37 / 90-97 codes.

/// SGR code of the first standard foreground color (black).
pub const FOREGROUND_ANSI: u8 = 30;

/// SGR code of the first aixterm bright foreground color (bright black).
pub const FOREGROUND_BRIGHT_ANSI: u8 = 90;

/// Positions must match the ANSI color order.
const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Nothing assigned to this role yet
    #[default]
    Unspecified,
    /// Terminal default (`-1`); occupies the role but emits no code
    Normal,
    /// Standard or bright ANSI color, stored as its SGR code (30-37, 90-97)
    Ansi(u8),
    /// 256-color palette index (16-255)
    Indexed256(u8),
}

impl Color {
    /// True for colors that render nothing (`Unspecified`, `Normal`).
    pub fn is_empty(self) -> bool {
        matches!(self, Color::Unspecified | Color::Normal)
    }

    /// Numeric value emitted in the escape sequence, if any.
    pub fn code(self) -> Option<u8> {
        match self {
            Color::Ansi(value) | Color::Indexed256(value) => Some(value),
            Color::Unspecified | Color::Normal => None,
        }
    }
}

/// Parse one of the eight ANSI color names, with an optional `bright` prefix.
pub fn parse_ansi_color(word: &str) -> Option<Color> {
    let (name, offset) = match strip_prefix_ignore_case(word, "bright") {
        Some(rest) => (rest, FOREGROUND_BRIGHT_ANSI),
        None => (word, FOREGROUND_ANSI),
    };

    COLOR_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| Color::Ansi(offset + index as u8))
}

/// Parse a single color word.
///
/// Returns `None` when the word is not a color, so the caller can try it as
/// an attribute instead.
pub fn parse_color(word: &str) -> Option<Color> {
    if let Some(color) = parse_ansi_color(word) {
        return Some(color);
    }

    // The whole word must be numeric; "12px" or "bright7" are not colors.
    let value: i64 = word.parse().ok()?;
    match value {
        -1 => Some(Color::Normal),
        0..=7 => Some(Color::Ansi(FOREGROUND_ANSI + value as u8)),
        8..=15 => Some(Color::Ansi(FOREGROUND_BRIGHT_ANSI + (value - 8) as u8)),
        16..=255 => Some(Color::Indexed256(value as u8)),
        _ => None,
    }
}

fn strip_prefix_ignore_case<'a>(word: &'a str, prefix: &str) -> Option<&'a str> {
    let head = word.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&word[prefix.len()..])
    } else {
        None
    }
}
