//! Color specifications for terminal output.
//!
//! Compiles human-readable specs such as `"brightred black bold"` into SGR
//! escape sequences:
//! - token: color words (`red`, `brightblue`, `-1`..`255`)
//! - attr: attribute words (`bold`, `noul`, `-italic`) and the bitmask they fill
//! - spec: word routing, fg/bg assignment and rendering

pub mod attr;
pub mod spec;
pub mod token;

pub use attr::{parse_attribute, AttributeSet};
pub use spec::{color_parse, ColorSpec, WordOutcome, COLOR_MAXLEN};
pub use token::{parse_color, Color};

/// Control Sequence Introducer that opens every rendered sequence.
pub const CSI: &str = "\x1b[";

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Make an escape sequence printable by spelling out the ESC byte.
///
/// `"\x1b[1;31m"` becomes the literal text `\x1b[1;31m`.
pub fn escape_sequence(sequence: &str) -> String {
    sequence.replace('\x1b', "\\x1b")
}
