//! Text attribute parsing.
//!
//! Attribute words enable or disable a rendering trait. Enable and disable
//! codes are separate SGR parameters, so they are tracked as separate bits.

/// Canonical attribute name with its enable and disable SGR codes.
struct AttributeName {
    name: &'static str,
    on: u8,
    off: u8,
}

const ATTRIBUTES: [AttributeName; 7] = [
    AttributeName { name: "bold", on: 1, off: 22 },
    AttributeName { name: "dim", on: 2, off: 22 },
    AttributeName { name: "italic", on: 3, off: 23 },
    AttributeName { name: "ul", on: 4, off: 24 },
    AttributeName { name: "blink", on: 5, off: 25 },
    AttributeName { name: "reverse", on: 7, off: 27 },
    AttributeName { name: "strike", on: 9, off: 29 },
];

/// Parse an attribute word into its SGR code.
///
/// `bold` gives the enable code (1). `nobold`, `no-bold` and `-bold` give the
/// disable code (22). Matching is case-sensitive. Returns `None` for words that
/// are not attributes.
pub fn parse_attribute(word: &str) -> Option<u8> {
    let (name, negate) = match word.strip_prefix("no") {
        Some(rest) => (rest.strip_prefix('-').unwrap_or(rest), true),
        None => match word.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (word, false),
        },
    };

    ATTRIBUTES
        .iter()
        .find(|attr| attr.name == name)
        .map(|attr| if negate { attr.off } else { attr.on })
}

/// Set of SGR attribute codes.
///
/// Bit `n` set means code `n` is emitted, so iteration order is the
/// rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeSet(u32);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an SGR code. Codes that do not fit the mask are refused.
    pub fn insert(&mut self, code: u8) -> bool {
        match 1u32.checked_shl(u32::from(code)) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, code: u8) -> bool {
        1u32.checked_shl(u32::from(code))
            .is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..u32::BITS as u8).filter(move |&code| self.contains(code))
    }
}
