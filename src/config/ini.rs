//! Minimal INI tokenizer.
//!
//! Walks the text line by line and hands every `key = value` pair to a
//! callback together with the section it appeared in. Supported syntax:
//! - `[section]` headers (names trimmed)
//! - `key = value` or `key : value`, first separator wins
//! - full-line comments starting with `;` or `#`
//! - inline comments: `;` preceded by whitespace
//!
//! Bad lines are recorded and skipped; they never stop the walk.

/// Counts gathered while tokenizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSummary {
    /// Pairs handed to the callback
    pub pairs: usize,
    /// Pairs the callback did not recognize
    pub unrecognized: usize,
    /// 1-based numbers of lines that could not be tokenized
    pub malformed_lines: Vec<usize>,
}

/// Tokenize `text`, calling `on_pair(section, key, value)` for every pair.
///
/// The callback returns `true` when it recognized the pair. Pairs before the
/// first header belong to the section `""`.
pub fn parse<F>(text: &str, mut on_pair: F) -> IniSummary
where
    F: FnMut(&str, &str, &str) -> bool,
{
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut summary = IniSummary::default();
    let mut section = String::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            match header.find(']') {
                Some(end) => section = header[..end].trim().to_string(),
                None => summary.malformed_lines.push(index + 1),
            }
            continue;
        }

        match split_pair(line) {
            Some((key, value)) => {
                summary.pairs += 1;
                if !on_pair(&section, key, value) {
                    summary.unrecognized += 1;
                }
            }
            None => summary.malformed_lines.push(index + 1),
        }
    }

    summary
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let sep = line.find(|c| c == '=' || c == ':')?;
    let key = line[..sep].trim();
    if key.is_empty() {
        return None;
    }
    let value = strip_inline_comment(line[sep + 1..].trim());
    Some((key, value))
}

fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for i in 1..bytes.len() {
        if bytes[i] == b';' && bytes[i - 1].is_ascii_whitespace() {
            return value[..i].trim_end();
        }
    }
    value
}
