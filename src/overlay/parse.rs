//! Line parser for configure-branches files.
//!
//! Each physical line is trimmed of whitespace and byte order marks; blank
//! lines and lines starting with `#` are skipped. Everything else must have the shape `<component>:<branch>`, split
//! at the first colon only so branch names may carry further colons.

use crate::error::MergeError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One `key:value` entry from a configure-branches file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideLine<'a> {
    /// 1-indexed physical line number.
    pub line: usize,
    pub key: &'a str,
    pub value: &'a str,
    /// The trimmed source text of the line.
    pub raw: &'a str,
}

/// Parse a single physical line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<OverrideLine<'_>>, MergeError> {
    let raw = trim_line(text);
    if raw.is_empty() || raw.starts_with('#') {
        return Ok(None);
    }

    let malformed = || MergeError::MalformedLine {
        line,
        text: raw.to_string(),
    };

    let (key, value) = raw.split_once(':').ok_or_else(malformed)?;
    let (key, value) = (trim_line(key), trim_line(value));
    if key.is_empty() || value.is_empty() {
        return Err(malformed());
    }

    Ok(Some(OverrideLine {
        line,
        key,
        value,
        raw,
    }))
}

fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Iterate over the entries of a configure-branches document in source order.
pub fn parse_lines(text: &str) -> impl Iterator<Item = Result<OverrideLine<'_>, MergeError>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line).transpose())
}
