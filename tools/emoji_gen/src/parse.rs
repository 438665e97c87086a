//! Line parser for `emoji-data.txt`.
//!
//! Data lines look like
//!
//! ```text
//! 1F600..1F64F  ; Emoji_Presentation   # E1.0  [80] (😀..🙏) grinning face..
//! 00A9          ; Extended_Pictographic# E0.6   [1] (©️)   copyright
//! ```
//!
//! Everything after `#` is a comment. Blank and comment-only lines are
//! skipped.

use emoji_core::Property;

use crate::GenError;

/// Largest Unicode scalar value.
const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// One data line: an inclusive codepoint range with a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub lo: u32,
    pub hi: u32,
    pub property: Property,
}

/// Parse a single line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for lines without data.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Entry>, GenError> {
    let data = line.split_once('#').map_or(line, |(data, _)| data).trim();
    if data.is_empty() {
        return Ok(None);
    }
    let Some((codepoints, name)) = data.split_once(';') else {
        return Err(GenError::MissingSeparator { line: line_no });
    };

    let (lo, hi) = match codepoints.trim().split_once("..") {
        Some((lo, hi)) => (parse_codepoint(line_no, lo)?, parse_codepoint(line_no, hi)?),
        None => {
            let cp = parse_codepoint(line_no, codepoints)?;
            (cp, cp)
        }
    };
    if lo > hi {
        return Err(GenError::InvertedRange { line: line_no, lo, hi });
    }

    let name = name.trim();
    let Some(property) = Property::from_name(name).filter(|p| p.is_generated()) else {
        return Err(GenError::UnknownProperty {
            line: line_no,
            name: name.to_owned(),
        });
    };

    Ok(Some(Entry { lo, hi, property }))
}

/// Parse a whole file.
#[tracing::instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn parse(data: &str) -> Result<Vec<Entry>, GenError> {
    let mut entries = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        if let Some(entry) = parse_line(idx + 1, line)? {
            entries.push(entry);
        }
    }
    tracing::trace!(entries = entries.len(), "parsed emoji data");
    Ok(entries)
}

fn parse_codepoint(line_no: usize, text: &str) -> Result<u32, GenError> {
    let text = text.trim();
    let invalid = || GenError::InvalidCodepoint {
        line: line_no,
        text: text.to_owned(),
    };
    // `from_str_radix` would also accept a leading `+`.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let cp = u32::from_str_radix(text, 16).map_err(|_| invalid())?;
    if cp > MAX_CODEPOINT {
        return Err(GenError::OutOfRange { line: line_no, cp });
    }
    Ok(cp)
}
