//! Generator errors.

use std::io;
use std::path::{Path, PathBuf};

use emoji_core::Property;
use thiserror::Error;

/// Anything that stops table generation.
///
/// Parse errors carry the 1-based line number in `emoji-data.txt`.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `<codepoints> ; <property>`")]
    MissingSeparator { line: usize },

    #[error("line {line}: invalid codepoint `{text}`")]
    InvalidCodepoint { line: usize, text: String },

    #[error("line {line}: range {lo:04X}..{hi:04X} ends before it starts")]
    InvertedRange { line: usize, lo: u32, hi: u32 },

    #[error("line {line}: {cp:X} is beyond U+10FFFF")]
    OutOfRange { line: usize, cp: u32 },

    #[error("line {line}: unknown property `{name}`")]
    UnknownProperty { line: usize, name: String },

    #[error("no ranges for property `{0}`")]
    MissingProperty(Property),

    #[error("{0}")]
    Usage(String),
}

impl GenError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        GenError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Line in the input that caused the error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            GenError::MissingSeparator { line }
            | GenError::InvalidCodepoint { line, .. }
            | GenError::InvertedRange { line, .. }
            | GenError::OutOfRange { line, .. }
            | GenError::UnknownProperty { line, .. } => Some(*line),
            GenError::Io { .. } | GenError::MissingProperty(_) | GenError::Usage(_) => None,
        }
    }
}
