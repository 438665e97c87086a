//! Emoji property tables and emoji sequence boundary decoding.
//!
//! Standalone: the only dependency is the `tracing` facade.
//!
//! # Layers
//!
//! - [`tables`]: immutable codepoint sets per emoji property, bundled in an
//!   [`EmojiTables`] configuration object.
//! - [`Decoder`]: finds the emoji sequence (or single fallback unit) at the
//!   front of a buffer.
//! - [`find`] / [`replace`]: walk a whole buffer with the decoder.
//!
//! All offsets and lengths are UTF-8 byte counts. Byte-slice entry points
//! accept arbitrary bytes; malformed sequences come back as non-emoji
//! units, never as errors.
//!
//! ```
//! use emoji_core::{decode_str, find_str};
//!
//! let unit = decode_str("👋🏼 hello");
//! assert_eq!(unit.grapheme, "👋🏼");
//! assert!(unit.is_emoji);
//!
//! assert_eq!(find_str("a 🇧🇳 b 😀", None), vec!["🇧🇳", "😀"]);
//! ```

mod decoder;
mod scan;
pub mod tables;
mod utf8;

pub use decoder::{decode, decode_str, possible_glyph, possible_glyph_str, Decoded, Decoder};
pub use scan::{find, find_str, replace, replace_str, StrUnits, Transform, Unit, Units};
pub use tables::{EmojiTables, Property, RangeTable};
