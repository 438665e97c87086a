//! Scanning utilities built on repeated decoder steps.
//!
//! [`Units`] walks a buffer unit by unit; [`Decoder::find`] and
//! [`Decoder::replace`] collect or substitute the emoji units. Every unit
//! is visited exactly once and the walk advances by the unit's length,
//! so the concatenation of all units is the original buffer.

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::decoder::Decoder;

/// Replacement for one emoji sequence.
///
/// Implemented for every `Fn(&T) -> T::Owned`, so closures work directly:
///
/// ```
/// let out = emoji_core::replace_str("hi 👋🏼", None, |g: &str| format!("[{}]", g.len()));
/// assert_eq!(out, "hi [8]");
/// ```
pub trait Transform<T: ?Sized + ToOwned> {
    fn transform(&self, grapheme: &T) -> T::Owned;
}

impl<T, F> Transform<T> for F
where
    T: ?Sized + ToOwned,
    F: Fn(&T) -> T::Owned,
{
    fn transform(&self, grapheme: &T) -> T::Owned {
        self(grapheme)
    }
}

/// A decoded unit and its byte offset in the scanned buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unit<S> {
    pub start: usize,
    pub grapheme: S,
    pub is_emoji: bool,
}

/// Iterator over the units of a byte buffer.
#[derive(Clone, Debug)]
pub struct Units<'a, 't> {
    decoder: Decoder<'t>,
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Units<'a, '_> {
    type Item = Unit<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let start = self.pos;
        let unit = self.decoder.decode(&self.buf[start..]);
        self.pos += unit.len();
        Some(Unit {
            start,
            grapheme: unit.grapheme,
            is_emoji: unit.is_emoji,
        })
    }
}

impl FusedIterator for Units<'_, '_> {}

/// Iterator over the units of a string.
#[derive(Clone, Debug)]
pub struct StrUnits<'a, 't> {
    inner: Units<'a, 't>,
    text: &'a str,
}

impl<'a> Iterator for StrUnits<'a, '_> {
    type Item = Unit<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.inner.next()?;
        let end = unit.start + unit.grapheme.len();
        Some(Unit {
            start: unit.start,
            grapheme: &self.text[unit.start..end],
            is_emoji: unit.is_emoji,
        })
    }
}

impl FusedIterator for StrUnits<'_, '_> {}

impl<'t> Decoder<'t> {
    /// Units of `buf`, left to right.
    pub fn units<'a>(&self, buf: &'a [u8]) -> Units<'a, 't> {
        Units {
            decoder: *self,
            buf,
            pos: 0,
        }
    }

    /// Units of `text`, left to right.
    pub fn units_str<'a>(&self, text: &'a str) -> StrUnits<'a, 't> {
        StrUnits {
            inner: self.units(text.as_bytes()),
            text,
        }
    }

    /// The first `max` emoji sequences in `text`, or all of them for `None`.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), max = ?max))]
    pub fn find<'a>(&self, text: &'a [u8], max: Option<usize>) -> Vec<&'a [u8]> {
        self.units(text)
            .filter(|unit| unit.is_emoji)
            .map(|unit| unit.grapheme)
            .take(max.unwrap_or(usize::MAX))
            .collect()
    }

    /// The first `max` emoji sequences in `text`, or all of them for `None`.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), max = ?max))]
    pub fn find_str<'a>(&self, text: &'a str, max: Option<usize>) -> Vec<&'a str> {
        self.units_str(text)
            .filter(|unit| unit.is_emoji)
            .map(|unit| unit.grapheme)
            .take(max.unwrap_or(usize::MAX))
            .collect()
    }

    /// Replace the first `max` emoji sequences in `text` (all for `None`).
    ///
    /// Borrows `text` unchanged when nothing would be replaced.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), max = ?max))]
    pub fn replace<'a>(
        &self,
        text: &'a [u8],
        max: Option<usize>,
        transform: impl Transform<[u8]>,
    ) -> Cow<'a, [u8]> {
        let limit = max.unwrap_or(usize::MAX);
        if !self.has_emoji(text, limit) {
            return Cow::Borrowed(text);
        }
        let mut out = Vec::with_capacity(text.len());
        let mut replaced = 0;
        for unit in self.units(text) {
            if replaced == limit {
                out.extend_from_slice(&text[unit.start..]);
                break;
            }
            if unit.is_emoji {
                out.extend_from_slice(&transform.transform(unit.grapheme));
                replaced += 1;
            } else {
                out.extend_from_slice(unit.grapheme);
            }
        }
        Cow::Owned(out)
    }

    /// Replace the first `max` emoji sequences in `text` (all for `None`).
    ///
    /// Borrows `text` unchanged when nothing would be replaced.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), max = ?max))]
    pub fn replace_str<'a>(
        &self,
        text: &'a str,
        max: Option<usize>,
        transform: impl Transform<str>,
    ) -> Cow<'a, str> {
        let limit = max.unwrap_or(usize::MAX);
        if !self.has_emoji(text.as_bytes(), limit) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut replaced = 0;
        for unit in self.units_str(text) {
            if replaced == limit {
                out.push_str(&text[unit.start..]);
                break;
            }
            if unit.is_emoji {
                out.push_str(&transform.transform(unit.grapheme));
                replaced += 1;
            } else {
                out.push_str(unit.grapheme);
            }
        }
        Cow::Owned(out)
    }

    /// Bounded pre-scan: stops at the first emoji.
    fn has_emoji(&self, text: &[u8], limit: usize) -> bool {
        let found = limit > 0 && self.units(text).any(|unit| unit.is_emoji);
        if !found {
            tracing::trace!("no emoji to replace, returning input unchanged");
        }
        found
    }
}

/// The first `max` emoji sequences in `text` with the shipped tables.
pub fn find(text: &[u8], max: Option<usize>) -> Vec<&[u8]> {
    Decoder::default().find(text, max)
}

/// The first `max` emoji sequences in `text` with the shipped tables.
pub fn find_str(text: &str, max: Option<usize>) -> Vec<&str> {
    Decoder::default().find_str(text, max)
}

/// Replace the first `max` emoji sequences in `text` with the shipped tables.
pub fn replace(text: &[u8], max: Option<usize>, transform: impl Transform<[u8]>) -> Cow<'_, [u8]> {
    Decoder::default().replace(text, max, transform)
}

/// Replace the first `max` emoji sequences in `text` with the shipped tables.
pub fn replace_str(text: &str, max: Option<usize>, transform: impl Transform<str>) -> Cow<'_, str> {
    Decoder::default().replace_str(text, max, transform)
}
