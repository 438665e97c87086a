//! One-codepoint-at-a-time UTF-8 stepping.
//!
//! Malformed input is recovered the same way as
//! [`String::from_utf8_lossy`]: the maximal invalid prefix becomes a single
//! unit with no scalar value. A truncated sequence at the end of the buffer
//! is one such unit covering the remaining bytes.

/// Longest UTF-8 encoding of a scalar value.
const MAX_WIDTH: usize = 4;

/// The unit at the front of a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Scalar {
    /// Decoded scalar, or `None` for a malformed sequence.
    pub ch: Option<char>,
    /// Bytes covered by this unit. Never zero.
    pub width: usize,
}

/// Decode the unit at the front of `buf`, or `None` if `buf` is empty.
pub(crate) fn next_scalar(buf: &[u8]) -> Option<Scalar> {
    let head = &buf[..buf.len().min(MAX_WIDTH)];
    let chunk = head.utf8_chunks().next()?;
    match chunk.valid().chars().next() {
        Some(ch) => Some(Scalar {
            ch: Some(ch),
            width: ch.len_utf8(),
        }),
        None => Some(Scalar {
            ch: None,
            width: chunk.invalid().len(),
        }),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
