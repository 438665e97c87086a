//! Emoji sequence boundary decoder.
//!
//! Recognizes the emoji-specific subset of the Unicode emoji sequence
//! grammar at the front of a buffer:
//!
//! ```text
//! possible_emoji     := flag_sequence | zwj_element (ZWJ zwj_element)*
//! flag_sequence      := RI RI
//! zwj_element        := Emoji emoji_modification?
//! emoji_modification := EMod | FE0F 20E3? | tag_run E007F
//! tag_run            := Tag+                      (only after U+1F3F4)
//! ```
//!
//! # Design
//!
//! The decoder is a finite-state machine driven by one codepoint of
//! lookahead. `Decoder::transition` maps `(state, lookahead class)` to the
//! next state and whether the lookahead is consumed. Every non-consuming
//! transition terminates, so a decode step is a single forward pass with no
//! backtracking.
//!
//! A step never fails. Malformed UTF-8, a lone regional indicator, an
//! unterminated tag run or a dangling joiner all produce a non-emoji unit
//! that still consumes at least one byte, so callers always make progress.

use crate::tables::{EmojiTables, Property};
use crate::utf8::{next_scalar, Scalar};

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const ENCLOSING_KEYCAP: char = '\u{20E3}';
const CANCEL_TAG: char = '\u{E007F}';
const WAVING_BLACK_FLAG: char = '\u{1F3F4}';

/// One decoded unit: an emoji sequence or a single fallback unit.
///
/// `grapheme` is a prefix of the decoded buffer; its length is the number
/// of bytes consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded<S> {
    pub grapheme: S,
    pub is_emoji: bool,
}

impl<S: AsRef<[u8]>> Decoded<S> {
    /// Bytes consumed by this unit.
    #[inline]
    pub fn len(&self) -> usize {
        self.grapheme.as_ref().len()
    }

    /// Returns `true` only for the unit decoded from an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split into `(grapheme, is_emoji, consumed_len)`.
    pub fn into_parts(self) -> (S, bool, usize) {
        let len = self.len();
        (self.grapheme, self.is_emoji, len)
    }
}

/// Classification of the lookahead codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    End,
    Malformed,
    RegionalIndicator(char),
    VariationSelector,
    Keycap,
    Joiner,
    Modifier(char),
    Tag,
    CancelTag,
    Emoji(char),
    Other,
}

/// How far the current `zwj_element` has been modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Only the lead codepoint so far.
    Base,
    /// Lead followed by U+FE0F; a keycap may still follow.
    Variation,
    /// Modification complete; only a joiner may extend the sequence.
    Modified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InRegionalPair,
    InZwjChain { lead: char, stage: Stage },
    InTagRun,
    AfterJoiner,
    Terminated { is_emoji: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Transition {
    next: State,
    consume: bool,
}

impl Transition {
    fn advance(next: State) -> Self {
        Transition {
            next,
            consume: true,
        }
    }

    /// Consume the lookahead and stop.
    fn accept(is_emoji: bool) -> Self {
        Transition {
            next: State::Terminated { is_emoji },
            consume: true,
        }
    }

    /// Stop before the lookahead.
    fn stop(is_emoji: bool) -> Self {
        Transition {
            next: State::Terminated { is_emoji },
            consume: false,
        }
    }
}

/// Emoji sequence decoder bound to a set of classification tables.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'t> {
    tables: &'t EmojiTables,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Decoder::new(EmojiTables::unicode())
    }
}

impl<'t> Decoder<'t> {
    pub fn new(tables: &'t EmojiTables) -> Self {
        Decoder { tables }
    }

    /// The tables this decoder classifies against.
    pub fn tables(&self) -> &'t EmojiTables {
        self.tables
    }

    /// Decode the unit at the front of `buf`.
    ///
    /// Returns an empty non-emoji unit for empty input. Otherwise the unit
    /// is non-empty and `buf` equals the unit followed by the remainder.
    pub fn decode<'a>(&self, buf: &'a [u8]) -> Decoded<&'a [u8]> {
        let mut state = State::Start;
        let mut consumed = 0;
        loop {
            if let State::Terminated { is_emoji } = state {
                return Decoded {
                    grapheme: &buf[..consumed],
                    is_emoji,
                };
            }
            let lookahead = next_scalar(&buf[consumed..]);
            let Transition { next, consume } = self.transition(state, self.classify(lookahead));
            if consume {
                consumed += lookahead.map_or(0, |scalar| scalar.width);
            }
            state = next;
        }
    }

    /// Decode the unit at the front of `text`.
    pub fn decode_str<'a>(&self, text: &'a str) -> Decoded<&'a str> {
        let unit = self.decode(text.as_bytes());
        // Valid UTF-8 only ever splits on scalar boundaries.
        Decoded {
            grapheme: &text[..unit.len()],
            is_emoji: unit.is_emoji,
        }
    }

    /// Returns `true` if `buf` is exactly one emoji sequence.
    pub fn possible_glyph(&self, buf: &[u8]) -> bool {
        let unit = self.decode(buf);
        unit.is_emoji && unit.len() == buf.len()
    }

    /// Returns `true` if `text` is exactly one emoji sequence.
    pub fn possible_glyph_str(&self, text: &str) -> bool {
        self.possible_glyph(text.as_bytes())
    }

    fn classify(&self, lookahead: Option<Scalar>) -> Class {
        let Some(scalar) = lookahead else {
            return Class::End;
        };
        let Some(ch) = scalar.ch else {
            return Class::Malformed;
        };
        match ch {
            ZERO_WIDTH_JOINER => Class::Joiner,
            VARIATION_SELECTOR_16 => Class::VariationSelector,
            ENCLOSING_KEYCAP => Class::Keycap,
            CANCEL_TAG => Class::CancelTag,
            _ if self.tables.contains(Property::RegionalIndicator, ch) => {
                Class::RegionalIndicator(ch)
            }
            _ if self.tables.contains(Property::Tag, ch) => Class::Tag,
            _ if self.tables.contains(Property::EmojiModifier, ch) => Class::Modifier(ch),
            _ if self.tables.contains(Property::Emoji, ch) => Class::Emoji(ch),
            _ => Class::Other,
        }
    }

    /// Result at end of input for a sequence whose last element is `lead`
    /// with no modification: only pictographs stand alone as emoji.
    fn bare(&self, lead: char) -> bool {
        self.tables.contains(Property::ExtendedPictographic, lead)
    }

    fn transition(&self, state: State, class: Class) -> Transition {
        match (state, class) {
            // Nothing to decode.
            (State::Start, Class::End) => Transition::stop(false),
            (State::Start, Class::RegionalIndicator(_)) => {
                Transition::advance(State::InRegionalPair)
            }
            (State::Start, Class::Emoji(lead) | Class::Modifier(lead)) => {
                Transition::advance(State::InZwjChain {
                    lead,
                    stage: Stage::Base,
                })
            }
            // Ordinary text, malformed bytes and stray combinators.
            (State::Start, _) => Transition::accept(false),

            (State::InRegionalPair, Class::RegionalIndicator(_)) => Transition::accept(true),
            (State::InRegionalPair, _) => Transition::stop(false),

            (
                State::InZwjChain {
                    lead,
                    stage: Stage::Base,
                },
                Class::VariationSelector,
            ) => Transition::advance(State::InZwjChain {
                lead,
                stage: Stage::Variation,
            }),
            (
                State::InZwjChain {
                    lead,
                    stage: Stage::Base,
                },
                Class::Modifier(_),
            ) if self.tables.contains(Property::EmojiModifierBase, lead) => {
                Transition::advance(State::InZwjChain {
                    lead,
                    stage: Stage::Modified,
                })
            }
            (
                State::InZwjChain {
                    lead: WAVING_BLACK_FLAG,
                    stage: Stage::Base,
                },
                Class::Tag,
            ) => Transition::advance(State::InTagRun),
            (
                State::InZwjChain {
                    lead,
                    stage: Stage::Variation,
                },
                Class::Keycap,
            ) => Transition::advance(State::InZwjChain {
                lead,
                stage: Stage::Modified,
            }),
            (State::InZwjChain { .. }, Class::Joiner) => Transition::advance(State::AfterJoiner),
            (
                State::InZwjChain {
                    lead,
                    stage: Stage::Base,
                },
                Class::End,
            ) => Transition::stop(self.bare(lead)),
            (State::InZwjChain { .. }, _) => Transition::stop(true),

            (State::InTagRun, Class::Tag) => Transition::advance(State::InTagRun),
            (State::InTagRun, Class::CancelTag) => Transition::advance(State::InZwjChain {
                lead: WAVING_BLACK_FLAG,
                stage: Stage::Modified,
            }),
            // A tag run without its terminator is not an emoji. The
            // codepoint that broke the run goes with it.
            (State::InTagRun, Class::End) => Transition::stop(false),
            (State::InTagRun, _) => Transition::accept(false),

            (
                State::AfterJoiner,
                Class::Emoji(lead) | Class::Modifier(lead) | Class::RegionalIndicator(lead),
            ) => Transition::advance(State::InZwjChain {
                lead,
                stage: Stage::Base,
            }),
            // A joiner must be followed by another element; whatever
            // follows instead is swallowed into the non-emoji unit.
            (State::AfterJoiner, Class::End) => Transition::stop(false),
            (State::AfterJoiner, _) => Transition::accept(false),

            (State::Terminated { is_emoji }, _) => Transition::stop(is_emoji),
        }
    }
}

/// Decode the unit at the front of `buf` with the shipped tables.
pub fn decode(buf: &[u8]) -> Decoded<&[u8]> {
    Decoder::default().decode(buf)
}

/// Decode the unit at the front of `text` with the shipped tables.
pub fn decode_str(text: &str) -> Decoded<&str> {
    Decoder::default().decode_str(text)
}

/// Returns `true` if `buf` is exactly one emoji sequence.
pub fn possible_glyph(buf: &[u8]) -> bool {
    Decoder::default().possible_glyph(buf)
}

/// Returns `true` if `text` is exactly one emoji sequence.
pub fn possible_glyph_str(text: &str) -> bool {
    Decoder::default().possible_glyph_str(text)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
