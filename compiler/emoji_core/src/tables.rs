//! Codepoint classification tables for the emoji properties.
//!
//! Each property is a [`RangeTable`]: sorted, disjoint, inclusive ranges
//! split into a 16-bit tier and a 32-bit tier. The six properties defined
//! by `emoji-data.txt` live in the generated module; the two structural
//! sets (regional indicators and tags) are fixed blocks defined here.
//!
//! # Lookup
//!
//! Codepoints up to U+00FF and tiers with at most `LINEAR_MAX` ranges are
//! scanned linearly, stopping at the first range that starts past the
//! codepoint. Everything else is a binary search over range ends.

use std::fmt;

mod generated;

pub use generated::{
    EMOJI, EMOJI_COMPONENT, EMOJI_MODIFIER, EMOJI_MODIFIER_BASE, EMOJI_PRESENTATION,
    EXTENDED_PICTOGRAPHIC,
};

/// Tiers with at most this many ranges are scanned linearly.
const LINEAR_MAX: usize = 18;

/// Highest Latin-1 codepoint.
const MAX_LATIN1: u16 = 0x00FF;

/// Inclusive range of codepoints that fit in 16 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range16 {
    pub lo: u16,
    pub hi: u16,
}

impl Range16 {
    pub const fn new(lo: u16, hi: u16) -> Self {
        Self { lo, hi }
    }
}

/// Inclusive range of codepoints above U+FFFF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range32 {
    pub lo: u32,
    pub hi: u32,
}

impl Range32 {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }
}

/// Set of codepoints stored as sorted, non-overlapping inclusive ranges.
///
/// # Invariant
///
/// Within each tier, every range has `lo <= hi` and each range starts
/// strictly after the previous one ends. See [`RangeTable::is_well_formed`].
#[derive(Debug)]
pub struct RangeTable {
    pub r16: &'static [Range16],
    pub r32: &'static [Range32],
}

impl RangeTable {
    /// Returns `true` if `ch` belongs to this table.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.contains_u32(u32::from(ch))
    }

    /// Returns `true` if the codepoint `cp` belongs to this table.
    ///
    /// Values that are not Unicode scalar values are simply absent.
    pub fn contains_u32(&self, cp: u32) -> bool {
        match u16::try_from(cp) {
            Ok(cp) => contains16(self.r16, cp),
            Err(_) => contains32(self.r32, cp),
        }
    }

    /// All ranges as `(lo, hi)` pairs, 16-bit tier first.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let r16 = self
            .r16
            .iter()
            .map(|r| (u32::from(r.lo), u32::from(r.hi)));
        let r32 = self.r32.iter().map(|r| (r.lo, r.hi));
        r16.chain(r32)
    }

    /// Checks the table invariant on both tiers independently.
    ///
    /// Also rejects 32-bit ranges that would belong in the 16-bit tier.
    pub fn is_well_formed(&self) -> bool {
        let r16 = self
            .r16
            .iter()
            .map(|r| (u32::from(r.lo), u32::from(r.hi)));
        let r32 = self.r32.iter().map(|r| (r.lo, r.hi));
        tier_is_well_formed(r16)
            && tier_is_well_formed(r32)
            && self.r32.first().map_or(true, |r| r.lo > u32::from(u16::MAX))
    }
}

fn tier_is_well_formed(ranges: impl Iterator<Item = (u32, u32)>) -> bool {
    let mut prev_hi: Option<u32> = None;
    for (lo, hi) in ranges {
        if lo > hi || prev_hi.is_some_and(|prev| lo <= prev) {
            return false;
        }
        prev_hi = Some(hi);
    }
    true
}

fn contains16(ranges: &[Range16], cp: u16) -> bool {
    if ranges.len() <= LINEAR_MAX || cp <= MAX_LATIN1 {
        for range in ranges {
            if cp < range.lo {
                return false;
            }
            if cp <= range.hi {
                return true;
            }
        }
        return false;
    }
    let idx = ranges.partition_point(|range| range.hi < cp);
    ranges.get(idx).is_some_and(|range| range.lo <= cp)
}

fn contains32(ranges: &[Range32], cp: u32) -> bool {
    if ranges.len() <= LINEAR_MAX {
        for range in ranges {
            if cp < range.lo {
                return false;
            }
            if cp <= range.hi {
                return true;
            }
        }
        return false;
    }
    let idx = ranges.partition_point(|range| range.hi < cp);
    ranges.get(idx).is_some_and(|range| range.lo <= cp)
}

/// Regional indicator symbols U+1F1E6..U+1F1FF, paired to form flags.
pub static REGIONAL_INDICATOR: RangeTable = RangeTable {
    r16: &[],
    r32: &[Range32::new(0x1F1E6, 0x1F1FF)],
};

/// Tag characters U+E0030..U+E007E used in subdivision flag sequences.
///
/// The cancel tag U+E007F terminates a run and is not part of this set.
pub static TAG: RangeTable = RangeTable {
    r16: &[],
    r32: &[Range32::new(0xE0030, 0xE007E)],
};

/// Emoji-related codepoint property, one per [`RangeTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Emoji,
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    EmojiComponent,
    ExtendedPictographic,
    RegionalIndicator,
    Tag,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 8] = [
        Property::Emoji,
        Property::EmojiPresentation,
        Property::EmojiModifier,
        Property::EmojiModifierBase,
        Property::EmojiComponent,
        Property::ExtendedPictographic,
        Property::RegionalIndicator,
        Property::Tag,
    ];

    /// Properties whose tables are generated from `emoji-data.txt`.
    pub const GENERATED: [Property; 6] = [
        Property::Emoji,
        Property::EmojiPresentation,
        Property::EmojiModifier,
        Property::EmojiModifierBase,
        Property::EmojiComponent,
        Property::ExtendedPictographic,
    ];

    /// Property name as spelled in the Unicode data files.
    pub fn name(self) -> &'static str {
        match self {
            Property::Emoji => "Emoji",
            Property::EmojiPresentation => "Emoji_Presentation",
            Property::EmojiModifier => "Emoji_Modifier",
            Property::EmojiModifierBase => "Emoji_Modifier_Base",
            Property::EmojiComponent => "Emoji_Component",
            Property::ExtendedPictographic => "Extended_Pictographic",
            Property::RegionalIndicator => "Regional_Indicator",
            Property::Tag => "Tag",
        }
    }

    /// Name of the `static` holding this property's table.
    pub fn table_name(self) -> &'static str {
        match self {
            Property::Emoji => "EMOJI",
            Property::EmojiPresentation => "EMOJI_PRESENTATION",
            Property::EmojiModifier => "EMOJI_MODIFIER",
            Property::EmojiModifierBase => "EMOJI_MODIFIER_BASE",
            Property::EmojiComponent => "EMOJI_COMPONENT",
            Property::ExtendedPictographic => "EXTENDED_PICTOGRAPHIC",
            Property::RegionalIndicator => "REGIONAL_INDICATOR",
            Property::Tag => "TAG",
        }
    }

    /// Look up a property by its Unicode data file name.
    pub fn from_name(name: &str) -> Option<Property> {
        Property::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Returns `true` for properties defined by `emoji-data.txt`.
    pub fn is_generated(self) -> bool {
        !matches!(self, Property::RegionalIndicator | Property::Tag)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of tables the decoder classifies against.
///
/// Built once and only ever read afterwards. [`EmojiTables::unicode`] is
/// the shipped instance; [`EmojiTables::with_table`] derives a variant with
/// one table swapped out.
#[derive(Clone, Copy, Debug)]
pub struct EmojiTables {
    emoji: &'static RangeTable,
    emoji_presentation: &'static RangeTable,
    emoji_modifier: &'static RangeTable,
    emoji_modifier_base: &'static RangeTable,
    emoji_component: &'static RangeTable,
    extended_pictographic: &'static RangeTable,
    regional_indicator: &'static RangeTable,
    tag: &'static RangeTable,
}

static UNICODE: EmojiTables = EmojiTables {
    emoji: &EMOJI,
    emoji_presentation: &EMOJI_PRESENTATION,
    emoji_modifier: &EMOJI_MODIFIER,
    emoji_modifier_base: &EMOJI_MODIFIER_BASE,
    emoji_component: &EMOJI_COMPONENT,
    extended_pictographic: &EXTENDED_PICTOGRAPHIC,
    regional_indicator: &REGIONAL_INDICATOR,
    tag: &TAG,
};

impl EmojiTables {
    /// Tables built from the shipped Unicode emoji data.
    pub fn unicode() -> &'static EmojiTables {
        &UNICODE
    }

    /// Returns a copy of these tables with `property` backed by `table`.
    #[must_use]
    pub fn with_table(mut self, property: Property, table: &'static RangeTable) -> Self {
        *self.slot(property) = table;
        self
    }

    /// The table backing `property`.
    pub fn table(&self, property: Property) -> &'static RangeTable {
        match property {
            Property::Emoji => self.emoji,
            Property::EmojiPresentation => self.emoji_presentation,
            Property::EmojiModifier => self.emoji_modifier,
            Property::EmojiModifierBase => self.emoji_modifier_base,
            Property::EmojiComponent => self.emoji_component,
            Property::ExtendedPictographic => self.extended_pictographic,
            Property::RegionalIndicator => self.regional_indicator,
            Property::Tag => self.tag,
        }
    }

    /// Returns `true` if `ch` has `property`.
    #[inline]
    pub fn contains(&self, property: Property, ch: char) -> bool {
        self.table(property).contains(ch)
    }

    fn slot(&mut self, property: Property) -> &mut &'static RangeTable {
        match property {
            Property::Emoji => &mut self.emoji,
            Property::EmojiPresentation => &mut self.emoji_presentation,
            Property::EmojiModifier => &mut self.emoji_modifier,
            Property::EmojiModifierBase => &mut self.emoji_modifier_base,
            Property::EmojiComponent => &mut self.emoji_component,
            Property::ExtendedPictographic => &mut self.extended_pictographic,
            Property::RegionalIndicator => &mut self.regional_indicator,
            Property::Tag => &mut self.tag,
        }
    }
}

impl Default for EmojiTables {
    fn default() -> Self {
        UNICODE
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
