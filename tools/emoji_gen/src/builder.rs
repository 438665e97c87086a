//! Collects parsed ranges into per-property tables.
//!
//! `emoji-data.txt` lists ranges grouped by property but not merged: a
//! property can be split over many adjacent lines. The builder sorts and
//! coalesces them, then splits each table into the 16-bit and 32-bit tiers
//! that `RangeTable` stores.

use std::collections::BTreeMap;

use emoji_core::Property;

use crate::parse::Entry;
use crate::GenError;

/// One finished table, ready to emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltTable {
    pub property: Property,
    /// Sorted, disjoint, non-adjacent ranges below U+10000.
    pub r16: Vec<(u16, u16)>,
    /// Sorted, disjoint, non-adjacent ranges from U+10000 up.
    pub r32: Vec<(u32, u32)>,
}

impl BuiltTable {
    /// Number of codepoints in the table.
    pub fn codepoints(&self) -> u32 {
        let r16: u32 = self.r16.iter().map(|&(lo, hi)| u32::from(hi - lo) + 1).sum();
        let r32: u32 = self.r32.iter().map(|&(lo, hi)| hi - lo + 1).sum();
        r16 + r32
    }
}

#[derive(Debug, Default)]
pub struct TableBuilder {
    ranges: BTreeMap<Property, Vec<(u32, u32)>>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.ranges
            .entry(entry.property)
            .or_default()
            .push((entry.lo, entry.hi));
    }

    /// Build one table per `emoji-data.txt` property, in
    /// [`Property::GENERATED`] order.
    pub fn build(mut self) -> Result<Vec<BuiltTable>, GenError> {
        let mut tables = Vec::with_capacity(Property::GENERATED.len());
        for property in Property::GENERATED {
            let Some(ranges) = self.ranges.remove(&property) else {
                return Err(GenError::MissingProperty(property));
            };
            let table = split_tiers(property, &coalesce(ranges));
            tracing::debug!(
                %property,
                r16 = table.r16.len(),
                r32 = table.r32.len(),
                codepoints = table.codepoints(),
                "built table"
            );
            tables.push(table);
        }
        Ok(tables)
    }
}

impl Extend<Entry> for TableBuilder {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, entries: I) {
        for entry in entries {
            self.push(entry);
        }
    }
}

/// Sort and merge overlapping or touching ranges.
fn coalesce(mut ranges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn split_tiers(property: Property, ranges: &[(u32, u32)]) -> BuiltTable {
    let mut table = BuiltTable {
        property,
        r16: Vec::new(),
        r32: Vec::new(),
    };
    for &(lo, hi) in ranges {
        match (u16::try_from(lo), u16::try_from(hi)) {
            (Ok(lo), Ok(hi)) => table.r16.push((lo, hi)),
            (Ok(lo), Err(_)) => {
                table.r16.push((lo, u16::MAX));
                table.r32.push((0x1_0000, hi));
            }
            _ => table.r32.push((lo, hi)),
        }
    }
    table
}

#[cfg(test)]
mod tests;
