use super::*;
use emoji_core::Property;
use pretty_assertions::assert_eq;

const HEADER: &str = "\
//! Emoji property tables generated from `emoji-data.txt` (Unicode 16.0).
//!
//! Generated by `emoji_gen`. Do not edit by hand.

use super::{Range16, Range32, RangeTable};
";

#[test]
fn header_only() {
    assert_eq!(emit(&[], "16.0"), HEADER);
}

#[test]
fn both_tiers() {
    let table = BuiltTable {
        property: Property::EmojiComponent,
        r16: vec![(0x23, 0x23), (0x200D, 0x200D)],
        r32: vec![(0x1F1E6, 0x1F1FF), (0xE0020, 0xE007F)],
    };
    let expected = format!(
        "{HEADER}
/// `Emoji_Component` property.
pub static EMOJI_COMPONENT: RangeTable = RangeTable {{
    r16: &[
        Range16::new(0x0023, 0x0023),
        Range16::new(0x200D, 0x200D),
    ],
    r32: &[
        Range32::new(0x1F1E6, 0x1F1FF),
        Range32::new(0xE0020, 0xE007F),
    ],
}};
"
    );
    assert_eq!(emit(&[table], "16.0"), expected);
}

#[test]
fn empty_tiers() {
    let table = BuiltTable {
        property: Property::EmojiModifier,
        r16: Vec::new(),
        r32: vec![(0x1F3FB, 0x1F3FF)],
    };
    let expected = format!(
        "{HEADER}
/// `Emoji_Modifier` property.
pub static EMOJI_MODIFIER: RangeTable = RangeTable {{
    r16: &[],
    r32: &[
        Range32::new(0x1F3FB, 0x1F3FF),
    ],
}};
"
    );
    assert_eq!(emit(&[table], "16.0"), expected);

    let table = BuiltTable {
        property: Property::Emoji,
        r16: vec![(0x30, 0x39)],
        r32: Vec::new(),
    };
    assert!(emit(&[table], "16.0").contains("    ],\n    r32: &[],\n};\n"));
}

#[test]
fn tables_are_separated_by_blank_lines() {
    let tables: Vec<BuiltTable> = Property::GENERATED
        .into_iter()
        .map(|property| BuiltTable {
            property,
            r16: Vec::new(),
            r32: Vec::new(),
        })
        .collect();
    let out = emit(&tables, "16.0");
    assert_eq!(out.matches("\n\n/// `").count(), Property::GENERATED.len());
    assert!(out.ends_with("};\n"));
}
