use super::*;
use pretty_assertions::assert_eq;

fn all_properties() -> TableBuilder {
    let mut builder = TableBuilder::new();
    builder.extend(Property::GENERATED.into_iter().map(|property| Entry {
        lo: 0x1F3FB,
        hi: 0x1F3FF,
        property,
    }));
    builder
}

fn built(builder: TableBuilder, property: Property) -> BuiltTable {
    let tables = builder.build().ok().unwrap_or_default();
    tables
        .into_iter()
        .find(|table| table.property == property)
        .unwrap_or_else(|| panic!("no {property} table"))
}

// === Coalescing ===

#[test]
fn coalesce_sorts() {
    assert_eq!(coalesce(vec![(30, 40), (1, 2)]), vec![(1, 2), (30, 40)]);
}

#[test]
fn coalesce_merges_adjacent() {
    assert_eq!(coalesce(vec![(1, 2), (3, 5), (6, 6)]), vec![(1, 6)]);
}

#[test]
fn coalesce_merges_overlapping_and_nested() {
    assert_eq!(coalesce(vec![(1, 10), (4, 6), (8, 12)]), vec![(1, 12)]);
}

#[test]
fn coalesce_keeps_gaps() {
    assert_eq!(coalesce(vec![(1, 2), (4, 5)]), vec![(1, 2), (4, 5)]);
}

#[test]
fn coalesce_at_top_of_range() {
    assert_eq!(
        coalesce(vec![(0x10_FFFF, 0x10_FFFF), (0x10_FFFE, 0x10_FFFF)]),
        vec![(0x10_FFFE, 0x10_FFFF)]
    );
}

// === Tiers ===

#[test]
fn split_below_and_above() {
    let table = split_tiers(Property::Emoji, &[(0x23, 0x23), (0x1F600, 0x1F64F)]);
    assert_eq!(table.r16, vec![(0x23, 0x23)]);
    assert_eq!(table.r32, vec![(0x1F600, 0x1F64F)]);
}

#[test]
fn split_range_crossing_the_tier_boundary() {
    let table = split_tiers(Property::Emoji, &[(0xFFF0, 0x1_0010)]);
    assert_eq!(table.r16, vec![(0xFFF0, 0xFFFF)]);
    assert_eq!(table.r32, vec![(0x1_0000, 0x1_0010)]);
    assert_eq!(table.codepoints(), 0x21);
}

#[test]
fn range_ending_at_ffff_stays_in_r16() {
    let table = split_tiers(Property::Emoji, &[(0xFFFE, 0xFFFF)]);
    assert_eq!(table.r16, vec![(0xFFFE, 0xFFFF)]);
    assert!(table.r32.is_empty());
}

// === Building ===

#[test]
fn build_orders_tables_like_generated_properties() {
    let order: Vec<Property> = all_properties()
        .build()
        .ok()
        .unwrap_or_default()
        .iter()
        .map(|table| table.property)
        .collect();
    assert_eq!(order, Property::GENERATED.to_vec());
}

#[test]
fn build_merges_split_lines() {
    let mut builder = all_properties();
    for (lo, hi) in [(0x231A, 0x231B), (0x2328, 0x2328), (0x2329, 0x232A), (0x1F3FA, 0x1F3FA)] {
        builder.push(Entry {
            lo,
            hi,
            property: Property::Emoji,
        });
    }
    let table = built(builder, Property::Emoji);
    assert_eq!(table.r16, vec![(0x231A, 0x231B), (0x2328, 0x232A)]);
    assert_eq!(table.r32, vec![(0x1F3FA, 0x1F3FF)]);
}

#[test]
fn build_requires_every_property() {
    let mut builder = TableBuilder::new();
    builder.push(Entry {
        lo: 0x23,
        hi: 0x23,
        property: Property::Emoji,
    });
    let err = builder.build().err();
    assert!(matches!(err, Some(GenError::MissingProperty(Property::EmojiPresentation))));
}

#[test]
fn codepoint_count() {
    let table = BuiltTable {
        property: Property::Emoji,
        r16: vec![(0x30, 0x39), (0xA9, 0xA9)],
        r32: vec![(0x1F3FB, 0x1F3FF)],
    };
    assert_eq!(table.codepoints(), 16);
}
