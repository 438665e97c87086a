use super::*;

fn tables() -> &'static EmojiTables {
    EmojiTables::unicode()
}

// === Well-formedness ===

#[test]
fn shipped_tables_are_well_formed() {
    for property in Property::ALL {
        let table = tables().table(property);
        assert!(table.is_well_formed(), "{property} table is malformed");
        assert!(
            table.ranges().next().is_some(),
            "{property} table is empty"
        );
    }
}

#[test]
fn overlapping_ranges_are_rejected() {
    static OVERLAP: RangeTable = RangeTable {
        r16: &[Range16::new(0x10, 0x20), Range16::new(0x20, 0x30)],
        r32: &[],
    };
    assert!(!OVERLAP.is_well_formed());
}

#[test]
fn inverted_range_is_rejected() {
    static INVERTED: RangeTable = RangeTable {
        r16: &[],
        r32: &[Range32::new(0x1F600, 0x1F5FF)],
    };
    assert!(!INVERTED.is_well_formed());
}

#[test]
fn unsorted_ranges_are_rejected() {
    static UNSORTED: RangeTable = RangeTable {
        r16: &[Range16::new(0x40, 0x41), Range16::new(0x10, 0x11)],
        r32: &[],
    };
    assert!(!UNSORTED.is_well_formed());
}

#[test]
fn small_value_in_wide_tier_is_rejected() {
    static MISPLACED: RangeTable = RangeTable {
        r16: &[],
        r32: &[Range32::new(0x2600, 0x26FF)],
    };
    assert!(!MISPLACED.is_well_formed());
}

// === Structural tables ===

#[test]
fn regional_indicator_is_exactly_the_letter_block() {
    let ranges: Vec<_> = REGIONAL_INDICATOR.ranges().collect();
    assert_eq!(ranges, vec![(0x1F1E6, 0x1F1FF)]);
    for letter in 'a'..='z' {
        let offset = u32::from(letter) - u32::from('a');
        let ch = char::from_u32(0x1F1E6 + offset).expect("regional indicator is a scalar");
        assert!(REGIONAL_INDICATOR.contains(ch), "{ch:?} is not a regional indicator");
    }
    for ch in "abcxyz世界\nş123#. 😇🔁".chars() {
        assert!(!REGIONAL_INDICATOR.contains(ch), "{ch:?} counted as regional indicator");
    }
}

#[test]
fn tag_covers_digits_and_uppercase_letters() {
    for c in "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars() {
        let ch = char::from_u32(u32::from(c) + 0xE0000).expect("tag is a scalar");
        assert!(TAG.contains(ch), "{ch:?} is not a tag");
    }
    for ch in "abcxyz世界\nş123#. 😇🔁".chars() {
        assert!(!TAG.contains(ch), "{ch:?} counted as a tag");
    }
    assert!(!TAG.contains('\u{E007F}'), "cancel tag is a terminator, not a tag");
}

// === Emoji data ===

#[test]
fn plain_text_is_not_emoji() {
    for ch in ['r', ' ', '\n', '{', 'ç', 'ğ', 'ş'] {
        assert!(!tables().contains(Property::Emoji, ch), "{ch:?} counted as emoji");
    }
}

#[test]
fn digits_and_symbols_are_emoji_but_not_pictographic() {
    for ch in ['2', '#', '*', '🇦'] {
        assert!(tables().contains(Property::Emoji, ch), "{ch:?} not emoji");
        assert!(
            !tables().contains(Property::ExtendedPictographic, ch),
            "{ch:?} counted as pictographic"
        );
    }
}

#[test]
fn pictographs_are_emoji_and_pictographic() {
    let pictographs = [
        '😀', '😇', '😜', '😔', '🥶', '😨', '🤡', '😿', '💙', '✋', '🤏', '🫀', '🧑', '🧏', '🚵',
        '🐘', '🌸', '🥔', '🍗', '🥫', '🦑', '🪐', '🚄', '🛬', '🕛', '🌘', '🌪', '🧨', '🥇', '🎱',
        '👕', '🥿', '💄', '🔕', '🎸', '📟', '📸', '🗞', '📇', '🔑', '🏹', '🧰', '🧬', '🚪', '🚭',
        '⤵', '✡', '♊', '🔁', '📴', '⚧', '❓', '🔱', '❇', '🆎', '🆚', '🈸', '🔵', '🔺', '🏳',
    ];
    for ch in pictographs {
        assert!(tables().contains(Property::Emoji, ch), "{ch:?} not emoji");
        assert!(
            tables().contains(Property::ExtendedPictographic, ch),
            "{ch:?} not pictographic"
        );
    }
}

#[test]
fn skin_tones_are_modifiers_not_pictographs() {
    for ch in ['🏻', '🏼', '🏽', '🏾', '🏿'] {
        assert!(tables().contains(Property::EmojiModifier, ch));
        assert!(tables().contains(Property::EmojiComponent, ch));
        assert!(!tables().contains(Property::ExtendedPictographic, ch));
    }
    assert!(!tables().contains(Property::EmojiModifier, '👋'));
}

#[test]
fn modifier_bases() {
    for ch in ['👋', '🖖', '🦻', '👩', '🧝', '☝'] {
        assert!(tables().contains(Property::EmojiModifierBase, ch), "{ch:?}");
    }
    for ch in ['🥐', '⛰', '🏴', '😀'] {
        assert!(!tables().contains(Property::EmojiModifierBase, ch), "{ch:?}");
    }
}

#[test]
fn presentation_distinguishes_text_default_symbols() {
    assert!(tables().contains(Property::EmojiPresentation, '😀'));
    assert!(!tables().contains(Property::EmojiPresentation, '©'));
    assert!(!tables().contains(Property::EmojiPresentation, '⛰'));
}

#[test]
fn combinators_are_components_but_not_emoji() {
    for ch in ['\u{200D}', '\u{20E3}', '\u{FE0F}', '\u{E0067}', '\u{E007F}'] {
        assert!(tables().contains(Property::EmojiComponent, ch), "{ch:?}");
        assert!(!tables().contains(Property::Emoji, ch), "{ch:?}");
    }
}

// === Lookup strategies ===

#[test]
fn linear_and_binary_lookup_agree_with_ranges() {
    // EMOJI has more than LINEAR_MAX ranges in both tiers, so this
    // exercises the binary search path as well as the Latin-1 scan.
    assert!(EMOJI.r16.len() > LINEAR_MAX);
    assert!(EMOJI.r32.len() > LINEAR_MAX);
    for (lo, hi) in EMOJI.ranges() {
        assert!(EMOJI.contains_u32(lo), "{lo:X}");
        assert!(EMOJI.contains_u32(hi), "{hi:X}");
    }
    let mut prev_hi = None;
    for (lo, hi) in EMOJI.ranges() {
        if let Some(prev) = prev_hi {
            if lo > prev + 1 {
                assert!(!EMOJI.contains_u32(lo - 1), "gap before {lo:X}");
            }
        }
        prev_hi = Some(hi);
    }
}

#[test]
fn values_outside_unicode_are_absent() {
    assert!(!EMOJI.contains_u32(0x0011_0000));
    assert!(!EMOJI.contains_u32(u32::MAX));
}

// === Property ===

#[test]
fn property_names_round_trip() {
    for property in Property::ALL {
        assert_eq!(Property::from_name(property.name()), Some(property));
        assert_eq!(property.to_string(), property.name());
    }
    assert_eq!(Property::from_name("Emoji_Modifier_Base"), Some(Property::EmojiModifierBase));
    assert_eq!(Property::from_name("emoji"), None);
    assert_eq!(Property::from_name("Basic_Emoji"), None);
}

#[test]
fn generated_properties_exclude_structural_sets() {
    assert!(Property::GENERATED.iter().all(|p| p.is_generated()));
    assert!(!Property::RegionalIndicator.is_generated());
    assert!(!Property::Tag.is_generated());
}

#[test]
fn with_table_swaps_one_property() {
    static ONLY_R: RangeTable = RangeTable {
        r16: &[Range16::new(0x72, 0x72)],
        r32: &[],
    };
    let custom = EmojiTables::unicode().with_table(Property::Emoji, &ONLY_R);
    assert!(custom.contains(Property::Emoji, 'r'));
    assert!(!custom.contains(Property::Emoji, '😀'));
    assert!(custom.contains(Property::ExtendedPictographic, '😀'));
    assert!(!tables().contains(Property::Emoji, 'r'));
}
