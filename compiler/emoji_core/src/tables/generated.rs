//! Emoji property tables generated from `emoji-data.txt` (Unicode 17.0).
//!
//! Generated by `emoji_gen`. Do not edit by hand.

use super::{Range16, Range32, RangeTable};

/// `Emoji` property.
pub static EMOJI: RangeTable = RangeTable {
    r16: &[
        Range16::new(0x0023, 0x0023),
        Range16::new(0x002A, 0x002A),
        Range16::new(0x0030, 0x0039),
        Range16::new(0x00A9, 0x00A9),
        Range16::new(0x00AE, 0x00AE),
        Range16::new(0x203C, 0x203C),
        Range16::new(0x2049, 0x2049),
        Range16::new(0x2122, 0x2122),
        Range16::new(0x2139, 0x2139),
        Range16::new(0x2194, 0x2199),
        Range16::new(0x21A9, 0x21AA),
        Range16::new(0x231A, 0x231B),
        Range16::new(0x2328, 0x2328),
        Range16::new(0x23CF, 0x23CF),
        Range16::new(0x23E9, 0x23F3),
        Range16::new(0x23F8, 0x23FA),
        Range16::new(0x24C2, 0x24C2),
        Range16::new(0x25AA, 0x25AB),
        Range16::new(0x25B6, 0x25B6),
        Range16::new(0x25C0, 0x25C0),
        Range16::new(0x25FB, 0x25FE),
        Range16::new(0x2600, 0x2604),
        Range16::new(0x260E, 0x260E),
        Range16::new(0x2611, 0x2611),
        Range16::new(0x2614, 0x2615),
        Range16::new(0x2618, 0x2618),
        Range16::new(0x261D, 0x261D),
        Range16::new(0x2620, 0x2620),
        Range16::new(0x2622, 0x2623),
        Range16::new(0x2626, 0x2626),
        Range16::new(0x262A, 0x262A),
        Range16::new(0x262E, 0x262F),
        Range16::new(0x2638, 0x263A),
        Range16::new(0x2640, 0x2640),
        Range16::new(0x2642, 0x2642),
        Range16::new(0x2648, 0x2653),
        Range16::new(0x265F, 0x2660),
        Range16::new(0x2663, 0x2663),
        Range16::new(0x2665, 0x2666),
        Range16::new(0x2668, 0x2668),
        Range16::new(0x267B, 0x267B),
        Range16::new(0x267E, 0x267F),
        Range16::new(0x2692, 0x2697),
        Range16::new(0x2699, 0x2699),
        Range16::new(0x269B, 0x269C),
        Range16::new(0x26A0, 0x26A1),
        Range16::new(0x26A7, 0x26A7),
        Range16::new(0x26AA, 0x26AB),
        Range16::new(0x26B0, 0x26B1),
        Range16::new(0x26BD, 0x26BE),
        Range16::new(0x26C4, 0x26C5),
        Range16::new(0x26C8, 0x26C8),
        Range16::new(0x26CE, 0x26CF),
        Range16::new(0x26D1, 0x26D1),
        Range16::new(0x26D3, 0x26D4),
        Range16::new(0x26E9, 0x26EA),
        Range16::new(0x26F0, 0x26F5),
        Range16::new(0x26F7, 0x26FA),
        Range16::new(0x26FD, 0x26FD),
        Range16::new(0x2702, 0x2702),
        Range16::new(0x2705, 0x2705),
        Range16::new(0x2708, 0x270D),
        Range16::new(0x270F, 0x270F),
        Range16::new(0x2712, 0x2712),
        Range16::new(0x2714, 0x2714),
        Range16::new(0x2716, 0x2716),
        Range16::new(0x271D, 0x271D),
        Range16::new(0x2721, 0x2721),
        Range16::new(0x2728, 0x2728),
        Range16::new(0x2733, 0x2734),
        Range16::new(0x2744, 0x2744),
        Range16::new(0x2747, 0x2747),
        Range16::new(0x274C, 0x274C),
        Range16::new(0x274E, 0x274E),
        Range16::new(0x2753, 0x2755),
        Range16::new(0x2757, 0x2757),
        Range16::new(0x2763, 0x2764),
        Range16::new(0x2795, 0x2797),
        Range16::new(0x27A1, 0x27A1),
        Range16::new(0x27B0, 0x27B0),
        Range16::new(0x27BF, 0x27BF),
        Range16::new(0x2934, 0x2935),
        Range16::new(0x2B05, 0x2B07),
        Range16::new(0x2B1B, 0x2B1C),
        Range16::new(0x2B50, 0x2B50),
        Range16::new(0x2B55, 0x2B55),
        Range16::new(0x3030, 0x3030),
        Range16::new(0x303D, 0x303D),
        Range16::new(0x3297, 0x3297),
        Range16::new(0x3299, 0x3299),
    ],
    r32: &[
        Range32::new(0x1F004, 0x1F004),
        Range32::new(0x1F0CF, 0x1F0CF),
        Range32::new(0x1F170, 0x1F171),
        Range32::new(0x1F17E, 0x1F17F),
        Range32::new(0x1F18E, 0x1F18E),
        Range32::new(0x1F191, 0x1F19A),
        Range32::new(0x1F1E6, 0x1F1FF),
        Range32::new(0x1F201, 0x1F202),
        Range32::new(0x1F21A, 0x1F21A),
        Range32::new(0x1F22F, 0x1F22F),
        Range32::new(0x1F232, 0x1F23A),
        Range32::new(0x1F250, 0x1F251),
        Range32::new(0x1F300, 0x1F321),
        Range32::new(0x1F324, 0x1F393),
        Range32::new(0x1F396, 0x1F397),
        Range32::new(0x1F399, 0x1F39B),
        Range32::new(0x1F39E, 0x1F3F0),
        Range32::new(0x1F3F3, 0x1F3F5),
        Range32::new(0x1F3F7, 0x1F4FD),
        Range32::new(0x1F4FF, 0x1F53D),
        Range32::new(0x1F549, 0x1F54E),
        Range32::new(0x1F550, 0x1F567),
        Range32::new(0x1F56F, 0x1F570),
        Range32::new(0x1F573, 0x1F57A),
        Range32::new(0x1F587, 0x1F587),
        Range32::new(0x1F58A, 0x1F58D),
        Range32::new(0x1F590, 0x1F590),
        Range32::new(0x1F595, 0x1F596),
        Range32::new(0x1F5A4, 0x1F5A5),
        Range32::new(0x1F5A8, 0x1F5A8),
        Range32::new(0x1F5B1, 0x1F5B2),
        Range32::new(0x1F5BC, 0x1F5BC),
        Range32::new(0x1F5C2, 0x1F5C4),
        Range32::new(0x1F5D1, 0x1F5D3),
        Range32::new(0x1F5DC, 0x1F5DE),
        Range32::new(0x1F5E1, 0x1F5E1),
        Range32::new(0x1F5E3, 0x1F5E3),
        Range32::new(0x1F5E8, 0x1F5E8),
        Range32::new(0x1F5EF, 0x1F5EF),
        Range32::new(0x1F5F3, 0x1F5F3),
        Range32::new(0x1F5FA, 0x1F64F),
        Range32::new(0x1F680, 0x1F6C5),
        Range32::new(0x1F6CB, 0x1F6D2),
        Range32::new(0x1F6D5, 0x1F6D8),
        Range32::new(0x1F6DC, 0x1F6E5),
        Range32::new(0x1F6E9, 0x1F6E9),
        Range32::new(0x1F6EB, 0x1F6EC),
        Range32::new(0x1F6F0, 0x1F6F0),
        Range32::new(0x1F6F3, 0x1F6FC),
        Range32::new(0x1F7E0, 0x1F7EB),
        Range32::new(0x1F7F0, 0x1F7F0),
        Range32::new(0x1F90C, 0x1F93A),
        Range32::new(0x1F93C, 0x1F945),
        Range32::new(0x1F947, 0x1F9FF),
        Range32::new(0x1FA70, 0x1FA7C),
        Range32::new(0x1FA80, 0x1FA8A),
        Range32::new(0x1FA8E, 0x1FAC6),
        Range32::new(0x1FAC8, 0x1FAC8),
        Range32::new(0x1FACD, 0x1FADC),
        Range32::new(0x1FADF, 0x1FAEA),
        Range32::new(0x1FAEF, 0x1FAF8),
    ],
};

/// `Emoji_Presentation` property.
pub static EMOJI_PRESENTATION: RangeTable = RangeTable {
    r16: &[
        Range16::new(0x231A, 0x231B),
        Range16::new(0x23E9, 0x23EC),
        Range16::new(0x23F0, 0x23F0),
        Range16::new(0x23F3, 0x23F3),
        Range16::new(0x25FD, 0x25FE),
        Range16::new(0x2614, 0x2615),
        Range16::new(0x2648, 0x2653),
        Range16::new(0x267F, 0x267F),
        Range16::new(0x2693, 0x2693),
        Range16::new(0x26A1, 0x26A1),
        Range16::new(0x26AA, 0x26AB),
        Range16::new(0x26BD, 0x26BE),
        Range16::new(0x26C4, 0x26C5),
        Range16::new(0x26CE, 0x26CE),
        Range16::new(0x26D4, 0x26D4),
        Range16::new(0x26EA, 0x26EA),
        Range16::new(0x26F2, 0x26F3),
        Range16::new(0x26F5, 0x26F5),
        Range16::new(0x26FA, 0x26FA),
        Range16::new(0x26FD, 0x26FD),
        Range16::new(0x2705, 0x2705),
        Range16::new(0x270A, 0x270B),
        Range16::new(0x2728, 0x2728),
        Range16::new(0x274C, 0x274C),
        Range16::new(0x274E, 0x274E),
        Range16::new(0x2753, 0x2755),
        Range16::new(0x2757, 0x2757),
        Range16::new(0x2795, 0x2797),
        Range16::new(0x27B0, 0x27B0),
        Range16::new(0x27BF, 0x27BF),
        Range16::new(0x2B1B, 0x2B1C),
        Range16::new(0x2B50, 0x2B50),
        Range16::new(0x2B55, 0x2B55),
    ],
    r32: &[
        Range32::new(0x1F004, 0x1F004),
        Range32::new(0x1F0CF, 0x1F0CF),
        Range32::new(0x1F18E, 0x1F18E),
        Range32::new(0x1F191, 0x1F19A),
        Range32::new(0x1F1E6, 0x1F1FF),
        Range32::new(0x1F201, 0x1F201),
        Range32::new(0x1F21A, 0x1F21A),
        Range32::new(0x1F22F, 0x1F22F),
        Range32::new(0x1F232, 0x1F236),
        Range32::new(0x1F238, 0x1F23A),
        Range32::new(0x1F250, 0x1F251),
        Range32::new(0x1F300, 0x1F320),
        Range32::new(0x1F32D, 0x1F335),
        Range32::new(0x1F337, 0x1F37C),
        Range32::new(0x1F37E, 0x1F393),
        Range32::new(0x1F3A0, 0x1F3CA),
        Range32::new(0x1F3CF, 0x1F3D3),
        Range32::new(0x1F3E0, 0x1F3F0),
        Range32::new(0x1F3F4, 0x1F3F4),
        Range32::new(0x1F3F8, 0x1F43E),
        Range32::new(0x1F440, 0x1F440),
        Range32::new(0x1F442, 0x1F4FC),
        Range32::new(0x1F4FF, 0x1F53D),
        Range32::new(0x1F54B, 0x1F54E),
        Range32::new(0x1F550, 0x1F567),
        Range32::new(0x1F57A, 0x1F57A),
        Range32::new(0x1F595, 0x1F596),
        Range32::new(0x1F5A4, 0x1F5A4),
        Range32::new(0x1F5FB, 0x1F64F),
        Range32::new(0x1F680, 0x1F6C5),
        Range32::new(0x1F6CC, 0x1F6CC),
        Range32::new(0x1F6D0, 0x1F6D2),
        Range32::new(0x1F6D5, 0x1F6D8),
        Range32::new(0x1F6DC, 0x1F6DF),
        Range32::new(0x1F6EB, 0x1F6EC),
        Range32::new(0x1F6F4, 0x1F6FC),
        Range32::new(0x1F7E0, 0x1F7EB),
        Range32::new(0x1F7F0, 0x1F7F0),
        Range32::new(0x1F90C, 0x1F93A),
        Range32::new(0x1F93C, 0x1F945),
        Range32::new(0x1F947, 0x1F9FF),
        Range32::new(0x1FA70, 0x1FA7C),
        Range32::new(0x1FA80, 0x1FA8A),
        Range32::new(0x1FA8E, 0x1FAC6),
        Range32::new(0x1FAC8, 0x1FAC8),
        Range32::new(0x1FACD, 0x1FADC),
        Range32::new(0x1FADF, 0x1FAEA),
        Range32::new(0x1FAEF, 0x1FAF8),
    ],
};

/// `Emoji_Modifier` property.
pub static EMOJI_MODIFIER: RangeTable = RangeTable {
    r16: &[],
    r32: &[
        Range32::new(0x1F3FB, 0x1F3FF),
    ],
};

/// `Emoji_Modifier_Base` property.
pub static EMOJI_MODIFIER_BASE: RangeTable = RangeTable {
    r16: &[
        Range16::new(0x261D, 0x261D),
        Range16::new(0x26F9, 0x26F9),
        Range16::new(0x270A, 0x270D),
    ],
    r32: &[
        Range32::new(0x1F385, 0x1F385),
        Range32::new(0x1F3C2, 0x1F3C4),
        Range32::new(0x1F3C7, 0x1F3C7),
        Range32::new(0x1F3CA, 0x1F3CC),
        Range32::new(0x1F442, 0x1F443),
        Range32::new(0x1F446, 0x1F450),
        Range32::new(0x1F466, 0x1F478),
        Range32::new(0x1F47C, 0x1F47C),
        Range32::new(0x1F481, 0x1F483),
        Range32::new(0x1F485, 0x1F487),
        Range32::new(0x1F48F, 0x1F48F),
        Range32::new(0x1F491, 0x1F491),
        Range32::new(0x1F4AA, 0x1F4AA),
        Range32::new(0x1F574, 0x1F575),
        Range32::new(0x1F57A, 0x1F57A),
        Range32::new(0x1F590, 0x1F590),
        Range32::new(0x1F595, 0x1F596),
        Range32::new(0x1F645, 0x1F647),
        Range32::new(0x1F64B, 0x1F64F),
        Range32::new(0x1F6A3, 0x1F6A3),
        Range32::new(0x1F6B4, 0x1F6B6),
        Range32::new(0x1F6C0, 0x1F6C0),
        Range32::new(0x1F6CC, 0x1F6CC),
        Range32::new(0x1F90C, 0x1F90C),
        Range32::new(0x1F90F, 0x1F90F),
        Range32::new(0x1F918, 0x1F91F),
        Range32::new(0x1F926, 0x1F926),
        Range32::new(0x1F930, 0x1F939),
        Range32::new(0x1F93C, 0x1F93E),
        Range32::new(0x1F977, 0x1F977),
        Range32::new(0x1F9B5, 0x1F9B6),
        Range32::new(0x1F9B8, 0x1F9B9),
        Range32::new(0x1F9BB, 0x1F9BB),
        Range32::new(0x1F9CD, 0x1F9CF),
        Range32::new(0x1F9D1, 0x1F9DD),
        Range32::new(0x1FAC3, 0x1FAC5),
        Range32::new(0x1FAF0, 0x1FAF8),
    ],
};

/// `Emoji_Component` property.
pub static EMOJI_COMPONENT: RangeTable = RangeTable {
    r16: &[
        Range16::new(0x0023, 0x0023),
        Range16::new(0x002A, 0x002A),
        Range16::new(0x0030, 0x0039),
        Range16::new(0x200D, 0x200D),
        Range16::new(0x20E3, 0x20E3),
        Range16::new(0xFE0F, 0xFE0F),
    ],
    r32: &[
        Range32::new(0x1F1E6, 0x1F1FF),
        Range32::new(0x1F3FB, 0x1F3FF),
        Range32::new(0x1F9B0, 0x1F9B3),
        Range32::new(0xE0020, 0xE007F),
    ],
};

/// `Extended_Pictographic` property.
pub static EXTENDED_PICTOGRAPHIC: RangeTable = RangeTable {
    r16: &[
        Range16::new(0x00A9, 0x00A9),
        Range16::new(0x00AE, 0x00AE),
        Range16::new(0x203C, 0x203C),
        Range16::new(0x2049, 0x2049),
        Range16::new(0x2122, 0x2122),
        Range16::new(0x2139, 0x2139),
        Range16::new(0x2194, 0x2199),
        Range16::new(0x21A9, 0x21AA),
        Range16::new(0x231A, 0x231B),
        Range16::new(0x2328, 0x2328),
        Range16::new(0x23CF, 0x23CF),
        Range16::new(0x23E9, 0x23F3),
        Range16::new(0x23F8, 0x23FA),
        Range16::new(0x24C2, 0x24C2),
        Range16::new(0x25AA, 0x25AB),
        Range16::new(0x25B6, 0x25B6),
        Range16::new(0x25C0, 0x25C0),
        Range16::new(0x25FB, 0x25FE),
        Range16::new(0x2600, 0x2604),
        Range16::new(0x260E, 0x260E),
        Range16::new(0x2611, 0x2611),
        Range16::new(0x2614, 0x2615),
        Range16::new(0x2618, 0x2618),
        Range16::new(0x261D, 0x261D),
        Range16::new(0x2620, 0x2620),
        Range16::new(0x2622, 0x2623),
        Range16::new(0x2626, 0x2626),
        Range16::new(0x262A, 0x262A),
        Range16::new(0x262E, 0x262F),
        Range16::new(0x2638, 0x263A),
        Range16::new(0x2640, 0x2640),
        Range16::new(0x2642, 0x2642),
        Range16::new(0x2648, 0x2653),
        Range16::new(0x265F, 0x2660),
        Range16::new(0x2663, 0x2663),
        Range16::new(0x2665, 0x2666),
        Range16::new(0x2668, 0x2668),
        Range16::new(0x267B, 0x267B),
        Range16::new(0x267E, 0x267F),
        Range16::new(0x2692, 0x2697),
        Range16::new(0x2699, 0x2699),
        Range16::new(0x269B, 0x269C),
        Range16::new(0x26A0, 0x26A1),
        Range16::new(0x26A7, 0x26A7),
        Range16::new(0x26AA, 0x26AB),
        Range16::new(0x26B0, 0x26B1),
        Range16::new(0x26BD, 0x26BE),
        Range16::new(0x26C4, 0x26C5),
        Range16::new(0x26C8, 0x26C8),
        Range16::new(0x26CE, 0x26CF),
        Range16::new(0x26D1, 0x26D1),
        Range16::new(0x26D3, 0x26D4),
        Range16::new(0x26E9, 0x26EA),
        Range16::new(0x26F0, 0x26F5),
        Range16::new(0x26F7, 0x26FA),
        Range16::new(0x26FD, 0x26FD),
        Range16::new(0x2702, 0x2702),
        Range16::new(0x2705, 0x2705),
        Range16::new(0x2708, 0x270D),
        Range16::new(0x270F, 0x270F),
        Range16::new(0x2712, 0x2712),
        Range16::new(0x2714, 0x2714),
        Range16::new(0x2716, 0x2716),
        Range16::new(0x271D, 0x271D),
        Range16::new(0x2721, 0x2721),
        Range16::new(0x2728, 0x2728),
        Range16::new(0x2733, 0x2734),
        Range16::new(0x2744, 0x2744),
        Range16::new(0x2747, 0x2747),
        Range16::new(0x274C, 0x274C),
        Range16::new(0x274E, 0x274E),
        Range16::new(0x2753, 0x2755),
        Range16::new(0x2757, 0x2757),
        Range16::new(0x2763, 0x2764),
        Range16::new(0x2795, 0x2797),
        Range16::new(0x27A1, 0x27A1),
        Range16::new(0x27B0, 0x27B0),
        Range16::new(0x27BF, 0x27BF),
        Range16::new(0x2934, 0x2935),
        Range16::new(0x2B05, 0x2B07),
        Range16::new(0x2B1B, 0x2B1C),
        Range16::new(0x2B50, 0x2B50),
        Range16::new(0x2B55, 0x2B55),
        Range16::new(0x3030, 0x3030),
        Range16::new(0x303D, 0x303D),
        Range16::new(0x3297, 0x3297),
        Range16::new(0x3299, 0x3299),
    ],
    r32: &[
        Range32::new(0x1F004, 0x1F004),
        Range32::new(0x1F02C, 0x1F02F),
        Range32::new(0x1F094, 0x1F09F),
        Range32::new(0x1F0AF, 0x1F0B0),
        Range32::new(0x1F0C0, 0x1F0C0),
        Range32::new(0x1F0CF, 0x1F0D0),
        Range32::new(0x1F0F6, 0x1F0FF),
        Range32::new(0x1F170, 0x1F171),
        Range32::new(0x1F17E, 0x1F17F),
        Range32::new(0x1F18E, 0x1F18E),
        Range32::new(0x1F191, 0x1F19A),
        Range32::new(0x1F1AE, 0x1F1E5),
        Range32::new(0x1F201, 0x1F20F),
        Range32::new(0x1F21A, 0x1F21A),
        Range32::new(0x1F22F, 0x1F22F),
        Range32::new(0x1F232, 0x1F23A),
        Range32::new(0x1F23C, 0x1F23F),
        Range32::new(0x1F249, 0x1F25F),
        Range32::new(0x1F266, 0x1F321),
        Range32::new(0x1F324, 0x1F393),
        Range32::new(0x1F396, 0x1F397),
        Range32::new(0x1F399, 0x1F39B),
        Range32::new(0x1F39E, 0x1F3F0),
        Range32::new(0x1F3F3, 0x1F3F5),
        Range32::new(0x1F3F7, 0x1F3FA),
        Range32::new(0x1F400, 0x1F4FD),
        Range32::new(0x1F4FF, 0x1F53D),
        Range32::new(0x1F549, 0x1F54E),
        Range32::new(0x1F550, 0x1F567),
        Range32::new(0x1F56F, 0x1F570),
        Range32::new(0x1F573, 0x1F57A),
        Range32::new(0x1F587, 0x1F587),
        Range32::new(0x1F58A, 0x1F58D),
        Range32::new(0x1F590, 0x1F590),
        Range32::new(0x1F595, 0x1F596),
        Range32::new(0x1F5A4, 0x1F5A5),
        Range32::new(0x1F5A8, 0x1F5A8),
        Range32::new(0x1F5B1, 0x1F5B2),
        Range32::new(0x1F5BC, 0x1F5BC),
        Range32::new(0x1F5C2, 0x1F5C4),
        Range32::new(0x1F5D1, 0x1F5D3),
        Range32::new(0x1F5DC, 0x1F5DE),
        Range32::new(0x1F5E1, 0x1F5E1),
        Range32::new(0x1F5E3, 0x1F5E3),
        Range32::new(0x1F5E8, 0x1F5E8),
        Range32::new(0x1F5EF, 0x1F5EF),
        Range32::new(0x1F5F3, 0x1F5F3),
        Range32::new(0x1F5FA, 0x1F64F),
        Range32::new(0x1F680, 0x1F6C5),
        Range32::new(0x1F6CB, 0x1F6D2),
        Range32::new(0x1F6D5, 0x1F6E5),
        Range32::new(0x1F6E9, 0x1F6E9),
        Range32::new(0x1F6EB, 0x1F6F0),
        Range32::new(0x1F6F3, 0x1F6FF),
        Range32::new(0x1F7DA, 0x1F7FF),
        Range32::new(0x1F80C, 0x1F80F),
        Range32::new(0x1F848, 0x1F84F),
        Range32::new(0x1F85A, 0x1F85F),
        Range32::new(0x1F888, 0x1F88F),
        Range32::new(0x1F8AE, 0x1F8AF),
        Range32::new(0x1F8BC, 0x1F8BF),
        Range32::new(0x1F8C2, 0x1F8CF),
        Range32::new(0x1F8D9, 0x1F8FF),
        Range32::new(0x1F90C, 0x1F93A),
        Range32::new(0x1F93C, 0x1F945),
        Range32::new(0x1F947, 0x1F9FF),
        Range32::new(0x1FA58, 0x1FA5F),
        Range32::new(0x1FA6E, 0x1FAFF),
        Range32::new(0x1FC00, 0x1FFFD),
    ],
};
