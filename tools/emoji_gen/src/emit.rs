//! Renders built tables as the `emoji_core` tables module.

use std::fmt;

use crate::builder::BuiltTable;

/// Rust source for the generated tables module.
pub fn emit(tables: &[BuiltTable], unicode_version: &str) -> String {
    TablesModule {
        tables,
        unicode_version,
    }
    .to_string()
}

struct TablesModule<'a> {
    tables: &'a [BuiltTable],
    unicode_version: &'a str,
}

impl fmt::Display for TablesModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "//! Emoji property tables generated from `emoji-data.txt` (Unicode {}).",
            self.unicode_version
        )?;
        writeln!(f, "//!")?;
        writeln!(f, "//! Generated by `emoji_gen`. Do not edit by hand.")?;
        writeln!(f)?;
        writeln!(f, "use super::{{Range16, Range32, RangeTable}};")?;
        for table in self.tables {
            writeln!(f)?;
            write_table(f, table)?;
        }
        Ok(())
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &BuiltTable) -> fmt::Result {
    writeln!(f, "/// `{}` property.", table.property.name())?;
    writeln!(
        f,
        "pub static {}: RangeTable = RangeTable {{",
        table.property.table_name()
    )?;

    if table.r16.is_empty() {
        writeln!(f, "    r16: &[],")?;
    } else {
        writeln!(f, "    r16: &[")?;
        for &(lo, hi) in &table.r16 {
            writeln!(f, "        Range16::new(0x{lo:04X}, 0x{hi:04X}),")?;
        }
        writeln!(f, "    ],")?;
    }

    if table.r32.is_empty() {
        writeln!(f, "    r32: &[],")?;
    } else {
        writeln!(f, "    r32: &[")?;
        for &(lo, hi) in &table.r32 {
            writeln!(f, "        Range32::new(0x{lo:05X}, 0x{hi:05X}),")?;
        }
        writeln!(f, "    ],")?;
    }

    writeln!(f, "}};")
}

#[cfg(test)]
mod tests;
