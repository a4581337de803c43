//! Mentor Constraint Manager pin package file
//!
//! ```text
//! UNITS <token>
//! PART_NUMBER <part number>
//! <pin> <value>
//! ```

use crate::error::PinDelayResult;
use crate::types::{PinDelayTable, Unit};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MENTOR_LENGTHS_FILE: &str = "PinPkgLengths.txt";
pub const MENTOR_DELAYS_FILE: &str = "PinPkgDelays.txt";

/// Lengths go to `PinPkgLengths.txt`, delays to `PinPkgDelays.txt`
pub fn mentor_file_name(unit: Unit) -> &'static str {
    if unit.is_length() {
        MENTOR_LENGTHS_FILE
    } else {
        MENTOR_DELAYS_FILE
    }
}

/// Mentor spells mils as `th`
pub fn mentor_unit_token(unit: Unit) -> &'static str {
    match unit {
        Unit::Mil => "th",
        other => other.as_str(),
    }
}

/// Write the Mentor layout to `out`
pub fn write_mentor<W: Write>(
    out: &mut W,
    part_number: &str,
    unit: Unit,
    table: &PinDelayTable,
) -> std::io::Result<()> {
    writeln!(out, "UNITS {}", mentor_unit_token(unit))?;
    writeln!(out, "PART_NUMBER {}", part_number)?;
    for (pin, delay) in table.iter() {
        writeln!(out, "{} {}", pin, delay)?;
    }
    Ok(())
}

/// Create (or overwrite) the Mentor file for `unit` inside `dir`
pub fn render_mentor(
    dir: &Path,
    part_number: &str,
    unit: Unit,
    table: &PinDelayTable,
) -> PinDelayResult<PathBuf> {
    let path = dir.join(mentor_file_name(unit));
    debug!(path = %path.display(), pins = table.len(), "writing mentor pin delays");

    let mut out = BufWriter::new(File::create(&path)?);
    write_mentor(&mut out, part_number, unit, table)?;
    out.flush()?;

    Ok(path)
}
