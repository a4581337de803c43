//! Cadence Allegro pin delay file
//!
//! ```text
//! PIN DELAY
//! REFDES<TAB><refdes>
//! DEVICE<TAB><package>
//!
//! <pin><TAB><delay><TAB><UNIT>
//! ```
//!
//! Allegro accepts either one UNITS header line or a unit on every row; the
//! unit goes on every row here.

use crate::error::PinDelayResult;
use crate::types::{PinDelayTable, Unit};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<package>.csv`
pub fn cadence_file_name(package: &str) -> String {
    format!("{}.csv", package)
}

/// Write the Cadence layout to `out`
pub fn write_cadence<W: Write>(
    out: &mut W,
    refdes: &str,
    package: &str,
    unit: Unit,
    table: &PinDelayTable,
) -> std::io::Result<()> {
    let unit = unit.as_str().to_uppercase();

    writeln!(out, "PIN DELAY")?;
    writeln!(out, "REFDES\t{}", refdes)?;
    writeln!(out, "DEVICE\t{}", package)?;
    writeln!(out)?;
    for (pin, delay) in table.iter() {
        writeln!(out, "{}\t{}\t{}", pin, delay, unit)?;
    }
    Ok(())
}

/// Create (or overwrite) `<dir>/<package>.csv`
pub fn render_cadence(
    dir: &Path,
    refdes: &str,
    package: &str,
    unit: Unit,
    table: &PinDelayTable,
) -> PinDelayResult<PathBuf> {
    let path = dir.join(cadence_file_name(package));
    debug!(path = %path.display(), pins = table.len(), "writing cadence pin delays");

    let mut out = BufWriter::new(File::create(&path)?);
    write_cadence(&mut out, refdes, package, unit, table)?;
    out.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn render_to_string(unit: Unit, table: &PinDelayTable) -> String {
        let mut buf = Vec::new();
        write_cadence(&mut buf, "U1", "test_package", unit, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cadence_file_name() {
        assert_eq!(cadence_file_name("BGA256"), "BGA256.csv");
    }

    #[test]
    fn test_write_cadence_layout() {
        let table = PinDelayTable::from([("A1", "10"), ("A2", "12")]);
        assert_eq!(
            render_to_string(Unit::Mil, &table),
            "PIN DELAY\nREFDES\tU1\nDEVICE\ttest_package\n\nA1\t10\tMIL\nA2\t12\tMIL\n"
        );
    }

    #[test]
    fn test_write_cadence_unit_upper_cased() {
        let table = PinDelayTable::from([("A1", "0.1")]);
        assert!(render_to_string(Unit::Ns, &table).ends_with("A1\t0.1\tNS\n"));
        assert!(render_to_string(Unit::Ps, &table).ends_with("A1\t0.1\tPS\n"));
    }

    #[test]
    fn test_write_cadence_empty_table() {
        assert_eq!(
            render_to_string(Unit::Ns, &PinDelayTable::new()),
            "PIN DELAY\nREFDES\tU1\nDEVICE\ttest_package\n\n"
        );
    }

    #[test]
    fn test_render_cadence_writes_package_csv() {
        let temp_dir = TempDir::new().unwrap();
        let table = PinDelayTable::from([("A1", "10"), ("A2", "12")]);

        let path = render_cadence(temp_dir.path(), "U1", "test_package", Unit::Mil, &table).unwrap();

        assert_eq!(path, temp_dir.path().join("test_package.csv"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PIN DELAY\nREFDES\tU1\nDEVICE\ttest_package\n\nA1\t10\tMIL\nA2\t12\tMIL\n"
        );
    }

    #[test]
    fn test_render_cadence_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pkg.csv"), "stale content that is longer\n").unwrap();

        let table = PinDelayTable::from([("A1", "10")]);
        let path = render_cadence(temp_dir.path(), "U7", "pkg", Unit::Ns, &table).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "PIN DELAY\nREFDES\tU7\nDEVICE\tpkg\n\nA1\t10\tNS\n"
        );
    }

    #[test]
    fn test_render_cadence_missing_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let result = render_cadence(&missing, "U1", "pkg", Unit::Ns, &PinDelayTable::new());
        assert!(matches!(result, Err(crate::error::PinDelayError::Io(_))));
    }
}
