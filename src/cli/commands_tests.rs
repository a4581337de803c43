use super::*;
use crate::config::ColumnOverrides;
use crate::types::{OutputKind, Unit};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Write a one-sheet workbook; `""` cells are left blank
fn write_workbook(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if !text.is_empty() {
                worksheet.write_string(r as u32, c as u16, *text).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

fn settings(dir: &Path, output_kind: OutputKind, unit: Unit) -> Settings {
    Settings {
        render: RenderConfig {
            output_kind,
            unit,
            refdes: "U1".to_string(),
            package: "test_package".to_string(),
            part_number: "test_partnumber".to_string(),
            output_dir: dir.to_path_buf(),
        },
        columns: ColumnOverrides::default(),
    }
}

fn pins_sheet(dir: &Path) -> PathBuf {
    let path = dir.join("pins.xlsx");
    write_workbook(&path, &[&["Pin Name", "Delay"], &["A1", "10"], &["A2", "12"]]);
    path
}

// =========================================================================
// convert_file Tests
// =========================================================================

#[test]
fn test_convert_file_cadence() {
    let temp_dir = TempDir::new().unwrap();
    let input = pins_sheet(temp_dir.path());

    let report = convert_file(&input, &settings(temp_dir.path(), OutputKind::Cadence, Unit::Mil))
        .unwrap();

    assert_eq!(report.pins, 2);
    assert_eq!(report.written, vec![temp_dir.path().join("test_package.csv")]);
    assert_eq!(
        fs::read_to_string(&report.written[0]).unwrap(),
        "PIN DELAY\nREFDES\tU1\nDEVICE\ttest_package\n\nA1\t10\tMIL\nA2\t12\tMIL\n"
    );
    assert!(!temp_dir.path().join("PinPkgLengths.txt").exists());
}

#[test]
fn test_convert_file_both() {
    let temp_dir = TempDir::new().unwrap();
    let input = pins_sheet(temp_dir.path());

    let report =
        convert_file(&input, &settings(temp_dir.path(), OutputKind::Both, Unit::Ps)).unwrap();

    assert_eq!(
        report.written,
        vec![
            temp_dir.path().join("test_package.csv"),
            temp_dir.path().join("PinPkgDelays.txt"),
        ]
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("PinPkgDelays.txt")).unwrap(),
        "UNITS ps\nPART_NUMBER test_partnumber\nA1 10\nA2 12\n"
    );
}

#[test]
fn test_convert_file_missing_value_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.xlsx");
    write_workbook(&input, &[&["Pin Name", "Delay"], &["A1", "10"], &["A2", ""]]);

    let result = convert_file(&input, &settings(temp_dir.path(), OutputKind::Both, Unit::Ns));

    assert!(matches!(result, Err(PinDelayError::MissingValue { row: 3, .. })));
    assert!(!temp_dir.path().join("test_package.csv").exists());
    assert!(!temp_dir.path().join("PinPkgDelays.txt").exists());
}

#[test]
fn test_convert_file_column_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("no_headers.xlsx");
    write_workbook(&input, &[&["Ball", "Net", "ps"], &["B3", "DQ0", "41"]]);

    let mut settings = settings(temp_dir.path(), OutputKind::Mentor, Unit::Ps);
    assert!(matches!(
        convert_file(&input, &settings),
        Err(PinDelayError::MissingColumn { .. })
    ));

    settings.columns = ColumnOverrides {
        pin_column: Some(1),
        delay_column: Some(3),
    };
    let report = convert_file(&input, &settings).unwrap();
    assert_eq!(report.pins, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("PinPkgDelays.txt")).unwrap(),
        "UNITS ps\nPART_NUMBER test_partnumber\nB3 41\n"
    );
}

// =========================================================================
// render_selected Tests
// =========================================================================

#[test]
fn test_render_selected_mentor_runs_after_cadence_failure() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = settings(temp_dir.path(), OutputKind::Both, Unit::Mil).render;
    // Cadence file lands in a directory that does not exist
    config.package = "missing_dir/pkg".to_string();

    let table = PinDelayTable::from([("A1", "10")]);
    let result = render_selected(&table, &config);

    assert!(matches!(result, Err(PinDelayError::Io(_))));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("PinPkgLengths.txt")).unwrap(),
        "UNITS th\nPART_NUMBER test_partnumber\nA1 10\n"
    );
}

// =========================================================================
// convert Tests
// =========================================================================

#[test]
fn test_convert_creates_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let input = pins_sheet(temp_dir.path());
    let out_dir = temp_dir.path().join("out").join("constraints");

    let reports = convert(&[input], &settings(&out_dir, OutputKind::Cadence, Unit::Ns)).unwrap();

    assert_eq!(reports.len(), 1);
    assert!(out_dir.join("test_package.csv").exists());
}

#[test]
fn test_convert_stops_at_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let good = pins_sheet(temp_dir.path());
    let bad = temp_dir.path().join("bad.xlsx");
    write_workbook(&bad, &[&["Pin", "Delay"], &["A1", "10"]]);
    let never = temp_dir.path().join("never.xlsx");
    write_workbook(&never, &[&["Pin Name", "Delay"], &["Z9", "99"]]);

    let out_dir = temp_dir.path().join("out");
    let result = convert(
        &[good, bad, never],
        &settings(&out_dir, OutputKind::Mentor, Unit::Ns),
    );

    assert!(matches!(result, Err(PinDelayError::MissingColumn { .. })));
    // First file's output is left in place
    assert_eq!(
        fs::read_to_string(out_dir.join("PinPkgDelays.txt")).unwrap(),
        "UNITS ns\nPART_NUMBER test_partnumber\nA1 10\nA2 12\n"
    );
}

#[test]
fn test_convert_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = pins_sheet(temp_dir.path());
    let settings = settings(temp_dir.path(), OutputKind::Both, Unit::Mil);

    convert(std::slice::from_ref(&input), &settings).unwrap();
    let cadence = fs::read(temp_dir.path().join("test_package.csv")).unwrap();
    let mentor = fs::read(temp_dir.path().join("PinPkgLengths.txt")).unwrap();

    convert(&[input], &settings).unwrap();
    assert_eq!(fs::read(temp_dir.path().join("test_package.csv")).unwrap(), cadence);
    assert_eq!(fs::read(temp_dir.path().join("PinPkgLengths.txt")).unwrap(), mentor);
}

#[test]
fn test_convert_unreadable_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("not_a_workbook.xlsx");
    fs::write(&input, "Pin Name,Delay\nA1,10\n").unwrap();

    let result = convert(&[input], &settings(temp_dir.path(), OutputKind::Cadence, Unit::Ns));
    assert!(matches!(result, Err(PinDelayError::Workbook { .. })));
}
