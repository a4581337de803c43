//! Pin delay extraction - spreadsheet → PinDelayTable

use crate::error::{PinDelayError, PinDelayResult};
use crate::types::PinDelayTable;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::path::Path;
use tracing::debug;

/// Header text of the pin column
pub const PIN_NAME_HEADER: &str = "Pin Name";
/// Header text of the delay column
pub const DELAY_HEADER: &str = "Delay";

/// Open a workbook (xlsx, xlsm, xls, xlsb, ods) and return its first sheet
pub fn load_active_sheet<P: AsRef<Path>>(path: P) -> PinDelayResult<Range<Data>> {
    let path = path.as_ref();
    let workbook_error = |message: String| PinDelayError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| workbook_error("workbook contains no sheets".to_string()))?
        .map_err(|e| workbook_error(e.to_string()))
}

/// Load the active sheet of `path` and extract its pin delays
pub fn extract_file<P: AsRef<Path>>(
    path: P,
    pin_column: Option<u32>,
    delay_column: Option<u32>,
) -> PinDelayResult<PinDelayTable> {
    let range = load_active_sheet(path)?;
    extract(&range, pin_column, delay_column)
}

/// Text of a cell as the engineer typed it. Empty cells become `""`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    }
}

/// Cells of physical row 1, from column A to the last used column.
///
/// Positions are absolute, so a sheet whose used range starts below row 1
/// has an all-empty header row.
pub fn header_row(range: &Range<Data>) -> Vec<Data> {
    let Some((_, last_col)) = range.end() else {
        return Vec::new();
    };
    (0..=last_col)
        .map(|col| range.get_value((0, col)).cloned().unwrap_or(Data::Empty))
        .collect()
}

/// 1-based index of the first header cell that reads exactly `header`
pub fn find_column(header: &str, header_row: &[Data]) -> Option<u32> {
    header_row
        .iter()
        .position(|cell| cell_text(cell) == header)
        .map(|idx| idx as u32 + 1)
}

/// Read every data row of `range` into a pin → delay table.
///
/// Column overrides are 1-based and skip the header lookup. The first row
/// with an empty pin or delay aborts the whole sheet.
pub fn extract(
    range: &Range<Data>,
    pin_column: Option<u32>,
    delay_column: Option<u32>,
) -> PinDelayResult<PinDelayTable> {
    let header = header_row(range);
    let pin_col = resolve_column(PIN_NAME_HEADER, pin_column, &header)?;
    let delay_col = resolve_column(DELAY_HEADER, delay_column, &header)?;
    debug!(pin_col, delay_col, "resolved pin delay columns");

    let mut table = PinDelayTable::new();
    let Some((last_row, _)) = range.end() else {
        return Ok(table);
    };

    for row in 1..=last_row {
        let pin = text_at(range, row, pin_col);
        let delay = text_at(range, row, delay_col);

        if pin.is_empty() || delay.is_empty() {
            return Err(PinDelayError::MissingValue {
                row: row + 1,
                pin,
                delay,
            });
        }

        if let Some(previous) = table.insert(pin.clone(), delay) {
            debug!(row = row + 1, %pin, %previous, "pin listed twice, later delay wins");
        }
    }

    debug!(pins = table.len(), "extracted pin delays");
    Ok(table)
}

fn resolve_column(header: &str, column: Option<u32>, header_row: &[Data]) -> PinDelayResult<u32> {
    column
        .or_else(|| find_column(header, header_row))
        .filter(|&col| col > 0)
        .ok_or_else(|| PinDelayError::MissingColumn {
            header: header.to_string(),
        })
}

/// Cell text at 0-based `row` and 1-based `column`
fn text_at(range: &Range<Data>, row: u32, column: u32) -> String {
    range
        .get_value((row, column - 1))
        .map(cell_text)
        .unwrap_or_default()
}
