//! Excel import for pin delay sheets
//!
//! Row 1 of the active sheet must contain `Pin Name` and `Delay` headers,
//! in any column. Every later row is one pin.

mod extractor;

pub use extractor::{
    cell_text, extract, extract_file, find_column, header_row, load_active_sheet, DELAY_HEADER,
    PIN_NAME_HEADER,
};
