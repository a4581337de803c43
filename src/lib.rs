//! pindelays - Excel pin delay sheets to EDA pin delay files
//!
//! High speed boards have to account for the length of each pin inside the
//! package: the two pins of a differential pair, or the lanes of a DDR bus,
//! can differ enough to break timing. This crate reads a spreadsheet with
//! `Pin Name` and `Delay` columns and writes the pin delay import file for
//! Cadence Allegro or Mentor Constraint Manager.
//!
//! # Example
//!
//! ```no_run
//! use pindelays::excel::extract_file;
//! use pindelays::types::Unit;
//! use pindelays::writer::render_cadence;
//! use std::path::Path;
//!
//! let table = extract_file("ddr4_pins.xlsx", None, None)?;
//! println!("Pins: {}", table.len());
//!
//! render_cadence(Path::new("."), "U1", "FBGA96", Unit::Ns, &table)?;
//! # Ok::<(), pindelays::error::PinDelayError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{PinDelayError, PinDelayResult};
pub use types::{OutputKind, PinDelayTable, RenderConfig, Unit};
