//! CLI command handlers

pub mod commands;

pub use commands::{convert, convert_file, render_selected, ConversionReport};
