use std::path::PathBuf;
use thiserror::Error;

pub type PinDelayResult<T> = Result<T, PinDelayError>;

#[derive(Error, Debug)]
pub enum PinDelayError {
    #[error("Missing column: no \"{header}\" header in row 1")]
    MissingColumn { header: String },

    #[error("Missing value in row {row}: pin {pin:?}, delay {delay:?}")]
    MissingValue {
        row: u32,
        pin: String,
        delay: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read spreadsheet {}: {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
