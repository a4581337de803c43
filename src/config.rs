//! Optional YAML config file and setting precedence
//!
//! ```yaml
//! format: both
//! units: ps
//! refdes: U3
//! package: FBGA96
//! partnumber: MT41K256M16
//! output_dir: constraints
//! ```
//!
//! Command line (or `PINDELAYS_*` environment) > config file > defaults.

use crate::error::{PinDelayError, PinDelayResult};
use crate::types::{OutputKind, RenderConfig, Unit};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<String>,
    pub units: Option<String>,
    pub refdes: Option<String>,
    pub package: Option<String>,
    pub partnumber: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub pin_column: Option<u32>,
    pub delay_column: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> PinDelayResult<Self> {
        debug!(path = %path.display(), "loading config file");
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> PinDelayResult<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Values given on the command line; `None` means not given
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_kind: Option<OutputKind>,
    pub unit: Option<Unit>,
    pub refdes: Option<String>,
    pub package: Option<String>,
    pub part_number: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub pin_column: Option<u32>,
    pub delay_column: Option<u32>,
}

/// 1-based column overrides for the extractor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub pin_column: Option<u32>,
    pub delay_column: Option<u32>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub render: RenderConfig,
    pub columns: ColumnOverrides,
}

impl Settings {
    /// Merge command line values over the config file over the defaults
    pub fn resolve(cli: CliOverrides, file: FileConfig) -> PinDelayResult<Self> {
        let defaults = RenderConfig::default();

        let output_kind = match (cli.output_kind, file.format) {
            (Some(kind), _) => kind,
            (None, Some(format)) => format.parse().map_err(PinDelayError::Config)?,
            (None, None) => defaults.output_kind,
        };
        let unit = match (cli.unit, file.units) {
            (Some(unit), _) => unit,
            (None, Some(units)) => units.parse().map_err(PinDelayError::Config)?,
            (None, None) => defaults.unit,
        };

        let render = RenderConfig {
            output_kind,
            unit,
            refdes: cli.refdes.or(file.refdes).unwrap_or(defaults.refdes),
            package: cli.package.or(file.package).unwrap_or(defaults.package),
            part_number: cli
                .part_number
                .or(file.partnumber)
                .unwrap_or(defaults.part_number),
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or(defaults.output_dir),
        };
        let columns = ColumnOverrides {
            pin_column: cli.pin_column.or(file.pin_column),
            delay_column: cli.delay_column.or(file.delay_column),
        };

        debug!(?render, ?columns, "resolved settings");
        Ok(Self { render, columns })
    }
}
