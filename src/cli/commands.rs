use crate::config::Settings;
use crate::error::{PinDelayError, PinDelayResult};
use crate::excel;
use crate::types::{PinDelayTable, RenderConfig};
use crate::writer;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What one input file produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub pins: usize,
    pub written: Vec<PathBuf>,
}

/// Convert every file in order, stopping at the first one that fails.
///
/// Files written for earlier inputs stay on disk.
pub fn convert(files: &[PathBuf], settings: &Settings) -> PinDelayResult<Vec<ConversionReport>> {
    println!("{}", "📌 pindelays - Excel to pin delay file".bold().green());
    println!("   Format: {:?}", settings.render.output_kind);
    println!("   Units:  {}", settings.render.unit.as_str().bright_yellow());
    println!("   Output: {}\n", settings.render.output_dir.display());

    fs::create_dir_all(&settings.render.output_dir)?;

    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        reports.push(convert_file(file, settings)?);
    }

    println!(
        "{}",
        format!("✅ Converted {} file(s)", reports.len()).bold().green()
    );
    Ok(reports)
}

/// Extract one spreadsheet and write the selected pin delay file(s)
pub fn convert_file(input: &Path, settings: &Settings) -> PinDelayResult<ConversionReport> {
    println!("{} {}", "📖 Reading spreadsheet:".cyan(), input.display());
    info!(input = %input.display(), "converting");

    let table = excel::extract_file(
        input,
        settings.columns.pin_column,
        settings.columns.delay_column,
    )?;
    println!("   Found {} pins", table.len());

    let written = render_selected(&table, &settings.render)?;

    Ok(ConversionReport {
        input: input.to_path_buf(),
        pins: table.len(),
        written,
    })
}

/// Run the renderers `config` selects.
///
/// A failed Cadence write does not stop the Mentor write; the first error
/// is returned once both have been attempted.
pub fn render_selected(
    table: &PinDelayTable,
    config: &RenderConfig,
) -> PinDelayResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut first_error: Option<PinDelayError> = None;

    if config.output_kind.renders_cadence() {
        match writer::render_cadence(
            &config.output_dir,
            &config.refdes,
            &config.package,
            config.unit,
            table,
        ) {
            Ok(path) => {
                println!("   {} {}", "Cadence file generated:".green(), path.display());
                written.push(path);
            }
            Err(e) => {
                warn!(error = %e, "cadence file not written");
                first_error.get_or_insert(e);
            }
        }
    }

    if config.output_kind.renders_mentor() {
        match writer::render_mentor(&config.output_dir, &config.part_number, config.unit, table) {
            Ok(path) => {
                println!("   {} {}", "Mentor file generated:".green(), path.display());
                written.push(path);
            }
            Err(e) => {
                warn!(error = %e, "mentor file not written");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(written),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
