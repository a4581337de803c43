use clap::Parser;
use colored::Colorize;
use pindelays::cli;
use pindelays::config::{CliOverrides, FileConfig, Settings};
use pindelays::error::PinDelayResult;
use pindelays::types::{OutputKind, Unit};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pindelays")]
#[command(about = "Excel to a pin delay file for either Cadence or Mentor")]
#[command(long_about = "pindelays - Excel to a pin delay file for either Cadence or Mentor

For high speed PCB designs the internal length of each pin matters: the
difference between the two pins of a differential pair, or across a DDR
bus, can be enough to break the signal. This tool takes an Excel file and
produces a pin delay file formatted for your EDA tool.

INPUT:
  Row 1 of the first sheet must contain the headers 'Pin Name' and 'Delay'
  (any column, exact text). Every following row is one pin; an empty pin
  or delay cell aborts that file.

OUTPUT:
  cadence  <package>.csv
  mentor   PinPkgDelays.txt (ns, ps) or PinPkgLengths.txt (mil)

EXAMPLES:
  pindelays pins.xlsx --package FBGA96 --refdes U3 --units ps
  pindelays pins.xlsx -f mentor --partnumber MT41K256M16 --units mil
  pindelays a.xlsx b.xlsx -f both -o constraints/

Options can also be set in a YAML file (--config) or PINDELAYS_* variables.")]
#[command(version)]
struct Cli {
    /// Excel file(s) to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// File(s) to generate [default: cadence]
    #[arg(short, long, value_enum, ignore_case = true, env = "PINDELAYS_FORMAT")]
    format: Option<OutputKind>,

    /// Part number [only used in mentor, default: dummy_part]
    #[arg(short = 'p', long, env = "PINDELAYS_PARTNUMBER")]
    partnumber: Option<String>,

    /// Device package [only used in cadence, default: dummy_package]
    #[arg(short = 'd', long, env = "PINDELAYS_PACKAGE")]
    package: Option<String>,

    /// Reference designator [only used in cadence, default: U1]
    #[arg(short, long, env = "PINDELAYS_REFDES")]
    refdes: Option<String>,

    /// Unit of the delay column [default: ns]
    #[arg(short, long, value_enum, ignore_case = true, env = "PINDELAYS_UNITS")]
    units: Option<Unit>,

    /// Directory to write the pin delay file(s) to [default: .]
    #[arg(short, long, env = "PINDELAYS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Pin column number (1 = A), skips the 'Pin Name' lookup
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), env = "PINDELAYS_PIN_COLUMN")]
    pin_column: Option<u32>,

    /// Delay column number (1 = A), skips the 'Delay' lookup
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), env = "PINDELAYS_DELAY_COLUMN")]
    delay_column: Option<u32>,

    /// YAML config file with default option values
    #[arg(short, long, env = "PINDELAYS_CONFIG")]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pindelays=debug"
    } else {
        "pindelays=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> PinDelayResult<()> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = CliOverrides {
        output_kind: cli.format,
        unit: cli.units,
        refdes: cli.refdes,
        package: cli.package,
        part_number: cli.partnumber,
        output_dir: cli.output_dir,
        pin_column: cli.pin_column,
        delay_column: cli.delay_column,
    };
    let settings = Settings::resolve(overrides, file_config)?;

    cli::convert(&cli.files, &settings)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
