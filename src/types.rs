use clap::ValueEnum;
use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

//==============================================================================
// Pin Delay Table
//==============================================================================

/// Pin identifier → delay text, for one spreadsheet.
///
/// Delays stay as the literal text read from the sheet so the EDA tool sees
/// exactly what the engineer typed. Inserting a pin that already exists
/// replaces its delay but keeps the pin at its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinDelayTable {
    delays: IndexMap<String, String>,
}

impl PinDelayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a pin's delay, returning the replaced delay
    pub fn insert(&mut self, pin: impl Into<String>, delay: impl Into<String>) -> Option<String> {
        self.delays.insert(pin.into(), delay.into())
    }

    pub fn get(&self, pin: &str) -> Option<&str> {
        self.delays.get(pin).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Iterate `(pin, delay)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.delays.iter().map(|(pin, delay)| (pin.as_str(), delay.as_str()))
    }
}

impl FromIterator<(String, String)> for PinDelayTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = PinDelayTable::new();
        for (pin, delay) in iter {
            table.insert(pin, delay);
        }
        table
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PinDelayTable {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(pin, delay)| (pin.to_string(), delay.to_string()))
            .collect()
    }
}

//==============================================================================
// Render Options
//==============================================================================

/// Unit of the delay values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Unit {
    /// Nanoseconds
    #[default]
    Ns,
    /// Picoseconds
    Ps,
    /// Mils (package length instead of delay)
    Mil,
}

impl Unit {
    /// Lowercase token, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Ns => "ns",
            Unit::Ps => "ps",
            Unit::Mil => "mil",
        }
    }

    /// Whether the values are lengths rather than delays
    pub fn is_length(&self) -> bool {
        matches!(self, Unit::Mil)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ns" => Ok(Unit::Ns),
            "ps" => Ok(Unit::Ps),
            "mil" => Ok(Unit::Mil),
            _ => Err(format!("unknown unit '{}' (expected ns, ps or mil)", s)),
        }
    }
}

/// Which pin delay file(s) to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputKind {
    /// Cadence Allegro `<package>.csv`
    #[default]
    Cadence,
    /// Mentor Constraint Manager `PinPkgDelays.txt` / `PinPkgLengths.txt`
    Mentor,
    /// Both files
    Both,
}

impl OutputKind {
    pub fn renders_cadence(&self) -> bool {
        matches!(self, OutputKind::Cadence | OutputKind::Both)
    }

    pub fn renders_mentor(&self) -> bool {
        matches!(self, OutputKind::Mentor | OutputKind::Both)
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cadence" => Ok(OutputKind::Cadence),
            "mentor" => Ok(OutputKind::Mentor),
            "both" => Ok(OutputKind::Both),
            _ => Err(format!(
                "unknown format '{}' (expected cadence, mentor or both)",
                s
            )),
        }
    }
}

pub const DEFAULT_REFDES: &str = "U1";
pub const DEFAULT_PACKAGE: &str = "dummy_package";
pub const DEFAULT_PART_NUMBER: &str = "dummy_part";

/// Everything the renderers need besides the table itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub output_kind: OutputKind,
    pub unit: Unit,
    /// Reference designator (Cadence only)
    pub refdes: String,
    /// Package name, also the Cadence file stem (Cadence only)
    pub package: String,
    /// Part number (Mentor only)
    pub part_number: String,
    /// Directory the output files are written to
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_kind: OutputKind::default(),
            unit: Unit::default(),
            refdes: DEFAULT_REFDES.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            part_number: DEFAULT_PART_NUMBER.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}
