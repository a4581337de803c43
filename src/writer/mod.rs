//! Pin delay file writers
//!
//! - Cadence: `<package>.csv`, tab separated, unit on every row
//! - Mentor: `PinPkgDelays.txt` or `PinPkgLengths.txt`, space separated

mod cadence;
mod mentor;

pub use cadence::{cadence_file_name, render_cadence, write_cadence};
pub use mentor::{
    mentor_file_name, mentor_unit_token, render_mentor, write_mentor, MENTOR_DELAYS_FILE,
    MENTOR_LENGTHS_FILE,
};
