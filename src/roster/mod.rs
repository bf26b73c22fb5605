//! CSV roster loading.
//!
//! Turns the two tabular inputs (programs and applicant preferences) into
//! the typed model the allocation engine consumes. All malformed input is
//! rejected here; the engine only ever sees validated records.
//!
//! # Formats
//!
//! Programs: a header row naming `ProgramName`, `Capacity`, `Day` and
//! `TimeSlot` (any order, case and spacing ignored, extra columns allowed).
//!
//! Applicants: a header row, then one row per applicant with the name in
//! the first column and preferences in rank order in the following ones.
//! Rows may differ in length; blank cells are skipped.

mod error;
mod normalize;
mod parser;

pub use error::RosterError;
pub use normalize::normalize_name;
pub use parser::{load_applicants, load_offerings, read_applicants, read_offerings};
