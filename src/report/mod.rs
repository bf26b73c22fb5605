//! Result projection: per-applicant rows, fill rates, display labels in
//! English or Traditional Chinese, and CSV export.
//!
//! Nothing here feeds back into the engine; it only reshapes
//! [`Assignment`](crate::model::Assignment) records for people to read.

mod export;
mod labels;
mod language;
mod summary;

pub use export::{write_assignments_csv, write_summary_csv, ReportError};
pub use labels::{ProgramPalette, SlotLabels};
pub use language::{Language, UiText, UnknownLanguage};
pub use summary::{AllocationReport, ApplicantRow, OfferingFill};
