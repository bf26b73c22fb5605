//! Domain records shared by the engine, the roster loader and the report.
//!
//! Input records ([`Applicant`], [`SlotOffering`]) are immutable; all
//! mutable bookkeeping of a run lives in the allocation state. The only
//! output record is [`Assignment`].

mod types;

pub use types::{Applicant, Assignment, OfferingKey, SlotOffering, TimeCoordinate};
