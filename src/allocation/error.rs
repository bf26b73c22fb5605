use thiserror::Error;

use crate::model::OfferingKey;

/// Contract violations rejected before a run starts.
///
/// Unknown program names, zero-capacity offerings and empty preference
/// lists are valid input and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("max_per_applicant must be at least 1, got {0}")]
    InvalidMaxPerApplicant(usize),
    #[error("no applicants to allocate")]
    NoApplicants,
    #[error("no offerings to allocate")]
    NoOfferings,
    #[error("duplicate applicant id: {0}")]
    DuplicateApplicant(String),
    #[error("duplicate offering: {0}")]
    DuplicateOffering(OfferingKey),
}
