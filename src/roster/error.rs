use thiserror::Error;

/// Errors raised while reading roster CSV input.
///
/// `row` is the 1-based data row, not counting the header.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: missing value for `{column}`")]
    MissingValue { row: usize, column: &'static str },
    #[error("row {row}: `{column}` is not a whole number: {value:?}")]
    NotANumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: `{column}` must not be negative, got {value}")]
    NegativeNumber {
        row: usize,
        column: &'static str,
        value: i64,
    },
    #[error("row {row}: `{column}` is too large: {value}")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: i64,
    },
    #[error("row {row}: applicant name is empty")]
    MissingApplicantName { row: usize },
}
