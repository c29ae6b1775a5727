//! Error types for the check boundary

use thiserror::Error;

/// Errors surfaced when a check request cannot be evaluated
///
/// An empty string is a valid input and never an error; only a request
/// with no text at all is rejected.
#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
