//! Error types for the interpreter.

use thiserror::Error;

/// Result type for classifier calls.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Failures of the external intent classifier.
///
/// None of these ever escape the classification gate: any error degrades to
/// an unknown intent at zero confidence.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The transport to the classifier failed.
    #[error("classifier transport failed: {0}")]
    Transport(String),

    /// The classifier did not answer within its deadline.
    #[error("classifier timed out after {0} ms")]
    Timeout(u64),

    /// The classifier answered something that does not parse.
    #[error("malformed classifier payload: {0}")]
    MalformedPayload(String),
}
