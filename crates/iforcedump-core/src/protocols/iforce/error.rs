use thiserror::Error;

/// Errors returned by IForce packet parsing.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use iforcedump_core::protocols::iforce::error::IforceError;
///
/// let err = IforceError::TooShort { needed: 15, actual: 4 };
/// assert!(err.to_string().contains("packet too short"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IforceError {
    #[error("packet too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
