use thiserror::Error;

/// Reasons a dump line is skipped.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use iforcedump_core::source::dump::error::DumpLineError;
///
/// let err = DumpLineError::MissingSeparator;
/// assert!(err.to_string().contains("separator"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DumpLineError {
    #[error("missing tab separator between timestamp and payload")]
    MissingSeparator,
    #[error("invalid timestamp: {value:?}")]
    InvalidTimestamp { value: String },
    #[error("invalid hex payload: {message}")]
    InvalidHex { message: String },
}
