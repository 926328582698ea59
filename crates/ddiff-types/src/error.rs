use thiserror::Error;

/// Errors produced while constructing values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("timestamp out of range: {0} ms")]
    InvalidTimestamp(i64),

    #[error("invalid regular expression flags: {0:?}")]
    InvalidFlags(String),
}
