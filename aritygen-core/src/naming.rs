//! Ordinal naming for position-derived members.

use thiserror::Error;

/// Highest position for which an ordinal name is defined.
pub const MAX_ORDINAL: usize = 8;

const ORDINALS: [&str; MAX_ORDINAL] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth",
];

/// Errors from naming lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("ordinal position {0} is out of range (supported: 1..={MAX_ORDINAL})")]
    OrdinalOutOfRange(usize),
}

/// The ordinal name for a 1-based position: 1 is "First", 8 is "Eighth".
///
/// Positions outside 1..=[`MAX_ORDINAL`] are a builder precondition
/// violation and fail the current file's generation.
pub fn ordinal(position: usize) -> Result<&'static str, NamingError> {
    if position == 0 || position > MAX_ORDINAL {
        return Err(NamingError::OrdinalOutOfRange(position));
    }
    Ok(ORDINALS[position - 1])
}
