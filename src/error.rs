use thiserror::Error;

/// Errors produced at the boundary of the simulation's pure functions.
///
/// Every error is a contract violation by the caller; nothing in the
/// simulation is transient or retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bb84Error {
    #[error("invalid input: paired sequences differ in length (expected {expected}, got {got})")]
    InvalidInput { expected: usize, got: usize },

    #[error("sift mask index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
