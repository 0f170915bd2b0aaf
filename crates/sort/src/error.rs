use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

/// Caller-contract violations reported instead of touching memory out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("unknown sort algorithm `{0}`")]
    UnknownAlgorithm(String),
}
