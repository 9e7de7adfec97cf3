//! Error types for list operations.

use thiserror::Error;

/// Errors raised by [`DynamicArray`](crate::DynamicArray) construction and
/// index-addressed operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A constructor was given a negative capacity.
    #[error("capacity must not be negative, got {capacity}")]
    InvalidArgument { capacity: isize },

    /// An index fell outside the range valid for the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, ListError>;
