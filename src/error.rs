use thiserror::Error;

/// Errors raised by [`UnrolledList`](crate::UnrolledList) operations.
///
/// Every error is detected before the list is modified, so a failed call
/// leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The list was configured with zero blocks.
    #[error("can't initiate a list with 0 blocks")]
    ZeroBlockCount,

    /// The initial elements don't fit in `block_count * block_count` slots.
    #[error("can't carry {len} elements within a capacity of {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    /// No element lives at `index`.
    #[error("index {index} out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The block chain holds fewer than `index + 1` blocks.
    #[error("block {index} out of bounds for a chain of {block_count} blocks")]
    BlockOutOfBounds { index: usize, block_count: usize },

    /// There is no preceding element to insert after.
    #[error("can't insert at index {index} without a preceding element (length {len})")]
    InvalidInsertPosition { index: usize, len: usize },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
