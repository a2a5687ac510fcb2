use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Requested capacity exceeds the maximum supported buffer size
    #[error("capacity overflow: {requested} slots exceed the maximum supported capacity")]
    CapacityOverflow {
        /// Number of slots requested
        requested: usize,
    },
}
