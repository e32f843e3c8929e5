//! The module containing the crate main [`Error`] type

use std::fmt::Display;

/// The main sortbench error type
///
/// Every out-of-bounds condition the stores can run into is checked and reported with one of these
/// variants instead of touching memory outside of the live elements.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Error {
    /// An insertion into a [`crate::store::array::SortedArray`] which is already full
    ///
    /// `CapacityExceeded { capacity }`
    CapacityExceeded {
        /// The fixed capacity of the array
        capacity: usize,
    },
    /// A deletion position at or beyond the logical length of a store
    ///
    /// `IndexOutOfRange { index, len }`
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The logical length at the time of the request
        len: usize,
    },
    /// A run size which is not strictly positive
    ///
    /// `InvalidSize(size)`
    InvalidSize(usize),
    /// All nodes of a [`crate::store::pool::NodePool`] are already handed out
    ///
    /// `PoolExhausted { capacity }`
    PoolExhausted {
        /// The number of nodes allocated by the pool
        capacity: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(
                    f,
                    "Cannot insert into a full array: The capacity of {capacity} elements is \
                     exhausted"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Index out of range: The position was '{index}' but the logical length is \
                     '{len}'"
                )
            }
            Self::InvalidSize(size) => {
                write!(f, "Invalid run size '{size}': The size must be greater than 0")
            }
            Self::PoolExhausted { capacity } => {
                write!(
                    f,
                    "Node pool exhausted: All {capacity} pre-allocated nodes are in use"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
