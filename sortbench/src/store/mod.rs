//! The two storage strategies kept sorted under insertion and deletion
//!
//! * [`array::SortedArray`]: a contiguous buffer which is compacted after every deletion
//! * [`chain::SortedChain`]: a singly linked list over the nodes of a [`pool::NodePool`]

pub mod array;
pub mod chain;
pub mod pool;

/// The type of the values stored in both stores
pub type Value = i64;

/// Convert a drawn value in `[0, size)` into a [`Value`]
///
/// Run sizes are bounded by memory, so the conversion saturates only in theory.
pub fn to_value(drawn: usize) -> Value {
    Value::try_from(drawn).unwrap_or(Value::MAX)
}
