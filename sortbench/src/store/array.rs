//! The compacted, always sorted array store

use std::fmt::Display;

use log::trace;

use super::Value;
use crate::error::Error;

/// A fixed-capacity contiguous buffer kept sorted ascending and without holes
///
/// The buffer is allocated once in [`SortedArray::with_capacity`] and never grows. Only the first
/// [`SortedArray::len`] slots are live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedArray {
    buffer: Box<[Value]>,
    len: usize,
}

impl SortedArray {
    /// Allocate a new empty `SortedArray` which can hold exactly `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// The live values in ascending order
    pub fn as_slice(&self) -> &[Value] {
        &self.buffer[..self.len]
    }

    /// The fixed number of slots of this array
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Insert `value` keeping the array sorted
    ///
    /// The live prefix is scanned from the left for the first value `>= value` and everything from
    /// there on is shifted one slot to the right. So, an equal value is placed in front of the
    /// values it equals. Returns the index the value was written to.
    pub fn insert(&mut self, value: Value) -> Result<usize, Error> {
        if self.len == self.capacity() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        let index = self
            .as_slice()
            .iter()
            .position(|current| *current >= value)
            .unwrap_or(self.len);

        self.buffer.copy_within(index..self.len, index + 1);
        self.buffer[index] = value;
        self.len += 1;

        trace!("Inserted {value} at {index}: {}", self);
        Ok(index)
    }

    /// Returns true if there are no live values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The logical length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove and return the value at `index` closing the gap
    ///
    /// Only live slots are shifted to the left.
    pub fn remove(&mut self, index: usize) -> Result<Value, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let value = self.buffer[index];
        self.buffer.copy_within(index + 1..self.len, index);
        self.len -= 1;

        trace!("Removed {value} from {index}: {}", self);
        Ok(value)
    }
}

impl Display for SortedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.as_slice().iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
