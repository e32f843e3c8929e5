//! The timing harness
//!
//! Only the useful work is measured: the caller allocates the backing store before calling
//! [`measure`] and releases it after [`measure`] returned.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The storage strategy a [`Measurement`] was taken with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    /// The compacted [`crate::store::array::SortedArray`]
    #[strum(to_string = "Array")]
    Array,
    /// The [`crate::store::chain::SortedChain`] over a [`crate::store::pool::NodePool`]
    #[strum(to_string = "Linked List")]
    LinkedList,
}

/// The result of a single build-then-drain run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// The number of deletions of the drain phase
    pub deletions: usize,
    /// The elapsed time of the build and drain phases
    pub elapsed: Duration,
    /// The number of insertions of the build phase
    pub insertions: usize,
    /// The size of the run
    pub size: usize,
    /// The measured store
    pub store: StoreKind,
}

impl Measurement {
    /// The elapsed time in fractional seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `work` between two readings of a monotonic clock
///
/// Returns the elapsed time together with whatever `work` returned.
pub fn measure<F, T>(work: F) -> (Duration, T)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = work();
    (start.elapsed(), result)
}
