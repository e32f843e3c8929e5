//! Sorted insertion and random deletion with two storage strategies
//!
//! This library compares a contiguous array which is kept sorted and compacted
//! ([`store::array::SortedArray`]) with a singly linked list whose nodes come from a pre-allocated
//! pool ([`store::chain::SortedChain`] over a [`store::pool::NodePool`]).
//!
//! Both stores are grown from empty to `size` elements with values drawn in `[0, size)` (the build
//! phase) and shrunk back to empty by deleting at random positions (the drain phase). Only these
//! two phases are timed, see [`benchmark::benchmark_array`] and
//! [`benchmark::benchmark_linked_list`].
//!
//! ```rust
//! use sortbench::random::SeededRandom;
//! use sortbench::{benchmark_array, benchmark_linked_list};
//!
//! let mut random = SeededRandom::from_seed(42);
//! let array = benchmark_array(1000, &mut random).unwrap();
//! let linked_list = benchmark_linked_list(1000, &mut random).unwrap();
//!
//! assert_eq!(array.insertions, 1000);
//! assert_eq!(linked_list.deletions, 1000);
//! println!("{:.3}s vs {:.3}s", array.seconds(), linked_list.seconds());
//! ```

#![doc(test(attr(warn(unused))))]

pub mod benchmark;
pub mod error;
pub mod random;
pub mod store;
pub mod timing;

pub use benchmark::{benchmark_array, benchmark_linked_list};
pub use error::Error;
pub use timing::{Measurement, StoreKind};
