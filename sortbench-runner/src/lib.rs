//! The sortbench-runner library
//!
//! The runner sweeps the benchmarks of the [`sortbench`] crate over a range of sizes and prints
//! the elapsed times as a table or as json.

#![doc(test(attr(warn(unused))))]

pub mod error;
pub mod runner;
