//! The module containing the runner's main [`Error`] type

use std::fmt::Display;

use sortbench::StoreKind;

/// The main sortbench-runner error type
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Error {
    /// A benchmark run of the [`sortbench`] library failed
    ///
    /// `BenchmarkError(store, size, error)`
    BenchmarkError(StoreKind, usize, sortbench::Error),
    /// A command-line argument (or its environment variable) has an invalid value
    ///
    /// `InvalidArgument(option_name, message)`
    InvalidArgument(String, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BenchmarkError(store, size, error) => {
                write!(f, "Error in {store} benchmark with size {size}: {error}")
            }
            Self::InvalidArgument(option, message) => {
                write!(f, "Invalid argument for {option}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
