use clap::Parser;
use sortbench::StoreKind;

use super::envs;
use super::format::OutputFormatKind;

/// The command line arguments of `sortbench-runner`
///
/// Every option can also be set with an environment variable. Command-line arguments take
/// precedence over environment variables.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "Which is faster for random adding and deleting elements: an array that keeps getting \
             compacted, or a linked list?",
    long_about = None,
)]
pub struct CommandLineArgs {
    /// The size sequence stops before reaching this size (exclusive)
    #[arg(long = "end", env = envs::SORTBENCH_END, default_value_t = 1_000_000)]
    pub end: usize,

    /// Multiply the size with this factor after each row
    #[arg(long = "factor", env = envs::SORTBENCH_FACTOR, default_value_t = 2)]
    pub factor: usize,

    /// The format of the output on stdout
    #[arg(
        long = "output-format",
        env = envs::SORTBENCH_OUTPUT_FORMAT,
        value_enum,
        default_value_t = OutputFormatKind::Default
    )]
    pub output_format: OutputFormatKind,

    /// Seed the random number generator to make runs reproducible
    ///
    /// If not present, the generator is seeded from the operating system.
    #[arg(long = "seed", env = envs::SORTBENCH_SEED)]
    pub seed: Option<u64>,

    /// The first size of the collections
    #[arg(long = "start", env = envs::SORTBENCH_START, default_value_t = 10_000)]
    pub start: usize,

    /// The stores to benchmark
    #[arg(
        long = "stores",
        env = envs::SORTBENCH_STORES,
        value_enum,
        default_value_t = StoreSelection::Both
    )]
    pub stores: StoreSelection,
}

/// The selection of stores to benchmark for each size
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreSelection {
    /// Only the compacted array
    Array,
    /// Only the pooled linked list
    LinkedList,
    /// The array first and then the linked list
    #[default]
    Both,
}

impl StoreSelection {
    /// Returns true if the `store` is part of this selection
    pub fn includes(self, store: StoreKind) -> bool {
        matches!(
            (self, store),
            (Self::Both, _)
                | (Self::Array, StoreKind::Array)
                | (Self::LinkedList, StoreKind::LinkedList)
        )
    }
}
