//! The runner sweeping the benchmarks over all sizes

pub mod args;
pub mod format;
pub mod summary;

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use sortbench::random::SeededRandom;
use sortbench::{benchmark_array, benchmark_linked_list, StoreKind};
use strum::IntoEnumIterator;

use self::args::{CommandLineArgs, StoreSelection};
use self::format::OutputFormatKind;
use self::summary::{Report, Row};
use crate::error::Error;

pub mod envs {
    pub const SORTBENCH_COLOR: &str = "SORTBENCH_COLOR";
    pub const SORTBENCH_END: &str = "SORTBENCH_END";
    pub const SORTBENCH_FACTOR: &str = "SORTBENCH_FACTOR";
    pub const SORTBENCH_LOG: &str = "SORTBENCH_LOG";
    pub const SORTBENCH_OUTPUT_FORMAT: &str = "SORTBENCH_OUTPUT_FORMAT";
    pub const SORTBENCH_SEED: &str = "SORTBENCH_SEED";
    pub const SORTBENCH_START: &str = "SORTBENCH_START";
    pub const SORTBENCH_STORES: &str = "SORTBENCH_STORES";

    pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";
}

/// The validated configuration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The format of the output
    pub output_format: OutputFormatKind,
    /// The optional seed of the random number generator
    pub seed: Option<u64>,
    /// The sizes in the order they are run
    pub sizes: Vec<usize>,
    /// The stores to run for each size
    pub stores: StoreSelection,
}

impl Config {
    /// Validate the [`CommandLineArgs`] and compute the sizes
    pub fn from_args(args: &CommandLineArgs) -> Result<Self, Error> {
        if args.start == 0 {
            return Err(Error::InvalidArgument(
                "--start".to_owned(),
                "The first size must be greater than 0".to_owned(),
            ));
        }
        if args.factor < 2 {
            return Err(Error::InvalidArgument(
                "--factor".to_owned(),
                format!("The factor must be at least 2 but was '{}'", args.factor),
            ));
        }
        if args.end <= args.start {
            return Err(Error::InvalidArgument(
                "--end".to_owned(),
                format!(
                    "The end '{}' must be greater than the start '{}'",
                    args.end, args.start
                ),
            ));
        }

        Ok(Self {
            output_format: args.output_format,
            seed: args.seed,
            sizes: sizes(args.start, args.end, args.factor),
            stores: args.stores,
        })
    }
}

/// The geometric sequence `start, start * factor, ...` of all sizes strictly lower than `end`
///
/// The sequence ends early if the next size would overflow.
pub fn sizes(start: usize, end: usize, factor: usize) -> Vec<usize> {
    std::iter::successors(Some(start), |size| size.checked_mul(factor))
        .take_while(|size| *size < end)
        .collect()
}

/// Run the benchmarks of all sizes in the [`Config`] and print the results
///
/// A single random number generator is shared by all benchmarks. For each size the array is run
/// first and then the linked list.
pub fn run_with_config(config: &Config) -> Result<Report> {
    let mut random = config
        .seed
        .map_or_else(SeededRandom::from_entropy, SeededRandom::from_seed);
    debug!("Random number generator seed: {:?}", random.seed());

    let mut report = Report::new(config.seed);
    if config.output_format == OutputFormatKind::Default {
        format::print_header();
    }

    for size in &config.sizes {
        let size = *size;
        info!("Running benchmarks with size {size}");

        let mut row = Row::new(size);
        for store in StoreKind::iter() {
            if !config.stores.includes(store) {
                continue;
            }

            let measurement = match store {
                StoreKind::Array => benchmark_array(size, &mut random),
                StoreKind::LinkedList => benchmark_linked_list(size, &mut random),
            }
            .map_err(|error| Error::BenchmarkError(store, size, error))?;

            debug!("{store} with size {size}: {:.6}s", measurement.seconds());
            row.record(&measurement);
        }

        if config.output_format == OutputFormatKind::Default {
            format::print_row(&row)?;
        }
        report.rows.push(row);
    }

    format::print_report(&report, config.output_format)?;
    Ok(report)
}

/// The main entry point of the runner parsing the command-line arguments
pub fn run() -> Result<()> {
    let args = CommandLineArgs::parse();
    debug!("Command-line arguments: {args:?}");

    let config = Config::from_args(&args)?;
    run_with_config(&config).map(|_| ())
}
