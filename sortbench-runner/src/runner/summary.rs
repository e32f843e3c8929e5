use serde::{Deserialize, Serialize};
use sortbench::{Measurement, StoreKind};

/// The version of the json report format. Only backwards incompatible changes cause an increase.
pub const REPORT_VERSION: &str = "1";

/// The `Report` of a whole sweep over all sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The version of this format
    pub version: String,
    /// The seed of the random number generator if it was given
    pub seed: Option<u64>,
    /// One row per size in the order the sizes were run
    pub rows: Vec<Row>,
}

/// The elapsed times of a single size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The size of the collections
    pub size: usize,
    /// The elapsed seconds of the array if it was benchmarked
    pub array: Option<f64>,
    /// The elapsed seconds of the linked list if it was benchmarked
    pub linked_list: Option<f64>,
}

impl Report {
    /// Create a new empty `Report`
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            version: REPORT_VERSION.to_owned(),
            seed,
            rows: vec![],
        }
    }
}

impl Row {
    /// Create a new `Row` without any measurements
    pub fn new(size: usize) -> Self {
        Self {
            size,
            array: None,
            linked_list: None,
        }
    }

    /// Record the elapsed time of the `measurement` in the column of its store
    pub fn record(&mut self, measurement: &Measurement) {
        let seconds = Some(measurement.seconds());
        match measurement.store {
            StoreKind::Array => self.array = seconds,
            StoreKind::LinkedList => self.linked_list = seconds,
        }
    }
}
