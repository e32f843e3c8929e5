#[path = "../common/mod.rs"]
mod common;

mod test_array_store;
mod test_benchmarks;
