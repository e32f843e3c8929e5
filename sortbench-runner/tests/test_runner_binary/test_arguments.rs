use predicates::prelude::*;
use rstest::rstest;

use crate::common;

#[rstest]
#[case::zero_start(
    &["--start=0"],
    "sortbench_runner: Error: Invalid argument for --start: The first size must be greater than 0\n"
)]
#[case::factor_one(
    &["--factor=1"],
    "sortbench_runner: Error: Invalid argument for --factor: The factor must be at least 2 but was \
     '1'\n"
)]
#[case::end_below_start(
    &["--start=100", "--end=50"],
    "sortbench_runner: Error: Invalid argument for --end: The end '50' must be greater than the \
     start '100'\n"
)]
fn test_invalid_configuration(#[case] args: &[&str], #[case] expected_stderr: &str) {
    common::runner()
        .args(args)
        .assert()
        .code(1)
        .stdout("")
        .stderr(expected_stderr.to_owned());
}

#[test]
fn test_unparsable_argument_is_rejected_by_clap() {
    common::runner()
        .arg("--start=many")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'many'"));
}

#[test]
fn test_help_mentions_environment_variables() {
    common::runner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SORTBENCH_START"))
        .stdout(predicate::str::contains("--output-format"));
}
