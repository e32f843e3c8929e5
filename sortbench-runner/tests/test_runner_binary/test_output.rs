use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use crate::common;

#[rstest]
#[case::json("json")]
#[case::pretty_json("pretty-json")]
fn test_json_output(#[case] format: &str) {
    let output = common::runner()
        .args(["--start=8", "--end=40", "--factor=2"])
        .arg(format!("--output-format={format}"))
        .assert()
        .success()
        .stderr("")
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["version"], "1");
    assert_eq!(report["seed"], 42);

    let rows = report["rows"].as_array().unwrap();
    let sizes = rows
        .iter()
        .map(|row| row["size"].as_u64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(sizes, vec![8, 16, 32]);
    for row in rows {
        assert!(row["array"].as_f64().unwrap() >= 0.0);
        assert!(row["linked_list"].as_f64().unwrap() >= 0.0);
    }
}

#[test]
fn test_default_output_prints_table() {
    common::runner()
        .args(["--start=100", "--end=300", "--factor=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Which is faster for random adding and deleting elements:",
        ))
        .stdout(predicate::str::contains(
            "      Size         Array    Linked List",
        ))
        .stdout(predicate::str::is_match(r"(?m)^       100 +\d+\.\d +\d+\.\d$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^       200 +\d+\.\d +\d+\.\d$").unwrap());
}

#[test]
fn test_single_store_leaves_other_column_unavailable() {
    common::runner()
        .args(["--start=10", "--end=11", "--stores=linked-list"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^        10 +N/A +\d+\.\d$").unwrap());
}

#[test]
fn test_arguments_from_environment() {
    let output = common::runner()
        .env("SORTBENCH_START", "3")
        .env("SORTBENCH_END", "30")
        .env("SORTBENCH_FACTOR", "3")
        .env("SORTBENCH_OUTPUT_FORMAT", "json")
        .env("SORTBENCH_STORES", "array")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["size"], 27);
    assert!(rows.iter().all(|row| row["linked_list"].is_null()));
}
