//! JSON-driven fixture tests.
//!
//! Each file in tests/fixtures/ pins one behaviour of a statistic: the input
//! series, the initial value, and the expected output. `null` stands for NaN
//! in both inputs and expectations.

#![allow(clippy::float_cmp)]
#![allow(clippy::manual_let_else)]

use fast_cumstats::batch::{batch_cumulative_stats, StatColumn};
use fast_cumstats::cumulative::{
    cumulative_max_init, cumulative_mean_init, cumulative_min_init, cumulative_product_init,
    cumulative_sum_init,
};
use fast_cumstats::error::Error;
use fast_cumstats::utils::{approx_eq, EPSILON};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEMA_VERSION: &str = "1.0";

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[derive(Debug, Deserialize)]
struct Fixture {
    schema_version: String,
    rationale: String,
    input: Vec<Option<f64>>,
    params: Params,
    expected: Value,
}

#[derive(Debug, Deserialize)]
struct Params {
    statistic: String,
    initial_value: f64,
}

fn load_fixture(path: &Path) -> Fixture {
    let content = fs::read_to_string(path).expect("Failed to read fixture file");
    let fixture: Fixture = serde_json::from_str(&content).expect("Invalid fixture schema");
    assert_eq!(
        fixture.schema_version, SCHEMA_VERSION,
        "{}: unexpected schema_version",
        path.display()
    );
    assert!(!fixture.rationale.is_empty(), "{}: missing rationale", path.display());
    fixture
}

fn parse_opt_vec_f64(value: &Value) -> Vec<Option<f64>> {
    value
        .as_array()
        .expect("Expected array")
        .iter()
        .map(Value::as_f64)
        .collect()
}

fn assert_expected_vec(actual: &[f64], expected: &[Option<f64>], label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: output length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match e {
            None => assert!(a.is_nan(), "{label}[{i}] expected NaN, got {a}"),
            Some(exp) => assert!(
                approx_eq(*a, *exp, EPSILON),
                "{label}[{i}] expected {exp}, got {a}"
            ),
        }
    }
}

fn expected_error(expected: &Value) -> Option<&str> {
    expected.get("error").and_then(Value::as_str)
}

fn check_error(result: fast_cumstats::Result<Vec<f64>>, kind: &str, label: &str) {
    match (kind, result) {
        ("empty_input", Err(Error::EmptyInput)) => {}
        (kind, other) => panic!("{label}: expected {kind} error, got {other:?}"),
    }
}

fn run_fixture(path: &Path) {
    let label = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    let fixture = load_fixture(path);
    let input: Vec<f64> = fixture.input.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    let init = fixture.params.initial_value;

    let single = match fixture.params.statistic.as_str() {
        "sum" => cumulative_sum_init(&input, init),
        "prod" => cumulative_product_init(&input, init),
        "min" => cumulative_min_init(&input, init),
        "max" => cumulative_max_init(&input, init),
        "mean" => cumulative_mean_init(&input, init),
        "all" => {
            let stats = batch_cumulative_stats(&input, init).expect("batch failed");
            let table = fixture.expected.as_object().expect("Expected column object");
            assert_eq!(table.len(), StatColumn::ALL.len(), "{label}: column count");
            for column in StatColumn::ALL {
                let expected = parse_opt_vec_f64(
                    table
                        .get(column.name())
                        .unwrap_or_else(|| panic!("{label}: missing {}", column.name())),
                );
                assert_expected_vec(&stats.column(column), &expected, &format!("{label}.{}", column.name()));
            }
            return;
        }
        other => panic!("{label}: unknown statistic {other}"),
    };

    if let Some(kind) = expected_error(&fixture.expected) {
        check_error(single, kind, label);
        return;
    }

    let result = single.unwrap_or_else(|e| panic!("{label}: unexpected error {e}"));
    assert_expected_vec(&result, &parse_opt_vec_f64(&fixture.expected), label);
}

#[test]
fn json_fixtures() {
    let mut paths: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .expect("Failed to read fixtures directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    assert!(!paths.is_empty(), "no fixtures found");
    for path in &paths {
        run_fixture(path);
    }
}

#[test]
fn json_fixtures_cover_every_statistic() {
    let mut seen: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("Failed to read fixtures directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .map(|path| load_fixture(&path).params.statistic)
        .collect();
    seen.sort();
    seen.dedup();

    assert_eq!(seen, vec!["all", "max", "mean", "min", "prod", "sum"]);
}
