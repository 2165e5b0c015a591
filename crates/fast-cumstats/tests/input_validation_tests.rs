//! Input validation tests.
//!
//! Covers the empty-input policy of every statistic and the buffer checks of
//! the `_into` variants. Validation must fail before any element is read or
//! any output slot is written.

#![allow(clippy::float_cmp)]

use fast_cumstats::batch::{
    batch_cumulative_stats, batch_cumulative_stats_into, batch_cumulative_stats_min_len,
    NUM_COLUMNS,
};
use fast_cumstats::cumulative::{
    cumulative_max, cumulative_max_init, cumulative_max_init_into, cumulative_max_min_len,
    cumulative_mean, cumulative_mean_init, cumulative_mean_init_into, cumulative_mean_min_len,
    cumulative_min, cumulative_min_init, cumulative_min_init_into, cumulative_min_min_len,
    cumulative_product, cumulative_product_init, cumulative_product_init_into,
    cumulative_product_min_len, cumulative_sum, cumulative_sum_init, cumulative_sum_init_into,
    cumulative_sum_min_len,
};
use fast_cumstats::error::Error;

// ==================== Empty Array Tests ====================

#[test]
fn validation_empty_array_sum_is_empty_output() {
    let empty: Vec<f64> = vec![];
    assert_eq!(cumulative_sum_init(&empty, 1.0), Ok(vec![]));
    assert_eq!(cumulative_sum(&empty), Ok(vec![]));
}

#[test]
fn validation_empty_array_product_is_empty_output() {
    let empty: Vec<f64> = vec![];
    assert_eq!(cumulative_product_init(&empty, 2.0), Ok(vec![]));
    assert_eq!(cumulative_product(&empty), Ok(vec![]));
}

#[test]
fn validation_empty_array_mean_is_empty_output() {
    let empty: Vec<f64> = vec![];
    assert_eq!(cumulative_mean_init(&empty, 1.0), Ok(vec![]));
    assert_eq!(cumulative_mean(&empty), Ok(vec![]));
}

#[test]
fn validation_empty_array_min() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(cumulative_min_init(&empty, 0.0), Err(Error::EmptyInput)));
    assert!(matches!(cumulative_min(&empty), Err(Error::EmptyInput)));
}

#[test]
fn validation_empty_array_max() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(cumulative_max_init(&empty, 0.0), Err(Error::EmptyInput)));
    assert!(matches!(cumulative_max(&empty), Err(Error::EmptyInput)));
}

#[test]
fn validation_empty_array_batch() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(batch_cumulative_stats(&empty, 0.0), Err(Error::EmptyInput)));
}

#[test]
fn validation_empty_array_f32() {
    let empty: Vec<f32> = vec![];
    assert!(matches!(cumulative_min_init(&empty, 0.0), Err(Error::EmptyInput)));
    assert!(cumulative_sum_init(&empty, 0.0).unwrap().is_empty());
}

#[test]
fn validation_empty_error_message() {
    let empty: Vec<f64> = vec![];
    let err = cumulative_max_init(&empty, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "empty input: no data provided");
}

// ==================== Minimum Length Contract ====================

#[test]
fn validation_min_len_matches_behaviour() {
    assert_eq!(cumulative_sum_min_len(), 0);
    assert_eq!(cumulative_product_min_len(), 0);
    assert_eq!(cumulative_mean_min_len(), 0);
    assert_eq!(cumulative_min_min_len(), 1);
    assert_eq!(cumulative_max_min_len(), 1);
    assert_eq!(batch_cumulative_stats_min_len(), 1);

    let one = vec![1.0_f64; cumulative_min_min_len()];
    assert!(cumulative_min_init(&one, 0.0).is_ok());
    assert!(cumulative_max_init(&one, 0.0).is_ok());
    assert!(batch_cumulative_stats(&one, 0.0).is_ok());
}

// ==================== Output Buffer Tests ====================

#[test]
fn validation_into_exact_buffer_ok() {
    let data = vec![1.0_f64, 2.0, 3.0];
    let mut out = vec![0.0_f64; 3];

    assert_eq!(cumulative_sum_init_into(&data, 0.0, &mut out), Ok(3));
    assert_eq!(cumulative_product_init_into(&data, 1.0, &mut out), Ok(3));
    assert_eq!(cumulative_min_init_into(&data, 0.0, &mut out), Ok(3));
    assert_eq!(cumulative_max_init_into(&data, 0.0, &mut out), Ok(3));
    assert_eq!(cumulative_mean_init_into(&data, 0.0, &mut out), Ok(3));

    let mut table = vec![0.0_f64; 3 * NUM_COLUMNS];
    assert_eq!(batch_cumulative_stats_into(&data, 0.0, &mut table), Ok(3));
}

#[test]
fn validation_into_short_buffer_untouched() {
    let data = vec![1.0_f64, 2.0, 3.0];
    let mut out = vec![-9.0_f64; 2];

    let checks = [
        cumulative_sum_init_into(&data, 0.0, &mut out),
        cumulative_product_init_into(&data, 1.0, &mut out),
        cumulative_min_init_into(&data, 0.0, &mut out),
        cumulative_max_init_into(&data, 0.0, &mut out),
        cumulative_mean_init_into(&data, 0.0, &mut out),
    ];

    for result in checks {
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 3,
                actual: 2,
                ..
            })
        ));
    }
    assert_eq!(out, vec![-9.0, -9.0]);
}

#[test]
fn validation_into_reports_operation_name() {
    let data = vec![1.0_f64, 2.0];
    let mut out = vec![0.0_f64; 1];

    let names: Vec<&str> = [
        cumulative_sum_init_into(&data, 0.0, &mut out),
        cumulative_product_init_into(&data, 1.0, &mut out),
        cumulative_min_init_into(&data, 0.0, &mut out),
        cumulative_max_init_into(&data, 0.0, &mut out),
        cumulative_mean_init_into(&data, 0.0, &mut out),
        batch_cumulative_stats_into(&data, 0.0, &mut out),
    ]
    .into_iter()
    .map(|r| match r {
        Err(Error::BufferTooSmall { operation, .. }) => operation,
        other => panic!("expected BufferTooSmall, got {other:?}"),
    })
    .collect();

    assert_eq!(
        names,
        vec![
            "cumulative_sum",
            "cumulative_product",
            "cumulative_min",
            "cumulative_max",
            "cumulative_mean",
            "batch_cumulative_stats",
        ]
    );
}

#[test]
fn validation_batch_into_needs_five_slots_per_row() {
    let data = vec![1.0_f64, 2.0, 3.0];
    // Enough for a single-statistic output, not for the table
    let mut out = vec![0.0_f64; 3];
    assert!(matches!(
        batch_cumulative_stats_into(&data, 0.0, &mut out),
        Err(Error::BufferTooSmall {
            required: 15,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn validation_empty_input_checked_before_buffer() {
    // An empty series with an empty buffer reports the input problem
    let empty: Vec<f64> = vec![];
    let mut out: Vec<f64> = vec![];
    assert!(matches!(
        cumulative_min_init_into(&empty, 0.0, &mut out),
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        batch_cumulative_stats_into(&empty, 0.0, &mut out),
        Err(Error::EmptyInput)
    ));
    // ... while the statistics that accept empty input write nothing
    assert_eq!(cumulative_sum_init_into(&empty, 0.0, &mut out), Ok(0));
    assert_eq!(cumulative_mean_init_into(&empty, 0.0, &mut out), Ok(0));
}
