//! Error Handling Examples
//!
//! This example demonstrates the error cases of fast-cumstats and how to
//! avoid them.
//!
//! Run with: `cargo run --example error_handling`

use fast_cumstats::batch::NUM_COLUMNS;
use fast_cumstats::prelude::*;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Empty input where a first element is required
    println!("1. Empty Input (cumulative_min):");
    let empty: Vec<f64> = vec![];
    match cumulative_min(&empty) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::EmptyInput) => {
            println!("   Caught EmptyInput error (expected)");
            println!("   Fix: check cumulative_min_min_len() = {}", cumulative_min_min_len());
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Empty input where it is allowed
    println!("2. Empty Input (cumulative_sum):");
    match cumulative_sum(&empty) {
        Ok(out) => println!("   Returned {} values (expected 0)", out.len()),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Output buffer too small
    println!("3. Buffer Too Small (batch):");
    let data = vec![1.0, 2.0, 3.0];
    let mut out = vec![0.0; data.len()];
    match batch_cumulative_stats_into(&data, 0.0, &mut out) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::BufferTooSmall {
            required,
            actual,
            operation,
        }) => {
            println!("   Caught BufferTooSmall error (expected)");
            println!("   Details: {operation} requires {required} slots, got {actual}");
            println!("   Fix: allocate data.len() * {NUM_COLUMNS}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 4: Propagating with ?
    println!("4. Propagating with ?:");
    match summarize(&data) {
        Ok(line) => println!("   {line}"),
        Err(e) => println!("   Error: {e}"),
    }
    match summarize(&empty) {
        Ok(line) => println!("   {line}"),
        Err(e) => println!("   Error: {e} (expected)"),
    }
}

fn summarize(data: &[f64]) -> Result<String> {
    let stats = batch_cumulative_stats(data, 0.0)?;
    let last = stats.len() - 1;
    Ok(format!(
        "final sum {:?}, final mean {:?}",
        stats.get(last, StatColumn::Sum),
        stats.get(last, StatColumn::Mean)
    ))
}
