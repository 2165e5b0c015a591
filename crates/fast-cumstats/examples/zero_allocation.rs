//! Buffer Reuse Example
//!
//! Shows the `_into` variants writing into buffers allocated once and reused
//! across many series.
//!
//! Run with: `cargo run --example zero_allocation`

use fast_cumstats::prelude::*;

fn main() -> Result<()> {
    let series: Vec<Vec<f64>> = (0..4)
        .map(|k| (0..16).map(|i| f64::from(i * (k + 1) % 7) - 3.0).collect())
        .collect();

    let capacity = series.iter().map(Vec::len).max().unwrap_or(0);
    let mut sums = vec![0.0; capacity];
    let mut table = vec![0.0; capacity * NUM_COLUMNS];

    for (k, data) in series.iter().enumerate() {
        let n = cumulative_sum_init_into(data, 100.0, &mut sums)?;
        let rows = batch_cumulative_stats_into(data, 1.0, &mut table)?;

        let last = &table[(rows - 1) * NUM_COLUMNS..rows * NUM_COLUMNS];
        println!(
            "series {k}: {n} values, final sum+100 = {:.1}, last row = {last:?}",
            sums[n - 1]
        );
    }

    Ok(())
}
