//! Basic Cumulative Statistics Example
//!
//! Builds an equity curve from daily returns and reads off the running
//! peak, trough and average return.
//!
//! Run with: `cargo run --example basic_cumulative`

use fast_cumstats::prelude::*;

fn main() -> Result<()> {
    let returns = vec![0.012, -0.004, 0.007, -0.015, 0.003, 0.021, -0.009, 0.005];
    let capital = 10_000.0;

    let equity = cumulative_product_init(&returns, capital)?;
    let peak = cumulative_max(&equity)?;
    let total_return = cumulative_sum(&returns)?;
    let average = cumulative_mean(&returns)?;
    let worst = cumulative_min(&returns)?;

    println!("=== Equity Curve ===");
    println!();
    println!("{:>4} {:>9} {:>12} {:>12} {:>9} {:>9} {:>9}", "day", "return", "equity", "peak", "sum", "mean", "worst");
    for i in 0..returns.len() {
        println!(
            "{:>4} {:>9.4} {:>12.2} {:>12.2} {:>9.4} {:>9.5} {:>9.4}",
            i + 1,
            returns[i],
            equity[i],
            peak[i],
            total_return[i],
            average[i],
            worst[i]
        );
    }
    println!();

    // All five at once, sharing one initial value
    let stats = batch_cumulative_stats(&returns, 0.0)?;
    println!("=== Batch Table (initial value 0) ===");
    println!("{}", COLUMN_NAMES.join(", "));
    for row in stats.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.5}")).collect();
        println!("{}", cells.join(", "));
    }

    Ok(())
}
