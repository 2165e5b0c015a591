//! Command dispatch: read the series, compute the statistic, write the result.

use crate::args::{Args, Command};
use crate::csv_parser::{parse_series, Series};
use crate::csv_writer::{write_single_output, write_stats_table, OutputDest};
use crate::error::Result;
use fast_cumstats::{
    batch_cumulative_stats, cumulative_max_init, cumulative_mean_init, cumulative_min_init,
    cumulative_product_init, cumulative_sum_init, CumulativeStats, StatColumn,
};

/// Result of running one command over a series.
#[derive(Debug, Clone, PartialEq)]
pub enum StatOutput {
    /// One statistic, with its column header.
    Single {
        /// Output column header, e.g. `cum_sum`.
        header: &'static str,
        /// One value per input row.
        values: Vec<f64>,
    },
    /// The five-column batch table.
    Table(CumulativeStats<f64>),
}

/// Computes the statistic selected by `command` over `values`.
///
/// # Errors
///
/// Returns `CliError::StatisticError` if the statistic rejects the input,
/// e.g. an empty series for `min`, `max` or `all`.
pub fn compute(command: &Command, values: &[f64]) -> Result<StatOutput> {
    let init = command.initial_value();
    let (column, values) = match command {
        Command::Sum(_) => (StatColumn::Sum, cumulative_sum_init(values, init)?),
        Command::Prod(_) => (StatColumn::Product, cumulative_product_init(values, init)?),
        Command::Min(_) => (StatColumn::Min, cumulative_min_init(values, init)?),
        Command::Max(_) => (StatColumn::Max, cumulative_max_init(values, init)?),
        Command::Mean(_) => (StatColumn::Mean, cumulative_mean_init(values, init)?),
        Command::All(_) => return Ok(StatOutput::Table(batch_cumulative_stats(values, init)?)),
    };
    Ok(StatOutput::Single {
        header: column.name(),
        values,
    })
}

/// Writes a computed result to `dest`, aligned with the series' dates.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_output(output: &StatOutput, series: &Series, dest: &OutputDest) -> Result<()> {
    let dates = series.dates.as_deref();
    match output {
        StatOutput::Single { header, values } => write_single_output(values, header, dates, dest),
        StatOutput::Table(stats) => write_stats_table(stats, dates, dest),
    }
}

/// Runs the parsed command line end to end.
///
/// # Errors
///
/// Returns any error from reading the input, computing the statistic, or
/// writing the output.
pub fn run(args: &Args) -> Result<()> {
    let series = parse_series(args.input_path(), args.command.series().column.as_deref())?;
    let output = compute(&args.command, &series.values)?;
    write_output(&output, &series, &OutputDest::from_path(args.output_path()))
}
