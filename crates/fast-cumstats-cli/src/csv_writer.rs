//! CSV output module for writing cumulative statistics.
//!
//! Every input row produces one output row, in input order. NaN values are
//! written as empty cells, and a date column from the input is written first
//! when present.
//!
//! # Output Format
//!
//! Single statistics produce one column named after the statistic
//! (`cum_sum`, `cum_prod`, ...). The `all` command produces the five columns
//! of the batch table.

use crate::error::{CliError, Result};
use csv::WriterBuilder;
use fast_cumstats::{CumulativeStats, StatColumn};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Destination for an optional `-o` path.
    #[must_use]
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or(OutputDest::Stdout, |p| OutputDest::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the output file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Format one value as a CSV cell, NaN as an empty cell.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write named columns of equal length to `out`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_columns<W: Write>(
    out: W,
    columns: &[(&str, &[f64])],
    dates: Option<&[String]>,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if dates.is_some() {
        header.push("date");
    }
    header.extend(columns.iter().map(|(name, _)| *name));
    writer.write_record(&header)?;

    let len = columns.first().map_or(0, |(_, values)| values.len());
    let mut record: Vec<String> = Vec::with_capacity(header.len());
    for i in 0..len {
        record.clear();
        if let Some(dates) = dates {
            record.push(dates.get(i).cloned().unwrap_or_default());
        }
        record.extend(
            columns
                .iter()
                .map(|(_, values)| values.get(i).map_or_else(String::new, |v| format_value(*v))),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a single statistic as one column.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_single_output(
    output: &[f64],
    header: &str,
    dates: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    write_columns(dest.writer()?, &[(header, output)], dates)
}

/// Write several statistics as named columns.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_multi_output(
    columns: &[(&str, &[f64])],
    dates: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    if columns.is_empty() {
        return Ok(());
    }
    write_columns(dest.writer()?, columns, dates)
}

/// Write the five-column batch table.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_stats_table(
    stats: &CumulativeStats<f64>,
    dates: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    let columns: Vec<(StatColumn, Vec<f64>)> = StatColumn::ALL
        .into_iter()
        .map(|c| (c, stats.column(c)))
        .collect();
    let named: Vec<(&str, &[f64])> = columns
        .iter()
        .map(|(c, values)| (c.name(), values.as_slice()))
        .collect();
    write_multi_output(&named, dates, dest)
}
