//! CSV parsing module for reading a value series from CSV files.
//!
//! # Column Detection
//!
//! Header names are matched case-insensitively, and of two headers that
//! normalize to the same name the first is used. Unless a column is named on
//! the command line, the first of these headers present is used:
//! `value`, `return`, `returns`, `close`, `price`. Failing that, the value
//! column is the only column whose cells are all numeric and not all empty.
//!
//! Date columns (`date`, `time`, `datetime`, `timestamp`, `dt`) are preserved
//! for output alignment but not parsed as numeric data. Empty cells parse as
//! NaN so that every input row yields one output row. In a file with a single
//! column an empty cell is a blank line, so blank lines between records are
//! read as empty cells there.

use crate::error::{CliError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Header names tried, in order, when no column is requested.
pub const VALUE_COLUMN_CANDIDATES: [&str; 5] = ["value", "return", "returns", "close", "price"];

/// Parsed CSV data with column mapping.
///
/// Cells are kept as text until a column is selected, so non-numeric columns
/// such as tickers do not prevent reading a numeric one.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    pub column_map: HashMap<String, usize>,
    /// Date column values (if found).
    pub dates: Option<Vec<String>>,
    /// Raw cells of every non-date column by index.
    cells: HashMap<usize, Vec<String>>,
    /// Input line number of every row.
    lines: Vec<usize>,
}

/// One numeric series selected from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Header of the column the values came from.
    pub column: String,
    /// The values, NaN for empty cells.
    pub values: Vec<f64>,
    /// Date column values (if found).
    pub dates: Option<Vec<String>>,
}

impl ParsedCsv {
    /// Parses the column at `idx` as numbers.
    fn parse_column(&self, idx: usize) -> Result<Vec<f64>> {
        let Some(cells) = self.cells.get(&idx) else {
            return Ok(Vec::new());
        };
        cells
            .iter()
            .zip(&self.lines)
            .map(|(cell, &line)| {
                parse_value(cell).map_err(|e| match e {
                    CliError::CsvParseError { message, .. } => CliError::CsvParseError {
                        message: format!("column '{}': {message}", self.headers[idx]),
                        line: Some(line),
                    },
                    other => other,
                })
            })
            .collect()
    }

    fn is_numeric_column(&self, idx: usize) -> bool {
        self.cells.get(&idx).is_some_and(|cells| {
            cells.iter().any(|c| !c.trim().is_empty())
                && cells.iter().all(|c| parse_value(c).is_ok())
        })
    }

    /// Selects the value column, either the one requested or the detected one.
    ///
    /// Returns the header of the chosen column together with its values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` if the requested column does not
    /// exist, and `CliError::CsvParseError` if no column can be detected or a
    /// cell of the chosen column is not a number.
    pub fn value_column(&self, requested: Option<&str>) -> Result<(String, Vec<f64>)> {
        if let Some(name) = requested {
            let idx = *self
                .column_map
                .get(&normalize_header(name))
                .ok_or_else(|| CliError::InvalidArgument {
                    argument: "column".to_string(),
                    reason: format!("column '{name}' not found"),
                    suggestion: Some(format!("Available columns: {}", self.headers.join(", "))),
                })?;
            return Ok((self.headers[idx].clone(), self.parse_column(idx)?));
        }

        for candidate in VALUE_COLUMN_CANDIDATES {
            if let Some(&idx) = self.column_map.get(candidate) {
                return Ok((self.headers[idx].clone(), self.parse_column(idx)?));
            }
        }

        let mut numeric: Vec<usize> = self
            .cells
            .keys()
            .copied()
            .filter(|&idx| self.is_numeric_column(idx))
            .collect();
        numeric.sort_unstable();

        match numeric.as_slice() {
            [idx] => Ok((self.headers[*idx].clone(), self.parse_column(*idx)?)),
            _ => Err(CliError::CsvParseError {
                message: format!(
                    "no value column found (expected one of '{}', or a single numeric column); \
                     use -c to choose one of: {}",
                    VALUE_COLUMN_CANDIDATES.join("', '"),
                    self.headers.join(", ")
                ),
                line: None,
            }),
        }
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    let normalized = normalize_header(header);
    matches!(
        normalized.as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: None,
        })
    }
}

/// Counts line terminators in `bytes`, CRLF counting once.
fn count_line_breaks(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

/// Skips the blank lines the reader passed over before a record.
///
/// `start` is where the previous record ended, which can be between the CR
/// and LF of its terminator. Returns the number of blank lines and the offset
/// of the record's first byte.
fn skip_blank_lines(data: &[u8], start: usize) -> (usize, usize) {
    let mut pos = start;
    if pos > 0 && data.get(pos - 1) == Some(&b'\r') && data.get(pos) == Some(&b'\n') {
        pos += 1;
    }
    let mut blank = 0;
    while let Some(&b) = data.get(pos) {
        match b {
            b'\n' => pos += 1,
            b'\r' if data.get(pos + 1) == Some(&b'\n') => pos += 2,
            b'\r' => pos += 1,
            _ => break,
        }
        blank += 1;
    }
    (blank, pos)
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_csv_bytes(&data)
}

/// Parse CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
///
/// # Errors
///
/// Returns `CliError::IoError` if the reader fails, or
/// `CliError::CsvParseError` if the CSV is malformed or has no headers.
pub fn parse_csv_from_reader<R: Read>(mut reader: R) -> Result<ParsedCsv> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_csv_bytes(&data)
}

fn parse_csv_bytes(data: &[u8]) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    let mut date_column_idx: Option<usize> = None;

    for (idx, header) in headers.iter().enumerate() {
        if is_date_column(header) {
            date_column_idx.get_or_insert(idx);
        } else {
            column_map.entry(normalize_header(header)).or_insert(idx);
        }
    }

    let mut cells: HashMap<usize, Vec<String>> =
        column_map.values().map(|&idx| (idx, Vec::new())).collect();
    let mut dates: Vec<String> = Vec::new();
    let mut lines: Vec<usize> = Vec::new();

    let mut push_row = |record: Option<&StringRecord>, line: usize| {
        // Short rows in a flexible CSV read as empty cells
        let cell = |idx: usize| record.and_then(|r| r.get(idx)).unwrap_or("").to_string();
        if let Some(date_idx) = date_column_idx {
            dates.push(cell(date_idx));
        }
        for (&col_idx, values) in &mut cells {
            values.push(cell(col_idx));
        }
        lines.push(line);
    };

    let single_column = headers.len() == 1;
    let mut line = 1;
    let mut scanned = 0;
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let start = record
            .position()
            .and_then(|p| usize::try_from(p.byte()).ok())
            .unwrap_or(scanned);
        let (blank, first_byte) = skip_blank_lines(data, start);
        line += count_line_breaks(&data[scanned..first_byte]);
        scanned = first_byte;

        if single_column {
            for blank_line in line - blank..line {
                push_row(None, blank_line);
            }
        }
        push_row(Some(&record), line);
    }

    Ok(ParsedCsv {
        headers,
        column_map,
        dates: date_column_idx.map(|_| dates),
        cells,
        lines,
    })
}

/// Parse a CSV file and select its value column.
///
/// # Errors
///
/// Returns any error of [`parse_csv`] or [`ParsedCsv::value_column`].
pub fn parse_series<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Series> {
    series_from_parsed(parse_csv(path)?, column)
}

/// Parse CSV data from a reader and select its value column.
///
/// # Errors
///
/// Returns any error of [`parse_csv_from_reader`] or
/// [`ParsedCsv::value_column`].
pub fn parse_series_from_reader<R: Read>(reader: R, column: Option<&str>) -> Result<Series> {
    series_from_parsed(parse_csv_from_reader(reader)?, column)
}

fn series_from_parsed(parsed: ParsedCsv, column: Option<&str>) -> Result<Series> {
    let (column, values) = parsed.value_column(column)?;
    Ok(Series {
        column,
        values,
        dates: parsed.dates,
    })
}
