//! All five cumulative statistics in a single pass.
//!
//! [`batch_cumulative_stats`] walks the input once and drives the sum,
//! growth-product, minimum and maximum accumulators side by side, deriving
//! the mean from the running sum. Each input element is loaded once and each
//! output row is written contiguously, which is the whole point over calling
//! the five single-statistic functions back to back.
//!
//! The results are bit-identical to those functions called with the same
//! input and initial value, because both paths use the same fold steps.
//!
//! # Output Layout
//!
//! [`CumulativeStats`] is a row-major table with `n` rows and five columns,
//! in the order of [`COLUMN_NAMES`]:
//!
//! ```text
//! row i: [cum_sum[i], cum_prod[i], cum_min[i], cum_max[i], cum_mean[i]]
//! ```
//!
//! One `initial_value` is shared by every column: it is added for sum, min,
//! max and mean, and multiplied for the product. With the usual offset of
//! `0.0` the product column is therefore all zeros; compute the product
//! separately when it needs a seed of `1.0`.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::batch::{batch_cumulative_stats, StatColumn};
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! let stats = batch_cumulative_stats(&x, 10.0).unwrap();
//!
//! assert_eq!(stats.len(), 3);
//! assert_eq!(stats.column(StatColumn::Sum), vec![11.0, 9.0, 12.0]);
//! assert_eq!(stats.column(StatColumn::Product), vec![20.0, -20.0, -80.0]);
//! assert_eq!(stats.row(0), Some([11.0, 20.0, 11.0, 11.0, 11.0]));
//! ```

use crate::error::Result;
use crate::kernels::running::{mean_at, RunningGrowth, RunningMax, RunningMin, RunningSum};
use crate::traits::{validate_output_len, SeriesElement, ValidatedInput};

/// Number of columns in a [`CumulativeStats`] table.
pub const NUM_COLUMNS: usize = 5;

/// Column labels of a [`CumulativeStats`] table, in storage order.
pub const COLUMN_NAMES: [&str; NUM_COLUMNS] =
    ["cum_sum", "cum_prod", "cum_min", "cum_max", "cum_mean"];

/// One column of a [`CumulativeStats`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatColumn {
    /// Cumulative sum plus offset.
    Sum,
    /// Cumulative growth-factor product times seed.
    Product,
    /// Cumulative minimum plus offset.
    Min,
    /// Cumulative maximum plus offset.
    Max,
    /// Cumulative mean plus offset.
    Mean,
}

impl StatColumn {
    /// All columns in storage order.
    pub const ALL: [Self; NUM_COLUMNS] = [Self::Sum, Self::Product, Self::Min, Self::Max, Self::Mean];

    /// Position of this column within a row.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sum => 0,
            Self::Product => 1,
            Self::Min => 2,
            Self::Max => 3,
            Self::Mean => 4,
        }
    }

    /// Column label, e.g. `"cum_sum"`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        COLUMN_NAMES[self.index()]
    }

    /// Looks a column up by its label.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_cumstats::batch::StatColumn;
    ///
    /// assert_eq!(StatColumn::from_name("cum_max"), Some(StatColumn::Max));
    /// assert_eq!(StatColumn::from_name("cum_var"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Output of [`batch_cumulative_stats`]: `n` rows by five columns, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeStats<T> {
    values: Vec<T>,
}

impl<T: SeriesElement> CumulativeStats<T> {
    /// Number of rows (equal to the input length).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() / NUM_COLUMNS
    }

    /// Returns true if the table has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns row `i` as `[cum_sum, cum_prod, cum_min, cum_max, cum_mean]`.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<[T; NUM_COLUMNS]> {
        let start = i.checked_mul(NUM_COLUMNS)?;
        let row = self.values.get(start..start.checked_add(NUM_COLUMNS)?)?;
        let mut out = [T::zero(); NUM_COLUMNS];
        out.copy_from_slice(row);
        Some(out)
    }

    /// Returns a single cell.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, column: StatColumn) -> Option<T> {
        if i >= self.len() {
            return None;
        }
        self.values.get(i * NUM_COLUMNS + column.index()).copied()
    }

    /// Iterates over the rows in input order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.values.chunks_exact(NUM_COLUMNS)
    }

    /// Copies one column out into its own vector.
    #[must_use]
    pub fn column(&self, column: StatColumn) -> Vec<T> {
        self.rows().map(|row| row[column.index()]).collect()
    }

    /// The underlying row-major buffer of `len() * 5` values.
    #[inline]
    #[must_use]
    pub fn as_row_major(&self) -> &[T] {
        &self.values
    }

    /// Consumes the table and returns the row-major buffer.
    #[inline]
    #[must_use]
    pub fn into_row_major(self) -> Vec<T> {
        self.values
    }
}

/// Returns the minimum input length accepted by the batch pass.
#[inline]
#[must_use]
pub const fn batch_cumulative_stats_min_len() -> usize {
    1
}

/// Computes cumulative sum, growth product, minimum, maximum and mean of
/// `data` in one traversal.
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - A position count cannot be represented in `T` (`Error::NumericConversion`)
///
/// # Performance
///
/// - Time complexity: O(n), one pass
/// - Space complexity: O(5n) for the output table
#[must_use = "this returns a Result with the cumulative statistics table, which should be used"]
pub fn batch_cumulative_stats<T: SeriesElement>(
    data: &[T],
    initial_value: T,
) -> Result<CumulativeStats<T>> {
    data.validate_not_empty()?;

    let mut values = vec![T::zero(); data.len() * NUM_COLUMNS];
    compute_batch_core(data, initial_value, &mut values)?;
    Ok(CumulativeStats { values })
}

/// Computes the batch statistics into a caller-provided row-major buffer.
///
/// `output` must hold at least `data.len() * 5` values; row `i` is written to
/// `output[i * 5..i * 5 + 5]`.
///
/// # Returns
///
/// The number of rows written (always `data.len()`).
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - The output buffer is smaller than `data.len() * 5` (`Error::BufferTooSmall`)
///
/// # Example
///
/// ```
/// use fast_cumstats::batch::{batch_cumulative_stats_into, NUM_COLUMNS};
///
/// let x = vec![5.0_f64];
/// let mut out = vec![0.0_f64; x.len() * NUM_COLUMNS];
/// assert_eq!(batch_cumulative_stats_into(&x, 0.0, &mut out).unwrap(), 1);
/// assert_eq!(out, vec![5.0, 0.0, 5.0, 5.0, 5.0]);
/// ```
#[must_use = "this returns a Result with the count of rows written"]
pub fn batch_cumulative_stats_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    data.validate_not_empty()?;
    validate_output_len(
        data.len() * NUM_COLUMNS,
        output.len(),
        "batch_cumulative_stats",
    )?;

    compute_batch_core(data, initial_value, output)?;
    Ok(data.len())
}

/// `data` must be non-empty and `output` at least `5 * data.len()` long.
fn compute_batch_core<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<()> {
    let mut sum = RunningSum::new();
    let mut growth = RunningGrowth::new();
    let mut min = RunningMin::seeded(data[0]);
    let mut max = RunningMax::seeded(data[0]);

    for (i, (row, &x)) in output.chunks_exact_mut(NUM_COLUMNS).zip(data).enumerate() {
        let running_sum = sum.step(x);
        row[0] = initial_value + running_sum;
        row[1] = initial_value * growth.step(x);
        row[2] = initial_value + min.step(x);
        row[3] = initial_value + max.step(x);
        row[4] = initial_value + mean_at(running_sum, i)?;
    }
    Ok(())
}
