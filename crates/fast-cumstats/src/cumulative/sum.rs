//! Cumulative sum with an additive offset.
//!
//! # Algorithm
//!
//! A single left-to-right running total:
//!
//! ```text
//! S[i]      = x[0] + x[1] + ... + x[i]
//! output[i] = initial_value + S[i]
//! ```
//!
//! The offset is added to each output rather than used as the starting total,
//! so `output[i] - initial_value` is exactly the running total.
//!
//! # NaN Handling
//!
//! No special handling: a NaN (or an `inf - inf`) in the input makes the
//! running total NaN, and every later output is NaN.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::sum::cumulative_sum_init;
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! let result = cumulative_sum_init(&x, 10.0).unwrap();
//! assert_eq!(result, vec![11.0, 9.0, 12.0]);
//! ```

use crate::error::Result;
use crate::kernels::running::RunningSum;
use crate::traits::{validate_output_len, SeriesElement};

use super::DEFAULT_OFFSET;

/// Returns the minimum input length accepted by the cumulative sum.
///
/// Empty input is valid and produces empty output.
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::sum::cumulative_sum_min_len;
///
/// assert_eq!(cumulative_sum_min_len(), 0);
/// ```
#[inline]
#[must_use]
pub const fn cumulative_sum_min_len() -> usize {
    0
}

/// Computes the cumulative sum of `data`, offset by `initial_value`.
///
/// # Arguments
///
/// * `data` - The input series
/// * `initial_value` - Offset added to every running total
///
/// # Returns
///
/// A vector of the same length as `data`. Empty input yields an empty vector.
///
/// # Errors
///
/// This function does not fail for any input; the `Result` keeps the
/// signature uniform with the other statistics.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector, O(1) auxiliary
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::sum::cumulative_sum_init;
///
/// let empty: Vec<f64> = vec![];
/// assert!(cumulative_sum_init(&empty, 5.0).unwrap().is_empty());
/// ```
#[must_use = "this returns a Result with the cumulative sums, which should be used"]
pub fn cumulative_sum_init<T: SeriesElement>(data: &[T], initial_value: T) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); data.len()];
    compute_sum_core(data, initial_value, &mut output);
    Ok(output)
}

/// Computes the cumulative sum with the default offset of `0.0`.
///
/// # Errors
///
/// Never fails; see [`cumulative_sum_init`].
#[must_use = "this returns a Result with the cumulative sums, which should be used"]
pub fn cumulative_sum<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    cumulative_sum_init(data, T::from_f64(DEFAULT_OFFSET)?)
}

/// Computes the cumulative sum into a pre-allocated output buffer.
///
/// Only the first `data.len()` slots of `output` are written.
///
/// # Returns
///
/// The number of values written (always `data.len()`).
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::sum::cumulative_sum_init_into;
///
/// let x = vec![1.0_f64, 2.0, 3.0];
/// let mut out = vec![0.0_f64; 3];
/// let written = cumulative_sum_init_into(&x, 0.0, &mut out).unwrap();
/// assert_eq!(written, 3);
/// assert_eq!(out, vec![1.0, 3.0, 6.0]);
/// ```
#[must_use = "this returns a Result with the count of values written"]
pub fn cumulative_sum_init_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    validate_output_len(data.len(), output.len(), "cumulative_sum")?;
    compute_sum_core(data, initial_value, output);
    Ok(data.len())
}

fn compute_sum_core<T: SeriesElement>(data: &[T], initial_value: T, output: &mut [T]) {
    let mut running = RunningSum::new();
    for (out, &x) in output.iter_mut().zip(data) {
        *out = initial_value + running.step(x);
    }
}
