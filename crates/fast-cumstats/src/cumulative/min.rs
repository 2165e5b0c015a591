//! Cumulative minimum with an additive offset.
//!
//! # Algorithm
//!
//! ```text
//! m = x[0]
//! for each i: if x[i] < m { m = x[i] }
//!             output[i] = initial_value + m
//! ```
//!
//! The running minimum is seeded from the first element, so the input must not
//! be empty. The check happens before any element is read.
//!
//! # NaN Handling
//!
//! IEEE-754 comparison rules apply unchanged. Every comparison with NaN is
//! false, so a NaN after the first element is never selected, while a NaN in
//! the first position stays the running minimum for the whole series. Note
//! that this differs from [`Float::min`](num_traits::Float::min), which skips
//! NaN operands.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::min::cumulative_min_init;
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! assert_eq!(cumulative_min_init(&x, 10.0).unwrap(), vec![11.0, 8.0, 8.0]);
//! ```

use crate::error::Result;
use crate::kernels::running::RunningMin;
use crate::traits::{validate_output_len, SeriesElement, ValidatedInput};

use super::DEFAULT_OFFSET;

/// Returns the minimum input length accepted by the cumulative minimum.
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::min::cumulative_min_min_len;
///
/// assert_eq!(cumulative_min_min_len(), 1);
/// ```
#[inline]
#[must_use]
pub const fn cumulative_min_min_len() -> usize {
    1
}

/// Computes the cumulative minimum of `data`, offset by `initial_value`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::min::cumulative_min_init;
/// use fast_cumstats::Error;
///
/// let empty: Vec<f64> = vec![];
/// assert_eq!(cumulative_min_init(&empty, 0.0), Err(Error::EmptyInput));
/// ```
#[must_use = "this returns a Result with the cumulative minimums, which should be used"]
pub fn cumulative_min_init<T: SeriesElement>(data: &[T], initial_value: T) -> Result<Vec<T>> {
    data.validate_not_empty()?;

    let mut output = vec![T::zero(); data.len()];
    compute_min_core(data, initial_value, &mut output);
    Ok(output)
}

/// Computes the cumulative minimum with the default offset of `0.0`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
#[must_use = "this returns a Result with the cumulative minimums, which should be used"]
pub fn cumulative_min<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    cumulative_min_init(data, T::from_f64(DEFAULT_OFFSET)?)
}

/// Computes the cumulative minimum into a pre-allocated output buffer.
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - The output buffer is shorter than the input (`Error::BufferTooSmall`)
#[must_use = "this returns a Result with the count of values written"]
pub fn cumulative_min_init_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    data.validate_not_empty()?;
    validate_output_len(data.len(), output.len(), "cumulative_min")?;

    compute_min_core(data, initial_value, output);
    Ok(data.len())
}

/// `data` must be non-empty.
fn compute_min_core<T: SeriesElement>(data: &[T], initial_value: T, output: &mut [T]) {
    let mut running = RunningMin::seeded(data[0]);
    for (out, &x) in output.iter_mut().zip(data) {
        *out = initial_value + running.step(x);
    }
}
