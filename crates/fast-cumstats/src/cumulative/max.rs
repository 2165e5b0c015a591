//! Cumulative maximum with an additive offset.
//!
//! Mirror image of [`min`](super::min): the running maximum is seeded from
//! `x[0]` and replaced only when `x[i] > m`. Empty input is rejected, and the
//! same IEEE-754 NaN rules apply (a NaN after the seed is never selected, a
//! NaN seed is never replaced).
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::max::cumulative_max_init;
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! assert_eq!(cumulative_max_init(&x, 10.0).unwrap(), vec![11.0, 11.0, 13.0]);
//! ```

use crate::error::Result;
use crate::kernels::running::RunningMax;
use crate::traits::{validate_output_len, SeriesElement, ValidatedInput};

use super::DEFAULT_OFFSET;

/// Returns the minimum input length accepted by the cumulative maximum.
#[inline]
#[must_use]
pub const fn cumulative_max_min_len() -> usize {
    1
}

/// Computes the cumulative maximum of `data`, offset by `initial_value`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
#[must_use = "this returns a Result with the cumulative maximums, which should be used"]
pub fn cumulative_max_init<T: SeriesElement>(data: &[T], initial_value: T) -> Result<Vec<T>> {
    data.validate_not_empty()?;

    let mut output = vec![T::zero(); data.len()];
    compute_max_core(data, initial_value, &mut output);
    Ok(output)
}

/// Computes the cumulative maximum with the default offset of `0.0`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
#[must_use = "this returns a Result with the cumulative maximums, which should be used"]
pub fn cumulative_max<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    cumulative_max_init(data, T::from_f64(DEFAULT_OFFSET)?)
}

/// Computes the cumulative maximum into a pre-allocated output buffer.
///
/// # Errors
///
/// Returns an error if:
/// - The input data is empty (`Error::EmptyInput`)
/// - The output buffer is shorter than the input (`Error::BufferTooSmall`)
#[must_use = "this returns a Result with the count of values written"]
pub fn cumulative_max_init_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    data.validate_not_empty()?;
    validate_output_len(data.len(), output.len(), "cumulative_max")?;

    compute_max_core(data, initial_value, output);
    Ok(data.len())
}

/// `data` must be non-empty.
fn compute_max_core<T: SeriesElement>(data: &[T], initial_value: T, output: &mut [T]) {
    let mut running = RunningMax::seeded(data[0]);
    for (out, &x) in output.iter_mut().zip(data) {
        *out = initial_value + running.step(x);
    }
}
