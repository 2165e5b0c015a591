//! Cumulative (expanding) mean with an additive offset.
//!
//! ```text
//! output[i] = initial_value + (x[0] + ... + x[i]) / (i + 1)
//! ```
//!
//! The running sum is the same accumulator the cumulative sum uses, divided
//! by the 1-based position at each step. Empty input yields empty output.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::mean::cumulative_mean_init;
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! let result = cumulative_mean_init(&x, 10.0).unwrap();
//! assert_eq!(result[0], 11.0);
//! assert_eq!(result[1], 9.5);
//! assert!((result[2] - 32.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::running::{mean_at, RunningSum};
use crate::traits::{validate_output_len, SeriesElement};

use super::DEFAULT_OFFSET;

/// Returns the minimum input length accepted by the cumulative mean.
#[inline]
#[must_use]
pub const fn cumulative_mean_min_len() -> usize {
    0
}

/// Computes the cumulative mean of `data`, offset by `initial_value`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a position count cannot be
/// represented in `T`. This cannot happen for `f32` or `f64`.
#[must_use = "this returns a Result with the cumulative means, which should be used"]
pub fn cumulative_mean_init<T: SeriesElement>(data: &[T], initial_value: T) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); data.len()];
    compute_mean_core(data, initial_value, &mut output)?;
    Ok(output)
}

/// Computes the cumulative mean with the default offset of `0.0`.
///
/// # Errors
///
/// See [`cumulative_mean_init`].
#[must_use = "this returns a Result with the cumulative means, which should be used"]
pub fn cumulative_mean<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    cumulative_mean_init(data, T::from_f64(DEFAULT_OFFSET)?)
}

/// Computes the cumulative mean into a pre-allocated output buffer.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
#[must_use = "this returns a Result with the count of values written"]
pub fn cumulative_mean_init_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    validate_output_len(data.len(), output.len(), "cumulative_mean")?;
    compute_mean_core(data, initial_value, output)?;
    Ok(data.len())
}

fn compute_mean_core<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<()> {
    let mut running = RunningSum::new();
    for (i, (out, &x)) in output.iter_mut().zip(data).enumerate() {
        *out = initial_value + mean_at(running.step(x), i)?;
    }
    Ok(())
}
