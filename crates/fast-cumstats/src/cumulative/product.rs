//! Cumulative growth-factor product with a multiplicative seed.
//!
//! Each input is treated as a per-period return, so the product compounds
//! the growth factors `1 + x[i]` rather than the raw values:
//!
//! ```text
//! P[i]      = (1 + x[0]) * (1 + x[1]) * ... * (1 + x[i])
//! output[i] = initial_value * P[i]
//! ```
//!
//! With `initial_value` set to a starting capital, `output` is the equity
//! curve of a series of simple returns.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::product::cumulative_product_init;
//!
//! // +10% then -10% on a starting value of 100
//! let returns = vec![0.1_f64, -0.1];
//! let equity = cumulative_product_init(&returns, 100.0).unwrap();
//! assert!((equity[0] - 110.0).abs() < 1e-10);
//! assert!((equity[1] - 99.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::kernels::running::RunningGrowth;
use crate::traits::{validate_output_len, SeriesElement};

use super::DEFAULT_SEED;

/// Returns the minimum input length accepted by the cumulative product.
#[inline]
#[must_use]
pub const fn cumulative_product_min_len() -> usize {
    0
}

/// Computes the cumulative growth-factor product of `data`, scaled by
/// `initial_value`.
///
/// A return of exactly `-1.0` zeroes every later output; NaN inputs make
/// every later output NaN.
///
/// # Errors
///
/// This function does not fail for any input.
#[must_use = "this returns a Result with the cumulative products, which should be used"]
pub fn cumulative_product_init<T: SeriesElement>(data: &[T], initial_value: T) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); data.len()];
    compute_product_core(data, initial_value, &mut output);
    Ok(output)
}

/// Computes the cumulative growth-factor product with the default seed of `1.0`.
///
/// # Errors
///
/// This function does not fail for any input.
///
/// # Example
///
/// ```
/// use fast_cumstats::cumulative::product::cumulative_product;
///
/// assert_eq!(cumulative_product(&[5.0_f64]).unwrap(), vec![6.0]);
/// ```
#[must_use = "this returns a Result with the cumulative products, which should be used"]
pub fn cumulative_product<T: SeriesElement>(data: &[T]) -> Result<Vec<T>> {
    cumulative_product_init(data, T::from_f64(DEFAULT_SEED)?)
}

/// Computes the cumulative growth-factor product into a pre-allocated buffer.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `data`.
#[must_use = "this returns a Result with the count of values written"]
pub fn cumulative_product_init_into<T: SeriesElement>(
    data: &[T],
    initial_value: T,
    output: &mut [T],
) -> Result<usize> {
    validate_output_len(data.len(), output.len(), "cumulative_product")?;
    compute_product_core(data, initial_value, output);
    Ok(data.len())
}

fn compute_product_core<T: SeriesElement>(data: &[T], initial_value: T, output: &mut [T]) {
    let mut running = RunningGrowth::new();
    for (out, &x) in output.iter_mut().zip(data) {
        *out = initial_value * running.step(x);
    }
}
