//! Running accumulators shared by the single-statistic functions and the
//! batch pass.
//!
//! Each accumulator performs exactly one fold step per input value and
//! returns the raw running value (before any offset or seed is applied).
//! Both code paths drive the same step functions, which is what makes the
//! batch output bit-identical to the individual statistics.
//!
//! # Fold steps
//!
//! ```text
//! sum:     s   = s + x                    (s starts at 0)
//! product: p   = p * (1 + x)              (p starts at 1)
//! min:     m   = x if x < m else m        (m starts at x[0])
//! max:     m   = x if x > m else m        (m starts at x[0])
//! mean:    s / (i + 1)                    (reuses the running sum)
//! ```
//!
//! The extrema compare with a strict `<` / `>`, so ties and NaN inputs never
//! replace the running value, and a NaN seed is never replaced.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Running total.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningSum<T> {
    total: T,
}

impl<T: SeriesElement> RunningSum<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { total: T::zero() }
    }

    #[inline]
    pub(crate) fn step(&mut self, value: T) -> T {
        self.total = self.total + value;
        self.total
    }
}

/// Running growth-factor product, `Π (1 + x)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningGrowth<T> {
    product: T,
}

impl<T: SeriesElement> RunningGrowth<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { product: T::one() }
    }

    #[inline]
    pub(crate) fn step(&mut self, value: T) -> T {
        self.product = self.product * (T::one() + value);
        self.product
    }
}

/// Running minimum seeded from the first element.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningMin<T> {
    current: T,
}

impl<T: SeriesElement> RunningMin<T> {
    #[inline]
    pub(crate) const fn seeded(first: T) -> Self {
        Self { current: first }
    }

    #[inline]
    pub(crate) fn step(&mut self, value: T) -> T {
        if value < self.current {
            self.current = value;
        }
        self.current
    }
}

/// Running maximum seeded from the first element.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningMax<T> {
    current: T,
}

impl<T: SeriesElement> RunningMax<T> {
    #[inline]
    pub(crate) const fn seeded(first: T) -> Self {
        Self { current: first }
    }

    #[inline]
    pub(crate) fn step(&mut self, value: T) -> T {
        if value > self.current {
            self.current = value;
        }
        self.current
    }
}

/// Divides a running sum by the 1-based position `index + 1`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `index + 1` is not representable in `T`.
#[inline]
pub(crate) fn mean_at<T: SeriesElement>(running_sum: T, index: usize) -> Result<T> {
    Ok(running_sum / T::from_usize(index + 1)?)
}
