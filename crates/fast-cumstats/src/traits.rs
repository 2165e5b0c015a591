//! Core traits for fast-cumstats numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every cumulative
//! statistic can be written once. [`ValidatedInput`] carries the input checks
//! shared by the statistics that need a non-empty series, and
//! [`validate_output_len`] the check shared by every `_into` variant.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::traits::{SeriesElement, ValidatedInput};
//!
//! fn first_plus<T: SeriesElement>(data: &[T], offset: T) -> fast_cumstats::Result<T> {
//!     data.validate_not_empty()?;
//!     Ok(data[0] + offset)
//! }
//!
//! assert_eq!(first_plus(&[2.0_f64, 3.0], 1.0).unwrap(), 3.0);
//! assert!(first_plus::<f64>(&[], 1.0).is_err());
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// The bounds are those of `num_traits::Float` plus `Send + Sync`, so results
/// can be moved across threads by callers that fan work out themselves.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Used by the cumulative mean to turn the 1-based position into a divisor.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before a cumulative statistic runs.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that an output buffer can hold `required` values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` naming `operation` if `actual < required`.
#[inline]
pub const fn validate_output_len(
    required: usize,
    actual: usize,
    operation: &'static str,
) -> Result<()> {
    if actual < required {
        Err(Error::BufferTooSmall {
            required,
            actual,
            operation,
        })
    } else {
        Ok(())
    }
}
