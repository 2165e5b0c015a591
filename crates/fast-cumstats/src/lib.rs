//! fast-cumstats: Fast cumulative statistics for financial series
//!
//! This crate provides single-pass cumulative transforms over one-dimensional
//! series, each taking an initial value that offsets (or, for the product,
//! seeds) every output:
//!
//! - cumulative sum, minimum, maximum and mean, plus an additive offset
//! - cumulative growth-factor product `Π (1 + x[i])`, times a seed
//! - a batch pass computing all five into one row-major table
//!
//! # Features
//!
//! - **Performance**: O(n), one pass, no auxiliary allocation
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Safety**: Empty input to the first-element-seeded statistics is a typed
//!   error, never an out-of-bounds read
//!
//! # Quick Start
//!
//! ```
//! use fast_cumstats::prelude::*;
//!
//! let returns = vec![0.02_f64, -0.01, 0.03];
//!
//! let equity = cumulative_product_init(&returns, 1000.0).unwrap();
//! assert!((equity[2] - 1000.0 * 1.02 * 0.99 * 1.03).abs() < 1e-9);
//!
//! let stats = batch_cumulative_stats(&returns, 0.0).unwrap();
//! assert_eq!(stats.len(), 3);
//! assert_eq!(stats.get(0, StatColumn::Max), Some(0.02));
//! ```
//!
//! # Error Handling
//!
//! All functions return [`Result<T, Error>`]:
//!
//! ```
//! use fast_cumstats::prelude::*;
//!
//! let empty: Vec<f64> = vec![];
//!
//! // Sum, product and mean accept empty input
//! assert!(cumulative_sum_init(&empty, 0.0).unwrap().is_empty());
//!
//! // Min, max and the batch pass are seeded from the first element
//! assert_eq!(cumulative_min_init(&empty, 0.0), Err(Error::EmptyInput));
//! assert!(batch_cumulative_stats(&empty, 0.0).is_err());
//! ```
//!
//! # NaN and Infinity
//!
//! Non-finite values are not detected; they propagate by IEEE-754 rules.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod cumulative;
pub mod error;
mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use batch::{batch_cumulative_stats, CumulativeStats, StatColumn, COLUMN_NAMES};
pub use cumulative::{
    cumulative_max_init, cumulative_mean_init, cumulative_min_init, cumulative_product_init,
    cumulative_sum_init, DEFAULT_OFFSET, DEFAULT_SEED,
};
pub use error::{Error, Result};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, bitwise_eq, EPSILON};
