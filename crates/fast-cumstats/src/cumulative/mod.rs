//! Single-statistic cumulative transforms.
//!
//! Every function in this module maps an input series `x` of length `n` to an
//! output of length `n`, where position `i` depends only on `x[0..=i]`. Each
//! statistic takes an initial value:
//!
//! | statistic | formula for `output[i]` | default initial value |
//! |---|---|---|
//! | [`cumulative_sum_init`] | `init + Σ x[0..=i]` | [`DEFAULT_OFFSET`] |
//! | [`cumulative_product_init`] | `init × Π (1 + x[0..=i])` | [`DEFAULT_SEED`] |
//! | [`cumulative_min_init`] | `init + min x[0..=i]` | [`DEFAULT_OFFSET`] |
//! | [`cumulative_max_init`] | `init + max x[0..=i]` | [`DEFAULT_OFFSET`] |
//! | [`cumulative_mean_init`] | `init + Σ x[0..=i] / (i + 1)` | [`DEFAULT_OFFSET`] |
//!
//! The variants without the `_init` suffix apply the default initial value,
//! and the `_into` variants write into a caller-provided buffer.
//!
//! # Empty Input
//!
//! Sum, product and mean return an empty vector for empty input. Minimum and
//! maximum are seeded from the first element and return
//! [`EmptyInput`](crate::error::Error::EmptyInput) instead.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::cumulative::{cumulative_max_init, cumulative_sum_init};
//!
//! let x = vec![1.0_f64, -2.0, 3.0];
//! assert_eq!(cumulative_sum_init(&x, 10.0).unwrap(), vec![11.0, 9.0, 12.0]);
//! assert_eq!(cumulative_max_init(&x, 10.0).unwrap(), vec![11.0, 11.0, 13.0]);
//! ```

pub mod max;
pub mod mean;
pub mod min;
pub mod product;
pub mod sum;

/// Default offset for the additive statistics (sum, min, max, mean).
pub const DEFAULT_OFFSET: f64 = 0.0;

/// Default seed for the growth-factor product.
pub const DEFAULT_SEED: f64 = 1.0;

pub use max::{cumulative_max, cumulative_max_init, cumulative_max_init_into, cumulative_max_min_len};
pub use mean::{
    cumulative_mean, cumulative_mean_init, cumulative_mean_init_into, cumulative_mean_min_len,
};
pub use min::{cumulative_min, cumulative_min_init, cumulative_min_init_into, cumulative_min_min_len};
pub use product::{
    cumulative_product, cumulative_product_init, cumulative_product_init_into,
    cumulative_product_min_len,
};
pub use sum::{cumulative_sum, cumulative_sum_init, cumulative_sum_init_into, cumulative_sum_min_len};
