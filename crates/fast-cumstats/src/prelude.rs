//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_cumstats::prelude::*;
//!
//! let x = vec![1.0_f64, 2.0, 3.0];
//! let sums = cumulative_sum(&x).unwrap();
//! let means = cumulative_mean_init(&x, 100.0).unwrap();
//! assert_eq!(sums, vec![1.0, 3.0, 6.0]);
//! assert_eq!(means[2], 102.0);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Single-statistic functions
pub use crate::cumulative::{
    cumulative_max, cumulative_max_init, cumulative_mean, cumulative_mean_init, cumulative_min,
    cumulative_min_init, cumulative_product, cumulative_product_init, cumulative_sum,
    cumulative_sum_init,
};

// _into API for pre-allocated buffers
pub use crate::cumulative::{
    cumulative_max_init_into, cumulative_mean_init_into, cumulative_min_init_into,
    cumulative_product_init_into, cumulative_sum_init_into,
};

// Batch pass
pub use crate::batch::{
    batch_cumulative_stats, batch_cumulative_stats_into, CumulativeStats, StatColumn,
    COLUMN_NAMES, NUM_COLUMNS,
};

// Defaults and minimum lengths
pub use crate::batch::batch_cumulative_stats_min_len;
pub use crate::cumulative::{
    cumulative_max_min_len, cumulative_mean_min_len, cumulative_min_min_len,
    cumulative_product_min_len, cumulative_sum_min_len, DEFAULT_OFFSET, DEFAULT_SEED,
};
