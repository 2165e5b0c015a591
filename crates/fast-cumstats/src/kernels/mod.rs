//! Fold kernels for cumulative statistics.
//!
//! The accumulators in [`running`] hold the only state a cumulative
//! statistic needs: one running value. They are internal to the crate; the
//! public API is the whole-series functions in [`crate::cumulative`] and
//! [`crate::batch`].

pub(crate) mod running;
