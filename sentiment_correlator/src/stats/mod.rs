//! Pearson correlation and its windowed variants.
//!
//! Three entrypoints, all computed over the same aligned (sentiment, return)
//! population:
//! - [`pearson`]: coefficient + two-sided p-value over the full series.
//! - [`rolling_correlation`]: coefficient over each trailing window of fixed
//!   size, per ticker.
//! - [`lagged_correlation`]: coefficient + p-value with the sentiment series
//!   shifted back by 1..=max_lag rows, per ticker.
//!
//! Numeric contract: a correlation over fewer than 2 points is an error, and
//! a zero-variance series is an error rather than a silent NaN. The windowed
//! variants soften both cases to "position undefined" / "pair omitted", which
//! matches how the trailing-window statistics are consumed.

pub mod pearson;
pub mod windows;

pub use pearson::pearson;
pub use windows::{lagged_correlation, rolling_correlation};

use thiserror::Error;

/// Statistical edge cases that abort a correlation computation.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Fewer than 2 aligned observations.
    #[error("insufficient data points for correlation: n = {n}, need at least 2")]
    InsufficientData { n: usize },

    /// One of the input series is constant, so the coefficient is undefined.
    #[error("zero variance in the {series} series, correlation is undefined")]
    DegenerateInput { series: &'static str },
}
