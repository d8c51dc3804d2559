//! Correlation outputs and the tunable analysis parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pearson correlation between aligned sentiment and return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Linear correlation coefficient in [-1, 1].
    pub coefficient: f64,

    /// Two-sided significance p-value in [0, 1].
    pub p_value: f64,

    /// Number of aligned observations the statistic was computed over
    /// (always at least 2).
    pub n: usize,
}

/// One position of a trailing-window rolling correlation series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingPoint {
    pub ticker: Option<String>,

    /// Date of the window's last (most recent) row.
    pub date: NaiveDate,

    /// `None` until a full window of rows precedes this position, and for
    /// windows where either series has zero variance.
    pub corr: Option<f64>,
}

/// Correlation between returns and sentiment shifted back by `lag` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaggedCorrelation {
    pub ticker: Option<String>,

    /// Number of rows the sentiment series was shifted back by (>= 1).
    pub lag: usize,

    pub result: CorrelationResult,
}

/// Knobs for the windowed correlation variants.
///
/// Defaults: a 7-row trailing window and lags 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Trailing window size for the rolling correlation.
    #[serde(default = "default_rolling_window")]
    pub rolling_window: usize,

    /// Largest sentiment shift, in rows, for the lagged correlation.
    #[serde(default = "default_max_lag")]
    pub max_lag: usize,
}

fn default_rolling_window() -> usize {
    7
}

fn default_max_lag() -> usize {
    5
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            rolling_window: default_rolling_window(),
            max_lag: default_max_lag(),
        }
    }
}
