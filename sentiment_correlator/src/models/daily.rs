//! Daily aggregates and the aligned table the correlator consumes.
//!
//! All three shapes are derived once per run and keyed on (date, ticker);
//! the join key is unique on both sides before merging; duplicate dates per
//! ticker are pre-aggregated by the pipeline stages that build these rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean sentiment over all headlines for one (date, ticker) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,

    /// `None` when the news table has no ticker column; such rows only join
    /// against ticker-less return series.
    pub ticker: Option<String>,

    /// Arithmetic mean of the group's polarity scores.
    pub avg_sentiment: f64,
}

/// Fractional close-to-close return for one (date, ticker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    pub date: NaiveDate,

    pub ticker: Option<String>,

    /// `close[i] / close[i-1] - 1`; `None` for the first observation of each
    /// ticker, where no previous close exists.
    pub ret: Option<f64>,
}

/// Inner join of [`DailySentiment`] and [`DailyReturn`] on (date, ticker).
///
/// Rows where either side was null are dropped before this struct is built,
/// so `ret` is not optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub ticker: Option<String>,
    pub sentiment: f64,
    pub ret: f64,
}
