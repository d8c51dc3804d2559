//! Canonical in-memory representation of a news headline and its scored form.
//!
//! [`NewsRecord`] is the standard output of the news loader; [`ScoredNews`] is
//! produced 1:1 from it by [`score_news`](crate::scoring::score_news) and is
//! never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single news headline, normalized to a calendar date.
///
/// Records are immutable once loaded; every derived table is built from
/// copies, never in-place edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Publication date (UTC calendar day).
    pub date: NaiveDate,

    /// Headline text as it appeared in the source table.
    pub headline: String,

    /// Publisher name.
    pub publisher: String,

    /// Ticker symbol the headline is tagged with, when the source table
    /// carries one (e.g. "AAPL").
    pub ticker: Option<String>,
}

/// Sentiment bucket derived from a polarity score by a pure threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// `Positive` iff score > 0, `Negative` iff score < 0, else `Neutral`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentCategory::Positive
        } else if score < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "positive",
            SentimentCategory::Negative => "negative",
            SentimentCategory::Neutral => "neutral",
        }
    }
}

/// A [`NewsRecord`] paired with its polarity score and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNews {
    /// The original record.
    pub record: NewsRecord,

    /// Polarity in [-1, 1]; negative is unfavorable, positive is favorable.
    pub sentiment: f64,

    /// Threshold bucket of `sentiment`.
    pub category: SentimentCategory,
}
