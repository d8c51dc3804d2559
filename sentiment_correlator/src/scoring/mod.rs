//! Polarity estimation for headlines.
//!
//! This module defines the [`SentimentScorer`] trait, the unified interface
//! for mapping text to a polarity score in [-1, 1]. Any estimator satisfying
//! the contract is substitutable; the bundled [`LexiconScorer`] is a
//! rule-based implementation over a financial word list.
//!
//! A scorer is constructed once, up front, and passed into the pipeline
//! explicitly; there is no process-wide scorer state to initialize.
//!
//! # Example
//!
//! ```rust
//! use sentiment_correlator::scoring::SentimentScorer;
//!
//! struct Uniform;
//!
//! impl SentimentScorer for Uniform {
//!     fn score(&self, _text: &str) -> f64 {
//!         0.0
//!     }
//! }
//! ```

pub mod lexicon;
pub mod tokenize;

pub use lexicon::LexiconScorer;
pub use tokenize::Tokenizer;

use crate::models::news::{NewsRecord, ScoredNews, SentimentCategory};

/// Maps a piece of text to a polarity score.
///
/// Implementations must be deterministic, pure functions of the text and
/// should return values in [-1, 1]; the pipeline clamps to that range as a
/// guard against non-conforming estimators.
pub trait SentimentScorer {
    /// Polarity of `text`: negative is unfavorable, positive is favorable.
    fn score(&self, text: &str) -> f64;
}

/// Scores every headline independently; 1:1 with the input records.
///
/// No state is shared between calls, so record order has no effect on any
/// individual score.
pub fn score_news(scorer: &dyn SentimentScorer, records: Vec<NewsRecord>) -> Vec<ScoredNews> {
    records
        .into_iter()
        .map(|record| {
            let sentiment = scorer.score(&record.headline).clamp(-1.0, 1.0);
            ScoredNews {
                record,
                sentiment,
                category: SentimentCategory::from_score(sentiment),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct OutOfRange;

    impl SentimentScorer for OutOfRange {
        fn score(&self, _text: &str) -> f64 {
            3.5
        }
    }

    fn record(headline: &str) -> NewsRecord {
        NewsRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            headline: headline.to_string(),
            publisher: "Wire".to_string(),
            ticker: Some("AAPL".to_string()),
        }
    }

    #[test]
    fn scores_are_clamped_and_categorized() {
        let scored = score_news(&OutOfRange, vec![record("anything")]);
        assert_eq!(scored[0].sentiment, 1.0);
        assert_eq!(scored[0].category, SentimentCategory::Positive);
    }
}
