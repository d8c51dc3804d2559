//! Property checks on the scorer contract: any text scores into [-1, 1] and
//! the category bucket always agrees with the score's sign.

use proptest::prelude::*;
use sentiment_correlator::models::news::SentimentCategory;
use sentiment_correlator::scoring::{LexiconScorer, SentimentScorer};

proptest! {
    #[test]
    fn score_is_always_in_range(text in "\\PC{0,120}") {
        let scorer = LexiconScorer::new();
        let score = scorer.score(&text);
        prop_assert!((-1.0..=1.0).contains(&score), "score {score} out of range");
    }

    #[test]
    fn category_always_matches_score_sign(text in "\\PC{0,120}") {
        let scorer = LexiconScorer::new();
        let score = scorer.score(&text);
        let category = SentimentCategory::from_score(score);
        let expected = if score > 0.0 {
            SentimentCategory::Positive
        } else if score < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        };
        prop_assert_eq!(category, expected);
    }

    #[test]
    fn scoring_is_deterministic(text in "\\PC{0,120}") {
        let scorer = LexiconScorer::new();
        prop_assert_eq!(scorer.score(&text), scorer.score(&text));
    }
}
