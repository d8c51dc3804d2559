//! Keyword and bigram frequencies over cleaned headline tokens.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::news::NewsRecord;
use crate::scoring::Tokenizer;

/// Most frequent unigrams and bigrams across all headlines.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordSummary {
    /// (word, occurrences), most frequent first.
    pub top_keywords: Vec<(String, usize)>,

    /// ("first second", occurrences), most frequent first. Bigrams never
    /// span headline boundaries.
    pub top_bigrams: Vec<(String, usize)>,
}

pub fn extract_keywords(
    tokenizer: &Tokenizer,
    records: &[NewsRecord],
    num_keywords: usize,
    num_bigrams: usize,
) -> KeywordSummary {
    let mut words: HashMap<String, usize> = HashMap::new();
    let mut bigrams: HashMap<String, usize> = HashMap::new();

    for record in records {
        let tokens = tokenizer.tokens(&record.headline);
        for pair in tokens.windows(2) {
            *bigrams.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
        for token in tokens {
            *words.entry(token).or_insert(0) += 1;
        }
    }

    KeywordSummary {
        top_keywords: most_common(words, num_keywords),
        top_bigrams: most_common(bigrams, num_bigrams),
    }
}

/// Top `n` entries by count; ties broken alphabetically so the output is
/// deterministic.
fn most_common(counts: HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(headline: &str) -> NewsRecord {
        NewsRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            headline: headline.to_string(),
            publisher: "Wire".to_string(),
            ticker: None,
        }
    }

    #[test]
    fn counts_unigrams_and_bigrams() {
        let records = vec![
            record("earnings beat estimates"),
            record("earnings beat forecasts"),
            record("quiet trading day"),
        ];
        let tokenizer = Tokenizer::new();
        let summary = extract_keywords(&tokenizer, &records, 3, 2);

        assert_eq!(summary.top_keywords[0], ("beat".to_string(), 2));
        assert!(summary.top_keywords.iter().any(|(w, c)| w == "earnings" && *c == 2));
        assert_eq!(summary.top_bigrams[0], ("earnings beat".to_string(), 2));
    }

    #[test]
    fn bigrams_stay_within_a_headline() {
        let records = vec![record("alpha beta"), record("gamma delta")];
        let tokenizer = Tokenizer::new();
        let summary = extract_keywords(&tokenizer, &records, 10, 10);
        assert!(!summary.top_bigrams.iter().any(|(b, _)| b == "beta gamma"));
    }
}
