//! Headline tokenization shared by the lexicon scorer and keyword analysis.

use std::collections::HashSet;

/// English stopwords that carry no polarity or topical signal in headlines.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
    "more", "most", "my", "new", "nor", "now", "of", "on", "once", "only", "or", "other",
    "our", "out", "own", "said", "same", "says", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "until", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

/// Lowercasing, punctuation-stripping, stopword-filtering tokenizer.
///
/// Built once (the stopword set is materialized at construction) and passed
/// to whatever needs tokens, rather than re-assembled per call.
pub struct Tokenizer {
    stopwords: HashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Splits `text` into lowercase alphabetic tokens, dropping stopwords and
    /// single letters.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|w| w.len() > 1 && !self.stopwords.contains(w))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_case_and_stopwords() {
        let t = Tokenizer::new();
        assert_eq!(
            t.tokens("Apple's Q3 profits SURGE, beating the estimates!"),
            vec!["apple", "profits", "surge", "beating", "estimates"]
        );
    }

    #[test]
    fn single_letters_are_dropped() {
        let t = Tokenizer::new();
        assert!(t.tokens("a b c").is_empty());
    }
}
