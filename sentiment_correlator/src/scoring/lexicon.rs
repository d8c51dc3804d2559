//! Rule-based polarity estimation over a financial word list.

use std::collections::{HashMap, HashSet};

use crate::scoring::{SentimentScorer, Tokenizer};

/// Word-polarity weights for terms common in financial headlines. Weights
/// live in [-1, 1] so the averaged score stays in range by construction.
const WEIGHTED_TERMS: &[(&str, f64)] = &[
    // favorable
    ("beat", 0.6),
    ("beats", 0.6),
    ("bullish", 0.8),
    ("buy", 0.5),
    ("climb", 0.5),
    ("climbs", 0.5),
    ("confident", 0.5),
    ("exceed", 0.6),
    ("exceeds", 0.6),
    ("gain", 0.5),
    ("gains", 0.5),
    ("great", 0.6),
    ("growth", 0.6),
    ("high", 0.4),
    ("improve", 0.5),
    ("improves", 0.5),
    ("jump", 0.6),
    ("jumps", 0.6),
    ("optimistic", 0.6),
    ("outperform", 0.7),
    ("outperforms", 0.7),
    ("positive", 0.5),
    ("profit", 0.6),
    ("profits", 0.6),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("rebound", 0.5),
    ("rebounds", 0.5),
    ("record", 0.6),
    ("recovery", 0.5),
    ("rise", 0.5),
    ("rises", 0.5),
    ("soar", 0.8),
    ("soars", 0.8),
    ("strong", 0.5),
    ("surge", 0.7),
    ("surges", 0.7),
    ("up", 0.4),
    ("upgrade", 0.6),
    ("upgrades", 0.6),
    ("win", 0.5),
    ("wins", 0.5),
    // unfavorable
    ("bearish", -0.8),
    ("concern", -0.5),
    ("concerns", -0.5),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("crisis", -0.8),
    ("cut", -0.4),
    ("cuts", -0.4),
    ("decline", -0.6),
    ("declines", -0.6),
    ("disappoint", -0.7),
    ("disappoints", -0.7),
    ("down", -0.4),
    ("downgrade", -0.6),
    ("downgrades", -0.6),
    ("drop", -0.6),
    ("drops", -0.6),
    ("fail", -0.7),
    ("fails", -0.7),
    ("fall", -0.5),
    ("falls", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("fraud", -0.9),
    ("lawsuit", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("miss", -0.6),
    ("misses", -0.6),
    ("negative", -0.5),
    ("pessimistic", -0.6),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("probe", -0.5),
    ("recall", -0.5),
    ("risk", -0.4),
    ("risks", -0.4),
    ("sell", -0.5),
    ("selloff", -0.7),
    ("slump", -0.7),
    ("slumps", -0.7),
    ("tumble", -0.7),
    ("tumbles", -0.7),
    ("uncertainty", -0.5),
    ("underperform", -0.6),
    ("underperforms", -0.6),
    ("volatile", -0.3),
    ("warn", -0.5),
    ("warning", -0.5),
    ("warns", -0.5),
    ("weak", -0.5),
    ("worry", -0.5),
    ("worries", -0.5),
];

/// Words that flip the polarity of the term that follows them.
const NEGATIONS: &[&str] = &["cannot", "neither", "never", "no", "not", "without"];

/// How many tokens a negation reaches forward ("not a strong quarter" still
/// flips "strong").
const NEGATION_REACH: usize = 2;

/// Deterministic lexicon scorer: the mean weight of recognized terms, with
/// single-step negation handling.
///
/// Headlines with no recognized term score 0.0 (neutral). Because every term
/// weight is in [-1, 1], the mean is too.
pub struct LexiconScorer {
    weights: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    tokenizer: Tokenizer,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            weights: WEIGHTED_TERMS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// The tokenizer this scorer was built with, reusable by callers that
    /// also need raw tokens (keyword extraction).
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = self.tokenizer.tokens(text);

        let mut sum = 0.0;
        let mut matched = 0usize;
        let mut negate_until: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            if self.negations.contains(token.as_str()) {
                negate_until = Some(i + NEGATION_REACH);
                continue;
            }
            if let Some(weight) = self.weights.get(token.as_str()) {
                let negated = negate_until.is_some_and(|until| i <= until);
                sum += if negated { -weight } else { *weight };
                matched += 1;
                negate_until = None;
            }
        }

        if matched == 0 {
            0.0
        } else {
            (sum / matched as f64).clamp(-1.0, 1.0)
        }
    }
}
