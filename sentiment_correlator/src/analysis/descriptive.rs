//! Descriptive statistics over the news table: headline lengths, publisher
//! and ticker activity, and publication frequency over time.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::models::news::NewsRecord;

/// Summary of headline character lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadlineLengthStats {
    pub count: usize,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

/// One pass over the news table.
#[derive(Debug, Clone, Serialize)]
pub struct NewsSummary {
    pub headline_lengths: Option<HeadlineLengthStats>,

    /// Article count per publisher, most active first.
    pub articles_per_publisher: IndexMap<String, usize>,

    /// Article count per ticker, most covered first. Empty when the table
    /// has no ticker column.
    pub articles_per_ticker: IndexMap<String, usize>,

    /// Articles per calendar day, ascending by date.
    pub daily_counts: Vec<(NaiveDate, usize)>,
}

pub fn summarize_news(records: &[NewsRecord]) -> NewsSummary {
    let headline_lengths = (!records.is_empty()).then(|| {
        let lengths: Vec<usize> = records.iter().map(|r| r.headline.chars().count()).collect();
        HeadlineLengthStats {
            count: lengths.len(),
            mean: lengths.iter().sum::<usize>() as f64 / lengths.len() as f64,
            min: lengths.iter().copied().min().unwrap_or(0),
            max: lengths.iter().copied().max().unwrap_or(0),
        }
    });

    let mut per_publisher: IndexMap<String, usize> = IndexMap::new();
    let mut per_ticker: IndexMap<String, usize> = IndexMap::new();
    let mut per_day: std::collections::BTreeMap<NaiveDate, usize> = std::collections::BTreeMap::new();
    for r in records {
        *per_publisher.entry(r.publisher.clone()).or_insert(0) += 1;
        if let Some(ticker) = &r.ticker {
            *per_ticker.entry(ticker.clone()).or_insert(0) += 1;
        }
        *per_day.entry(r.date).or_insert(0) += 1;
    }

    per_publisher.sort_by(|_, a, _, b| b.cmp(a));
    per_ticker.sort_by(|_, a, _, b| b.cmp(a));

    NewsSummary {
        headline_lengths,
        articles_per_publisher: per_publisher,
        articles_per_ticker: per_ticker,
        daily_counts: per_day.into_iter().collect(),
    }
}
