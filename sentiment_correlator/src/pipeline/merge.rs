//! The strict inner join of daily sentiment and daily returns.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::daily::{AlignedRow, DailyReturn, DailySentiment};

/// Inner-joins the two daily series on (date, ticker-if-present).
///
/// Only keys present on both sides survive, and return-side nulls (the first
/// observation of each ticker) are dropped before the join, so every output
/// row carries a concrete sentiment and a concrete return. Pure function of
/// its inputs: merging the same series twice yields the same rows.
///
/// Both inputs must be unique per (date, ticker); the aggregation stages
/// guarantee that for their outputs.
pub fn merge(sentiment: &[DailySentiment], returns: &[DailyReturn]) -> Vec<AlignedRow> {
    let mut ret_by_key: BTreeMap<(&Option<String>, NaiveDate), f64> = BTreeMap::new();
    for r in returns {
        if let Some(ret) = r.ret {
            ret_by_key.insert((&r.ticker, r.date), ret);
        }
    }

    let mut rows: Vec<AlignedRow> = sentiment
        .iter()
        .filter_map(|s| {
            ret_by_key.get(&(&s.ticker, s.date)).map(|ret| AlignedRow {
                date: s.date,
                ticker: s.ticker.clone(),
                sentiment: s.avg_sentiment,
                ret: *ret,
            })
        })
        .collect();

    rows.sort_by(|a, b| (&a.ticker, a.date).cmp(&(&b.ticker, b.date)));
    rows
}
