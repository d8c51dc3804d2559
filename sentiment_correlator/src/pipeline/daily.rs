//! Daily aggregation of scored news and close-to-close returns.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::daily::{DailyReturn, DailySentiment};
use crate::models::news::ScoredNews;
use crate::models::price::PriceSeries;

/// Mean sentiment per (date, ticker-if-present) group.
///
/// Insertion order of the input is irrelevant; the output is sorted by
/// (ticker, date) and has exactly one row per group, which keeps the join key
/// unique for [`merge`](crate::pipeline::merge).
pub fn aggregate_daily_sentiment(scored: &[ScoredNews]) -> Vec<DailySentiment> {
    let mut groups: BTreeMap<(Option<String>, NaiveDate), (f64, usize)> = BTreeMap::new();
    for s in scored {
        let entry = groups
            .entry((s.record.ticker.clone(), s.record.date))
            .or_insert((0.0, 0));
        entry.0 += s.sentiment;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((ticker, date), (sum, count))| DailySentiment {
            date,
            ticker,
            avg_sentiment: sum / count as f64,
        })
        .collect()
}

/// Fractional daily returns for one ticker's price series.
///
/// The series must already be sorted ascending by date (the loader
/// guarantees this). Duplicate dates collapse to the last close seen, so the
/// output has one row per date. The first row's return is always `None`, as
/// is any return whose previous close is zero.
pub fn compute_daily_returns(series: &PriceSeries) -> Vec<DailyReturn> {
    let mut closes: Vec<(NaiveDate, f64)> = Vec::with_capacity(series.records.len());
    for r in &series.records {
        match closes.last_mut() {
            Some((date, close)) if *date == r.date => *close = r.close,
            _ => closes.push((r.date, r.close)),
        }
    }

    let mut out = Vec::with_capacity(closes.len());
    let mut prev: Option<f64> = None;
    for (date, close) in closes {
        let ret = prev.filter(|p| *p != 0.0).map(|p| close / p - 1.0);
        out.push(DailyReturn {
            date,
            ticker: series.ticker.clone(),
            ret,
        });
        prev = Some(close);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::news::{NewsRecord, SentimentCategory};
    use crate::models::price::PriceRecord;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn scored(d: u32, ticker: Option<&str>, sentiment: f64) -> ScoredNews {
        ScoredNews {
            record: NewsRecord {
                date: day(d),
                headline: "h".to_string(),
                publisher: "p".to_string(),
                ticker: ticker.map(str::to_string),
            },
            sentiment,
            category: SentimentCategory::from_score(sentiment),
        }
    }

    fn price(d: u32, close: f64) -> PriceRecord {
        PriceRecord {
            date: day(d),
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }

    #[test]
    fn sentiment_groups_by_date_and_ticker_with_mean() {
        let rows = vec![
            scored(1, Some("AAPL"), 0.4),
            scored(1, Some("AAPL"), 0.8),
            scored(1, Some("MSFT"), -0.2),
            scored(2, Some("AAPL"), 0.0),
        ];
        let daily = aggregate_daily_sentiment(&rows);

        assert_eq!(daily.len(), 3);
        let aapl_d1 = daily
            .iter()
            .find(|d| d.ticker.as_deref() == Some("AAPL") && d.date == day(1))
            .unwrap();
        assert!((aapl_d1.avg_sentiment - 0.6).abs() < 1e-12);
    }

    #[test]
    fn aggregation_ignores_insertion_order() {
        let mut rows = vec![
            scored(2, Some("AAPL"), 0.1),
            scored(1, Some("AAPL"), 0.5),
            scored(1, Some("AAPL"), 0.3),
        ];
        let a = aggregate_daily_sentiment(&rows);
        rows.reverse();
        let b = aggregate_daily_sentiment(&rows);
        assert_eq!(a, b);
    }

    #[test]
    fn first_return_is_always_none() {
        let series = PriceSeries::new(
            Some("AAPL".to_string()),
            vec![price(1, 100.0), price(2, 102.0), price(3, 51.0)],
        );
        let returns = compute_daily_returns(&series);

        assert_eq!(returns.len(), 3);
        assert_eq!(returns[0].ret, None);
        assert!((returns[1].ret.unwrap() - 0.02).abs() < 1e-12);
        assert!((returns[2].ret.unwrap() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn duplicate_dates_collapse_to_last_close() {
        let series = PriceSeries::new(
            Some("AAPL".to_string()),
            vec![price(1, 100.0), price(2, 90.0), price(2, 110.0)],
        );
        let returns = compute_daily_returns(&series);

        assert_eq!(returns.len(), 2);
        assert!((returns[1].ret.unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn zero_previous_close_yields_no_return() {
        let series = PriceSeries::new(None, vec![price(1, 0.0), price(2, 5.0)]);
        let returns = compute_daily_returns(&series);
        assert_eq!(returns[1].ret, None);
    }
}
