//! Rolling and lagged correlation over the aligned table.
//!
//! Both variants group rows by ticker and sort each group by date before
//! sliding or shifting; the grouping preserves the order in which tickers
//! first appear in the input.

use indexmap::IndexMap;
use tracing::warn;

use crate::models::correlation::{LaggedCorrelation, RollingPoint};
use crate::models::daily::AlignedRow;
use crate::stats::pearson;

/// Trailing-window correlation, one point per aligned row.
///
/// The point at index `i` covers exactly the `window` rows ending at `i`
/// (0-indexed); positions with fewer than `window` preceding rows are `None`,
/// as are windows where either series is constant. `window` must be at
/// least 2.
pub fn rolling_correlation(rows: &[AlignedRow], window: usize) -> Vec<RollingPoint> {
    debug_assert!(window >= 2, "a correlation window needs at least 2 rows");
    let mut out = Vec::with_capacity(rows.len());

    for (ticker, group) in group_by_ticker(rows) {
        for i in 0..group.len() {
            let corr = if i + 1 >= window {
                let slice = &group[i + 1 - window..=i];
                let xs: Vec<f64> = slice.iter().map(|r| r.sentiment).collect();
                let ys: Vec<f64> = slice.iter().map(|r| r.ret).collect();
                pearson(&xs, &ys).ok().map(|c| c.coefficient)
            } else {
                None
            };
            out.push(RollingPoint {
                ticker: ticker.clone(),
                date: group[i].date,
                corr,
            });
        }
    }

    out
}

/// Correlation between returns and sentiment shifted back by 1..=`max_lag`
/// rows, per ticker.
///
/// A (ticker, lag) pair is only reported when more than 2 complete pairs
/// remain after the shift and both series still vary; anything else is
/// omitted from the result set with a warning, never an error.
pub fn lagged_correlation(rows: &[AlignedRow], max_lag: usize) -> Vec<LaggedCorrelation> {
    let mut out = Vec::new();

    for (ticker, group) in group_by_ticker(rows) {
        for lag in 1..=max_lag {
            if group.len() <= lag {
                continue;
            }
            let xs: Vec<f64> = group[..group.len() - lag].iter().map(|r| r.sentiment).collect();
            let ys: Vec<f64> = group[lag..].iter().map(|r| r.ret).collect();
            if xs.len() <= 2 {
                continue;
            }
            match pearson(&xs, &ys) {
                Ok(result) => out.push(LaggedCorrelation {
                    ticker: ticker.clone(),
                    lag,
                    result,
                }),
                Err(e) => warn!(ticker = ?ticker, lag, "lagged correlation omitted: {e}"),
            }
        }
    }

    out
}

/// Groups rows by ticker (first-appearance order) and sorts each group by
/// date.
fn group_by_ticker(rows: &[AlignedRow]) -> IndexMap<Option<String>, Vec<AlignedRow>> {
    let mut groups: IndexMap<Option<String>, Vec<AlignedRow>> = IndexMap::new();
    for row in rows {
        groups.entry(row.ticker.clone()).or_default().push(row.clone());
    }
    for group in groups.values_mut() {
        group.sort_by_key(|r| r.date);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn row(d: u32, sentiment: f64, ret: f64) -> AlignedRow {
        AlignedRow {
            date: day(d),
            ticker: Some("AAPL".to_string()),
            sentiment,
            ret,
        }
    }

    #[test]
    fn rolling_window_warms_up() {
        let rows: Vec<AlignedRow> = (1..=5)
            .map(|i| row(i, i as f64, (i * i) as f64))
            .collect();
        let points = rolling_correlation(&rows, 3);

        assert_eq!(points.len(), 5);
        assert!(points[0].corr.is_none());
        assert!(points[1].corr.is_none());
        // From index 2 (0-indexed, w-1) onward every window is full.
        assert!(points[2..].iter().all(|p| p.corr.is_some()));
        assert_eq!(points[4].date, day(5));
    }

    #[test]
    fn rolling_window_uses_exactly_trailing_rows() {
        // Sentiment tracks returns only in the last 3 rows; the final window
        // must see a perfect correlation regardless of earlier noise.
        let rows = vec![
            row(1, 0.9, -0.5),
            row(2, -0.8, 0.4),
            row(3, 0.1, 0.01),
            row(4, 0.2, 0.02),
            row(5, 0.3, 0.03),
        ];
        let points = rolling_correlation(&rows, 3);
        let last = points[4].corr.unwrap();
        assert!((last - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rolling_degenerate_window_is_undefined_not_fatal() {
        let rows = vec![row(1, 0.5, 0.1), row(2, 0.5, 0.2), row(3, 0.5, 0.3), row(4, 0.1, 0.4)];
        let points = rolling_correlation(&rows, 3);
        assert!(points[2].corr.is_none()); // constant sentiment window
        assert!(points[3].corr.is_some()); // window slid past the flat stretch
    }

    #[test]
    fn lagged_pairs_need_more_than_two_points() {
        let rows: Vec<AlignedRow> = (1..=4).map(|i| row(i, i as f64, i as f64)).collect();
        // lag 1 leaves 3 pairs (reported); lag 2 leaves only 2 (omitted).
        let lagged = lagged_correlation(&rows, 3);
        assert_eq!(lagged.len(), 1);
        assert_eq!(lagged[0].lag, 1);
        assert_eq!(lagged[0].result.n, 3);
    }

    #[test]
    fn lagged_shift_pairs_past_sentiment_with_later_return() {
        // returns echo sentiment one row later; lag 1 must be perfect.
        let sentiment = [0.1, -0.4, 0.7, -0.2, 0.5, 0.0];
        let mut rows = Vec::new();
        for (i, s) in sentiment.iter().enumerate() {
            let prev = if i == 0 { 0.3 } else { sentiment[i - 1] };
            rows.push(row(i as u32 + 1, *s, prev * 0.01));
        }
        let lagged = lagged_correlation(&rows, 1);
        assert_eq!(lagged.len(), 1);
        assert!((lagged[0].result.coefficient - 1.0).abs() < 1e-9);
    }

    #[test]
    fn groups_do_not_mix_tickers() {
        let mut rows: Vec<AlignedRow> = (1..=5).map(|i| row(i, i as f64, i as f64)).collect();
        rows.push(AlignedRow {
            date: day(1),
            ticker: Some("MSFT".to_string()),
            sentiment: 0.4,
            ret: 0.1,
        });
        let points = rolling_correlation(&rows, 2);
        let msft: Vec<_> = points
            .iter()
            .filter(|p| p.ticker.as_deref() == Some("MSFT"))
            .collect();
        assert_eq!(msft.len(), 1);
        assert!(msft[0].corr.is_none()); // a single row never fills a window
    }
}
