//! Canonical in-memory representation of daily price data.
//!
//! [`PriceRecord`] is the standard output of the price loader regardless of
//! which vendor exported the CSV; [`PriceSeries`] groups the records for a
//! single ticker and makes the data set self-describing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of price data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Trading day (UTC calendar day).
    pub date: NaiveDate,

    /// Closing price. Required by every downstream computation.
    pub close: f64,

    /// Opening price. Not all exports supply this.
    pub open: Option<f64>,

    /// Intraday high.
    pub high: Option<f64>,

    /// Intraday low.
    pub low: Option<f64>,

    /// Volume traded.
    pub volume: Option<f64>,
}

/// Price history for one ticker.
///
/// Invariant: `records` must be sorted ascending by date before daily returns
/// are computed, since `return[i]` depends only on `close[i]` and `close[i-1]` of
/// the same ticker. The loader sorts on construction; [`sort_by_date`] exists
/// for series assembled by hand.
///
/// [`sort_by_date`]: PriceSeries::sort_by_date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol, when known. Per-ticker price files carry it from the
    /// job config; a bare table without one still supports date-only joins.
    pub ticker: Option<String>,

    /// The daily records, ascending by date.
    pub records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(ticker: Option<String>, mut records: Vec<PriceRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { ticker, records }
    }

    /// Restores the ascending-by-date invariant.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|r| r.date);
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }
}
