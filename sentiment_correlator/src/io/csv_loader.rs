//! CSV loaders for the news and price tables.
//!
//! Column positions are resolved once from the header row into a typed
//! schema (case-insensitive matching), so row decoding never looks a column
//! up by name. A missing required column fails the whole file; an
//! unparseable date or close cell only drops that row; the drop is counted,
//! logged, and reported back to the caller.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::StringRecord;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::{debug, warn};

use crate::models::news::NewsRecord;
use crate::models::price::{PriceRecord, PriceSeries};

/// Structural failures while loading a tabular file. Fatal for that file;
/// never for the rest of the run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LoadError {
    /// A column the schema requires is not present in the header row.
    #[snafu(display("missing required column '{column}' in {}", path.display()))]
    MissingColumn {
        column: String,
        path: PathBuf,
        backtrace: Backtrace,
    },

    /// The file could not be opened or a record could not be read.
    #[snafu(display("failed to read CSV {}: {source}", path.display()))]
    Csv {
        path: PathBuf,
        source: csv::Error,
        backtrace: Backtrace,
    },
}

/// A loaded news table plus the number of rows dropped for unparseable dates.
#[derive(Debug)]
pub struct NewsLoad {
    pub records: Vec<NewsRecord>,
    pub dropped: usize,
}

/// A loaded price table plus the number of rows dropped for unparseable
/// dates or closes.
#[derive(Debug)]
pub struct PriceLoad {
    pub series: PriceSeries,
    pub dropped: usize,
}

/// Header positions for the news table, resolved once per file.
struct NewsSchema {
    date: usize,
    headline: usize,
    publisher: usize,
    ticker: Option<usize>,
}

impl NewsSchema {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            date: require_column(headers, "date", path)?,
            headline: require_column(headers, "headline", path)?,
            publisher: require_column(headers, "publisher", path)?,
            // FNSPID-style exports tag the symbol column "stock"; accept
            // "ticker" as the obvious synonym.
            ticker: find_column(headers, "stock").or_else(|| find_column(headers, "ticker")),
        })
    }
}

/// Header positions for the price table, resolved once per file.
struct PriceSchema {
    date: usize,
    close: usize,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    volume: Option<usize>,
}

impl PriceSchema {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            date: require_column(headers, "date", path)?,
            close: require_column(headers, "close", path)?,
            open: find_column(headers, "open"),
            high: find_column(headers, "high"),
            low: find_column(headers, "low"),
            volume: find_column(headers, "volume"),
        })
    }
}

/// Loads a news table. Requires `date`, `headline`, and `publisher` columns
/// (matched case-insensitively); a `stock`/`ticker` column is optional.
pub fn load_news_csv(path: impl AsRef<Path>) -> Result<NewsLoad, LoadError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let schema = NewsSchema::resolve(headers(&mut reader, path)?, path)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row.context(CsvSnafu { path })?;
        let Some(date) = row.get(schema.date).and_then(parse_date_lenient) else {
            debug!(row = ?row.get(schema.date), "dropping news row with unparseable date");
            dropped += 1;
            continue;
        };
        records.push(NewsRecord {
            date,
            headline: row.get(schema.headline).unwrap_or_default().trim().to_string(),
            publisher: row.get(schema.publisher).unwrap_or_default().trim().to_string(),
            ticker: schema
                .ticker
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        });
    }

    if dropped > 0 {
        warn!(path = %path.display(), dropped, "dropped news rows with unparseable dates");
    }
    Ok(NewsLoad { records, dropped })
}

/// Loads a price table. Locates the "Date"-like and "Close"-like columns
/// case-insensitively; `Open`/`High`/`Low`/`Volume` are optional. The series
/// comes back sorted ascending by date with `ticker` attached.
pub fn load_price_csv(path: impl AsRef<Path>, ticker: Option<&str>) -> Result<PriceLoad, LoadError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let schema = PriceSchema::resolve(headers(&mut reader, path)?, path)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row.context(CsvSnafu { path })?;
        let date = row.get(schema.date).and_then(parse_date_lenient);
        let close = row.get(schema.close).and_then(parse_f64);
        let (Some(date), Some(close)) = (date, close) else {
            debug!(
                date = ?row.get(schema.date),
                close = ?row.get(schema.close),
                "dropping price row with unparseable date or close"
            );
            dropped += 1;
            continue;
        };
        records.push(PriceRecord {
            date,
            close,
            open: schema.open.and_then(|i| row.get(i)).and_then(parse_f64),
            high: schema.high.and_then(|i| row.get(i)).and_then(parse_f64),
            low: schema.low.and_then(|i| row.get(i)).and_then(parse_f64),
            volume: schema.volume.and_then(|i| row.get(i)).and_then(parse_f64),
        });
    }

    if dropped > 0 {
        warn!(path = %path.display(), dropped, "dropped price rows with unparseable cells");
    }
    Ok(PriceLoad {
        series: PriceSeries::new(ticker.map(str::to_string), records),
        dropped,
    })
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, LoadError> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context(CsvSnafu { path })
}

fn headers<'r>(
    reader: &'r mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<&'r StringRecord, LoadError> {
    reader.headers().context(CsvSnafu { path })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn require_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, LoadError> {
    find_column(headers, name).ok_or_else(|| {
        MissingColumnSnafu {
            column: name.to_string(),
            path: path.to_path_buf(),
        }
        .build()
    })
}

/// Parses the date shapes seen in the wild exports: RFC-3339, a naive
/// timestamp with or without a UTC offset, or a bare calendar date.
/// Zoned timestamps are converted to UTC before the calendar date is taken.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(ndt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_f64(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
        assert_eq!(parse_date_lenient("2020-06-05"), Some(expected));
        assert_eq!(parse_date_lenient("2020-06-05 10:30:54"), Some(expected));
        assert_eq!(parse_date_lenient("2020-06-05T10:30:54Z"), Some(expected));
        assert_eq!(parse_date_lenient("2020-06-05 10:30:54-04:00"), Some(expected));
        assert_eq!(parse_date_lenient("not a date"), None);
        assert_eq!(parse_date_lenient(""), None);
    }

    #[test]
    fn zoned_timestamps_normalize_to_utc_day() {
        // 23:30 in UTC-4 is already the next day in UTC.
        assert_eq!(
            parse_date_lenient("2020-06-05 23:30:00-04:00"),
            Some(NaiveDate::from_ymd_opt(2020, 6, 6).unwrap())
        );
    }
}
