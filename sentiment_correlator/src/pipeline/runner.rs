//! One full analysis run: load and score the news once, then walk the
//! configured tickers and correlate each one independently.
//!
//! Failure containment is the point of this module. A structural problem
//! with a ticker's price file fails that ticker; a statistical edge case
//! (too few aligned rows, a constant series) skips it with a warning. Either
//! way the loop continues, and no ticker's outcome can affect another's.

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::direction::{DirectionCounts, direction_counts};
use crate::config::JobConfig;
use crate::errors::Error;
use crate::io::csv_loader::{load_news_csv, load_price_csv};
use crate::models::correlation::{
    AnalysisParams, CorrelationResult, LaggedCorrelation, RollingPoint,
};
use crate::models::daily::{AlignedRow, DailySentiment};
use crate::pipeline::{aggregate_daily_sentiment, compute_daily_returns, merge};
use crate::scoring::{SentimentScorer, score_news};
use crate::stats::{lagged_correlation, pearson, rolling_correlation};

/// Everything the run produced for one successfully analyzed ticker.
///
/// The aligned table rides along so an external renderer can chart it
/// without re-running the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub correlation: CorrelationResult,
    pub rolling: Vec<RollingPoint>,
    pub lagged: Vec<LaggedCorrelation>,
    pub direction: DirectionCounts,
    pub aligned: Vec<AlignedRow>,
    /// Price rows dropped by the loader for unparseable cells.
    pub dropped_price_rows: usize,
}

/// Terminal state of one ticker within a run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TickerOutcome {
    /// The pipeline completed and produced statistics.
    Analyzed(TickerReport),

    /// A statistical edge case made correlation undefined for this ticker.
    Skipped { ticker: String, reason: String },

    /// A structural error (unreadable file, missing column) stopped this
    /// ticker's pipeline.
    Failed { ticker: String, error: String },
}

impl TickerOutcome {
    pub fn ticker(&self) -> &str {
        match self {
            TickerOutcome::Analyzed(report) => &report.ticker,
            TickerOutcome::Skipped { ticker, .. } | TickerOutcome::Failed { ticker, .. } => ticker,
        }
    }
}

/// The full run: per-ticker outcomes plus news-table bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub news_rows: usize,
    /// News rows dropped by the loader for unparseable dates.
    pub dropped_news_rows: usize,
    pub params: AnalysisParams,
    pub outcomes: Vec<TickerOutcome>,
}

impl RunReport {
    /// The successfully analyzed tickers, in run order.
    pub fn analyzed(&self) -> impl Iterator<Item = &TickerReport> {
        self.outcomes.iter().filter_map(|o| match o {
            TickerOutcome::Analyzed(report) => Some(report),
            _ => None,
        })
    }
}

/// Runs the whole pipeline for every configured ticker.
///
/// The news table is loaded and scored once up front; a failure there is
/// fatal for the run, since every ticker depends on it. Per-ticker failures
/// are contained in the returned report.
pub fn run(
    config: &JobConfig,
    scorer: &dyn SentimentScorer,
    params: &AnalysisParams,
) -> Result<RunReport, Error> {
    let news = load_news_csv(&config.news_file)?;
    let news_rows = news.records.len();
    let dropped_news_rows = news.dropped;
    info!(rows = news_rows, dropped = dropped_news_rows, "news table loaded");

    let scored = score_news(scorer, news.records);
    let daily_sentiment = aggregate_daily_sentiment(&scored);

    let mut outcomes = Vec::with_capacity(config.tickers.len());
    for (ticker, ticker_cfg) in &config.tickers {
        info!(ticker, "analyzing");
        let sentiment: Vec<DailySentiment> = daily_sentiment
            .iter()
            .filter(|d| d.ticker.as_deref() == Some(ticker.as_str()))
            .cloned()
            .collect();

        let outcome = match analyze_ticker(ticker, &ticker_cfg.price_file, &sentiment, params) {
            Ok(report) => {
                info!(
                    ticker,
                    coefficient = report.correlation.coefficient,
                    p_value = report.correlation.p_value,
                    n = report.correlation.n,
                    "correlation computed"
                );
                TickerOutcome::Analyzed(report)
            }
            Err(Error::Stats(e)) => {
                warn!(ticker, "skipping ticker: {e}");
                TickerOutcome::Skipped {
                    ticker: ticker.clone(),
                    reason: e.to_string(),
                }
            }
            Err(e) => {
                warn!(ticker, "ticker failed: {e}");
                TickerOutcome::Failed {
                    ticker: ticker.clone(),
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(RunReport {
        news_rows,
        dropped_news_rows,
        params: *params,
        outcomes,
    })
}

fn analyze_ticker(
    ticker: &str,
    price_file: &str,
    sentiment: &[DailySentiment],
    params: &AnalysisParams,
) -> Result<TickerReport, Error> {
    let prices = load_price_csv(price_file, Some(ticker))?;
    let returns = compute_daily_returns(&prices.series);
    let aligned = merge(sentiment, &returns);

    let xs: Vec<f64> = aligned.iter().map(|r| r.sentiment).collect();
    let ys: Vec<f64> = aligned.iter().map(|r| r.ret).collect();
    let correlation = pearson(&xs, &ys)?;

    Ok(TickerReport {
        ticker: ticker.to_string(),
        correlation,
        rolling: rolling_correlation(&aligned, params.rolling_window),
        lagged: lagged_correlation(&aligned, params.max_lag),
        direction: direction_counts(&aligned),
        aligned,
        dropped_price_rows: prices.dropped,
    })
}
