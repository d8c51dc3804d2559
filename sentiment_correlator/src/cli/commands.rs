//! Implementations behind the CLI subcommands.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::analysis::descriptive::summarize_news;
use crate::analysis::indicators::standard_indicators;
use crate::analysis::keywords::extract_keywords;
use crate::config::load_job_path;
use crate::io::csv_loader::{load_news_csv, load_price_csv};
use crate::io::report::{JsonReport, ReportSink, TextReport};
use crate::models::correlation::AnalysisParams;
use crate::pipeline::runner::run;
use crate::scoring::LexiconScorer;

/// Full pipeline: text summary to stdout, optional JSON report to a file.
pub fn run_analysis(
    config_path: &str,
    params: AnalysisParams,
    json_out: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_job_path(config_path)?;
    let scorer = LexiconScorer::new();
    let report = run(&config, &scorer, &params)?;

    TextReport::new(io::stdout().lock()).write(&report)?;

    if let Some(path) = json_out {
        let file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        JsonReport::new(file).write(&report)?;
        info!(path = %path.display(), "json report written");
    }
    Ok(())
}

/// Descriptive statistics and keyword frequencies for a news table.
pub fn news_eda(news_file: &str, top: usize) -> anyhow::Result<()> {
    let news = load_news_csv(news_file)?;
    let summary = summarize_news(&news.records);

    if let Some(lengths) = summary.headline_lengths {
        println!(
            "headlines: {} (dropped {}), length mean {:.1}, min {}, max {}",
            lengths.count, news.dropped, lengths.mean, lengths.min, lengths.max
        );
    } else {
        println!("headlines: 0 (dropped {})", news.dropped);
    }

    println!("top publishers:");
    for (publisher, count) in summary.articles_per_publisher.iter().take(top) {
        println!("  {publisher}: {count}");
    }
    if !summary.articles_per_ticker.is_empty() {
        println!("top tickers:");
        for (ticker, count) in summary.articles_per_ticker.iter().take(top) {
            println!("  {ticker}: {count}");
        }
    }

    let scorer = LexiconScorer::new();
    let keywords = extract_keywords(scorer.tokenizer(), &news.records, top, top / 2);
    println!("top keywords:");
    for (word, count) in &keywords.top_keywords {
        println!("  {word}: {count}");
    }
    println!("top bigrams:");
    for (bigram, count) in &keywords.top_bigrams {
        println!("  {bigram}: {count}");
    }
    Ok(())
}

/// Tail of the standard indicator set for one price table.
pub fn indicators_snapshot(
    price_file: &str,
    ticker: Option<&str>,
    tail: usize,
) -> anyhow::Result<()> {
    let load = load_price_csv(price_file, ticker)?;
    let closes = load.series.closes();
    let set = standard_indicators(&closes);

    let start = load.series.records.len().saturating_sub(tail);
    println!("date        close      sma20      ema10      rsi14       macd     signal");
    for (i, record) in load.series.records.iter().enumerate().skip(start) {
        println!(
            "{}  {:>8.2}  {}  {}  {}  {}  {}",
            record.date,
            record.close,
            fmt_cell(set.sma_20[i]),
            fmt_cell(set.ema_10[i]),
            fmt_cell(set.rsi_14[i]),
            fmt_cell(set.macd.macd[i]),
            fmt_cell(set.macd.signal[i]),
        );
    }
    Ok(())
}

fn fmt_cell(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:>9.3}"),
        None => format!("{:>9}", "-"),
    }
}
