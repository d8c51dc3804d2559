//! Job configuration: parsing, normalization, and loading.
//!
//! A TOML-backed "job file" describes one analysis run:
//! - The shared news table every ticker draws its headlines from.
//! - An ordered map of ticker code -> price-table path.
//!
//! Key behaviors:
//! - Normalization trims paths, uppercases ticker codes, and rejects empty
//!   entries; two spellings that collapse to the same code are an error
//!   rather than a silent overwrite.
//! - Declaration order of `[tickers.*]` is preserved, and is the order the
//!   run processes tickers in.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_job_str`]
//! - Parse + normalize from a file path: [`load_job_path`]

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use toml::from_str;

/// Top-level job file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Path to the news CSV shared by every ticker.
    pub news_file: String,

    /// Map of ticker code -> per-ticker configuration.
    ///
    /// Codes are normalized (trimmed, uppercase) by [`normalize_job`].
    pub tickers: IndexMap<String, TickerCfg>,
}

/// Per-ticker configuration payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TickerCfg {
    /// Path to this ticker's price CSV.
    pub price_file: String,
}

/// Normalizes a parsed job file in place.
///
/// - Trims `news_file` and every `price_file`; empty paths are an error.
/// - Ticker codes are trimmed and uppercased; an empty code, or two codes
///   that normalize to the same value, is an error.
pub fn normalize_job(cfg: &mut JobConfig) -> anyhow::Result<()> {
    cfg.news_file = cfg.news_file.trim().to_string();
    if cfg.news_file.is_empty() {
        bail!("news_file must not be empty");
    }
    if cfg.tickers.is_empty() {
        bail!("at least one [tickers.*] entry is required");
    }

    let mut normalized: IndexMap<String, TickerCfg> = IndexMap::with_capacity(cfg.tickers.len());
    for (code, mut ticker_cfg) in std::mem::take(&mut cfg.tickers) {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            bail!("ticker code must not be empty");
        }
        ticker_cfg.price_file = ticker_cfg.price_file.trim().to_string();
        if ticker_cfg.price_file.is_empty() {
            bail!("price_file for ticker '{code}' must not be empty");
        }
        if normalized.insert(code.clone(), ticker_cfg).is_some() {
            bail!("duplicate ticker '{code}' after normalization");
        }
    }
    cfg.tickers = normalized;
    Ok(())
}

/// Parses and normalizes a job file from a TOML string.
pub fn load_job_str(text: &str) -> anyhow::Result<JobConfig> {
    let mut cfg: JobConfig = from_str(text).context("parse job TOML")?;
    normalize_job(&mut cfg)?;
    Ok(cfg)
}

/// Parses and normalizes a job file from a path.
///
/// See [`load_job_str`] for details on parsing and normalization.
pub fn load_job_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<JobConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read job file {}", path.as_ref().display()))?;
    load_job_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_toml() -> &'static str {
        r#"
news_file = " data/raw_analyst_ratings.csv "

[tickers."aapl "]
price_file = "data/AAPL_historical_data.csv"

[tickers.MSFT]
price_file = " data/MSFT_historical_data.csv "
"#
    }

    #[test]
    fn normalizes_codes_and_trims_paths() {
        let cfg = load_job_str(tiny_toml()).unwrap();

        assert_eq!(cfg.news_file, "data/raw_analyst_ratings.csv");
        let codes: Vec<&String> = cfg.tickers.keys().collect();
        assert_eq!(codes, ["AAPL", "MSFT"]); // uppercased, order preserved
        assert_eq!(
            cfg.tickers["MSFT"].price_file,
            "data/MSFT_historical_data.csv"
        );
    }

    #[test]
    fn duplicate_codes_after_normalization_are_rejected() {
        let text = r#"
news_file = "news.csv"

[tickers.aapl]
price_file = "a.csv"

[tickers.AAPL]
price_file = "b.csv"
"#;
        let err = load_job_str(text).unwrap_err();
        assert!(err.to_string().contains("duplicate ticker"));
    }

    #[test]
    fn empty_paths_and_unknown_fields_are_rejected() {
        assert!(load_job_str("news_file = \"\"\n[tickers.A]\nprice_file = \"x\"").is_err());
        assert!(load_job_str("news_file = \"n\"\nsurprise = 1\n[tickers.A]\nprice_file = \"x\"").is_err());
        assert!(load_job_str("news_file = \"n\"").is_err()); // no tickers table at all
    }
}
