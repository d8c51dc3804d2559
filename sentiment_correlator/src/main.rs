use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_correlator::cli::commands;
use sentiment_correlator::models::correlation::AnalysisParams;

#[derive(Parser)]
#[command(version, about = "Correlates financial-news sentiment with stock returns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full sentiment/return correlation pipeline
    Run {
        /// Path to the job file (TOML); falls back to the
        /// SENTIMENT_CORRELATOR_CONFIG environment variable
        #[arg(short, long)]
        config: Option<String>,

        /// Trailing window size for the rolling correlation
        #[arg(long, default_value_t = 7)]
        rolling_window: usize,

        /// Largest sentiment shift, in rows, for the lagged correlation
        #[arg(long, default_value_t = 5)]
        max_lag: usize,

        /// Also write the full report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Descriptive statistics and keyword frequencies for a news table
    NewsEda {
        /// Path to the news CSV
        #[arg(long)]
        news: String,

        /// How many publishers/tickers/keywords to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Print the tail of the standard indicator set for one price table
    Indicators {
        /// Path to the price CSV
        #[arg(long)]
        prices: String,

        /// Ticker symbol to attach to the series
        #[arg(long)]
        ticker: Option<String>,

        /// Number of trailing rows to print
        #[arg(long, default_value_t = 10)]
        tail: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rolling_window,
            max_lag,
            json,
        } => {
            if rolling_window < 2 {
                bail!("--rolling-window must be at least 2");
            }
            let config_path = match config {
                Some(path) => path,
                None => shared_utils::env::get_env_var("SENTIMENT_CORRELATOR_CONFIG")?,
            };
            commands::run_analysis(
                &config_path,
                AnalysisParams {
                    rolling_window,
                    max_lag,
                },
                json.as_deref(),
            )
        }

        Commands::NewsEda { news, top } => commands::news_eda(&news, top),

        Commands::Indicators {
            prices,
            ticker,
            tail,
        } => commands::indicators_snapshot(&prices, ticker.as_deref(), tail),
    }
}
