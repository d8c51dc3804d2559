//! The alignment pipeline: daily aggregates, the strict inner merge, and the
//! per-ticker run orchestration.
//!
//! Data flows one way through these stages (scored news and price series
//! in, aligned rows and correlation statistics out) and no stage mutates
//! another stage's output after handoff.

pub mod daily;
pub mod merge;
pub mod runner;

pub use daily::{aggregate_daily_sentiment, compute_daily_returns};
pub use merge::merge;
pub use runner::{RunReport, TickerOutcome, TickerReport, run};
