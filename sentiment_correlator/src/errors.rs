use thiserror::Error;

/// The unified error type for the `sentiment_correlator` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A structural problem loading a tabular input file (missing column,
    /// unreadable CSV). Fatal for that file only.
    #[error("Load error: {0}")]
    Load(#[from] crate::io::csv_loader::LoadError),

    /// A statistical edge case (too few rows, zero variance). Aborts the
    /// current ticker's correlation step only.
    #[error("Statistics error: {0}")]
    Stats(#[from] crate::stats::StatsError),

    /// A failure writing a run report.
    #[error("Report error: {0}")]
    Report(#[from] crate::io::report::ReportError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
