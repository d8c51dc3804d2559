//! Sinks for finished run reports.
//!
//! [`ReportSink`] is the seam an external renderer plugs into: the pipeline
//! hands over the full [`RunReport`] (aligned tables included) and the sink
//! decides how to present or persist it. Two implementations ship with the
//! crate: a human-readable text summary and a JSON dump.

use std::io::Write;

use snafu::{Backtrace, ResultExt, Snafu};

use crate::pipeline::runner::{RunReport, TickerOutcome};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ReportError {
    /// An error occurred while writing the report out.
    #[snafu(display("failed to write report: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The report could not be converted to the sink's format.
    #[snafu(display("failed to serialize report: {source}"))]
    Serialize {
        source: serde_json::Error,
        backtrace: Backtrace,
    },
}

/// Consumes a finished [`RunReport`].
pub trait ReportSink {
    /// The type of output returned after a successful write.
    type Output;

    fn write(&mut self, report: &RunReport) -> Result<Self::Output, ReportError>;
}

/// Plain-text summary, one block per ticker.
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    type Output = ();

    fn write(&mut self, report: &RunReport) -> Result<(), ReportError> {
        let w = &mut self.writer;
        writeln!(
            w,
            "news rows: {} ({} dropped)",
            report.news_rows, report.dropped_news_rows
        )
        .context(IoSnafu)?;

        for outcome in &report.outcomes {
            match outcome {
                TickerOutcome::Analyzed(t) => {
                    writeln!(w, "{}:", t.ticker).context(IoSnafu)?;
                    writeln!(
                        w,
                        "  coefficient: {:.4}, p-value: {:.4}, n = {}",
                        t.correlation.coefficient, t.correlation.p_value, t.correlation.n
                    )
                    .context(IoSnafu)?;
                    if let Some(hit_rate) = t.direction.hit_rate() {
                        writeln!(w, "  direction hit rate: {:.1}%", hit_rate * 100.0)
                            .context(IoSnafu)?;
                    }
                    for lag in &t.lagged {
                        writeln!(
                            w,
                            "  lag {}: coefficient {:.4}, p-value {:.4} (n = {})",
                            lag.lag,
                            lag.result.coefficient,
                            lag.result.p_value,
                            lag.result.n
                        )
                        .context(IoSnafu)?;
                    }
                    let windows = t.rolling.iter().filter(|p| p.corr.is_some()).count();
                    writeln!(w, "  rolling windows with data: {windows}").context(IoSnafu)?;
                }
                TickerOutcome::Skipped { ticker, reason } => {
                    writeln!(w, "{ticker}: skipped ({reason})").context(IoSnafu)?;
                }
                TickerOutcome::Failed { ticker, error } => {
                    writeln!(w, "{ticker}: failed ({error})").context(IoSnafu)?;
                }
            }
        }
        Ok(())
    }
}

/// Pretty-printed JSON dump of the whole report.
pub struct JsonReport<W: Write> {
    writer: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    type Output = ();

    fn write(&mut self, report: &RunReport) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.writer, report).context(SerializeSnafu)?;
        writeln!(self.writer).context(IoSnafu)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::correlation::{AnalysisParams, CorrelationResult};
    use crate::pipeline::runner::TickerReport;

    fn report() -> RunReport {
        RunReport {
            news_rows: 10,
            dropped_news_rows: 1,
            params: AnalysisParams::default(),
            outcomes: vec![
                TickerOutcome::Analyzed(TickerReport {
                    ticker: "AAPL".to_string(),
                    correlation: CorrelationResult {
                        coefficient: 0.42,
                        p_value: 0.05,
                        n: 12,
                    },
                    rolling: vec![],
                    lagged: vec![],
                    direction: Default::default(),
                    aligned: vec![],
                    dropped_price_rows: 0,
                }),
                TickerOutcome::Skipped {
                    ticker: "MSFT".to_string(),
                    reason: "insufficient data points for correlation: n = 1, need at least 2"
                        .to_string(),
                },
            ],
        }
    }

    #[test]
    fn text_report_lists_successes_and_skips() {
        let mut buf = Vec::new();
        TextReport::new(&mut buf).write(&report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("AAPL:"));
        assert!(text.contains("coefficient: 0.4200"));
        assert!(text.contains("MSFT: skipped"));
    }

    #[test]
    fn json_report_round_trips_the_status_tags() {
        let mut buf = Vec::new();
        JsonReport::new(&mut buf).write(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["outcomes"][0]["status"], "analyzed");
        assert_eq!(value["outcomes"][1]["status"], "skipped");
    }
}
