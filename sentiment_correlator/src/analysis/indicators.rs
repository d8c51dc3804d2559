//! Reference implementations of the usual close-price indicators.
//!
//! Every function returns one output per input with leading `None`s while
//! the indicator warms up, so positions always line up with the price series
//! that produced them.

use serde::Serialize;

/// Simple moving average over a trailing window of `period` closes.
///
/// `out[i]` is `None` for i < period-1.
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    debug_assert!(period >= 1);
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);
    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Exponential moving average, seeded with the SMA of the first `period`
/// closes and smoothed with k = 2/(period+1).
///
/// `out[i]` is `None` for i < period-1.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    debug_assert!(period >= 1);
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut current: f64 = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(current);
    for i in period..values.len() {
        current += k * (values[i] - current);
        out[i] = Some(current);
    }
    out
}

/// Relative strength index with Wilder smoothing.
///
/// Needs `period` close-to-close changes before the first value, so
/// `out[i]` is `None` for i < period. A stretch with no losses reads 100,
/// no gains reads 0, and a perfectly flat warm-up reads 50.
pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    debug_assert!(period >= 1);
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() <= period {
        return out;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = values[i] - values[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += -change;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in period + 1..values.len() {
        let change = values[i] - values[i - 1];
        let (gain, loss) = if change > 0.0 { (change, 0.0) } else { (0.0, -change) };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// MACD line, signal line, and histogram.
#[derive(Debug, Clone, Serialize)]
pub struct Macd {
    /// fast EMA - slow EMA.
    pub macd: Vec<Option<f64>>,
    /// EMA of the MACD line.
    pub signal: Vec<Option<f64>>,
    /// MACD - signal, where both are defined.
    pub histogram: Vec<Option<f64>>,
}

/// MACD with the conventional (12, 26, 9) periods.
pub fn macd(values: &[f64]) -> Macd {
    macd_with(values, 12, 26, 9)
}

pub fn macd_with(values: &[f64], fast: usize, slow: usize, signal_period: usize) -> Macd {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // The signal EMA runs over the defined stretch of the MACD line, then is
    // shifted back into place against the full series.
    let defined: Vec<f64> = line.iter().flatten().copied().collect();
    let offset = line.len() - defined.len();
    let signal_defined = ema(&defined, signal_period);
    let mut signal = vec![None; offset];
    signal.extend(signal_defined);

    let histogram: Vec<Option<f64>> = line
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Macd {
        macd: line,
        signal,
        histogram,
    }
}

/// The usual charting set: SMA(20), EMA(10), RSI(14), and MACD(12, 26, 9).
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSet {
    pub sma_20: Vec<Option<f64>>,
    pub ema_10: Vec<Option<f64>>,
    pub rsi_14: Vec<Option<f64>>,
    pub macd: Macd,
}

pub fn standard_indicators(closes: &[f64]) -> IndicatorSet {
    IndicatorSet {
        sma_20: sma(closes, 20),
        ema_10: ema(closes, 10),
        rsi_14: rsi(closes, 14),
        macd: macd(closes),
    }
}
