//! Agreement between sentiment sign and return sign over the aligned table.

use serde::Serialize;

use crate::models::daily::AlignedRow;

/// 2×2 contingency counts: did positive sentiment line up with a positive
/// return? Rendering (confusion-matrix plots) is an external concern; these
/// are the numbers such a renderer consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionCounts {
    /// Sentiment > 0 and return > 0.
    pub predicted_gain_actual_gain: usize,
    /// Sentiment > 0 but return <= 0.
    pub predicted_gain_actual_loss: usize,
    /// Sentiment <= 0 but return > 0.
    pub predicted_loss_actual_gain: usize,
    /// Sentiment <= 0 and return <= 0.
    pub predicted_loss_actual_loss: usize,
}

impl DirectionCounts {
    pub fn total(&self) -> usize {
        self.predicted_gain_actual_gain
            + self.predicted_gain_actual_loss
            + self.predicted_loss_actual_gain
            + self.predicted_loss_actual_loss
    }

    /// Share of rows where the signs agreed; `None` on an empty table.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| {
            (self.predicted_gain_actual_gain + self.predicted_loss_actual_loss) as f64
                / total as f64
        })
    }
}

pub fn direction_counts(rows: &[AlignedRow]) -> DirectionCounts {
    let mut counts = DirectionCounts::default();
    for row in rows {
        match (row.sentiment > 0.0, row.ret > 0.0) {
            (true, true) => counts.predicted_gain_actual_gain += 1,
            (true, false) => counts.predicted_gain_actual_loss += 1,
            (false, true) => counts.predicted_loss_actual_gain += 1,
            (false, false) => counts.predicted_loss_actual_loss += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(sentiment: f64, ret: f64) -> AlignedRow {
        AlignedRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ticker: None,
            sentiment,
            ret,
        }
    }

    #[test]
    fn counts_partition_all_rows() {
        let rows = vec![row(0.5, 0.01), row(0.5, -0.01), row(-0.5, 0.01), row(0.0, -0.01)];
        let counts = direction_counts(&rows);
        assert_eq!(counts.predicted_gain_actual_gain, 1);
        assert_eq!(counts.predicted_gain_actual_loss, 1);
        assert_eq!(counts.predicted_loss_actual_gain, 1);
        assert_eq!(counts.predicted_loss_actual_loss, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.hit_rate(), Some(0.5));
    }

    #[test]
    fn empty_table_has_no_hit_rate() {
        assert_eq!(direction_counts(&[]).hit_rate(), None);
    }
}
