//! Pearson correlation with a two-sided significance test.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::models::correlation::CorrelationResult;
use crate::stats::StatsError;

/// Pearson correlation between two equal-length series.
///
/// Errors with [`StatsError::InsufficientData`] when fewer than 2 pairs are
/// given and with [`StatsError::DegenerateInput`] when either series has zero
/// variance. The p-value is a two-sided Student-t test with n-2 degrees of
/// freedom; with exactly 2 points there are no degrees of freedom and the
/// p-value is reported as 1.0.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<CorrelationResult, StatsError> {
    debug_assert_eq!(xs.len(), ys.len(), "pearson inputs must be equal length");
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Err(StatsError::InsufficientData { n });
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 {
        return Err(StatsError::DegenerateInput { series: "first" });
    }
    if var_y == 0.0 {
        return Err(StatsError::DegenerateInput { series: "second" });
    }

    // Rounding can push |r| marginally past 1, which would break the t-test.
    let coefficient = (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);

    Ok(CorrelationResult {
        coefficient,
        p_value: two_sided_p(coefficient, n),
        n,
    })
}

fn two_sided_p(r: f64, n: usize) -> f64 {
    if n == 2 {
        // Zero degrees of freedom: the test is uninformative.
        return 1.0;
    }
    let one_minus_r2 = 1.0 - r * r;
    if one_minus_r2 <= f64::EPSILON {
        // Perfectly collinear: the t statistic diverges.
        return 0.0;
    }
    let df = (n - 2) as f64;
    let t = r * (df / one_minus_r2).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).expect("n > 2 gives positive degrees of freedom");
    (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let r = pearson(&xs, &ys).unwrap();
        assert!((r.coefficient - 1.0).abs() < 1e-12);
        assert!(r.p_value < 1e-9);
        assert_eq!(r.n, 4);
    }

    #[test]
    fn perfect_negative_correlation() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        let r = pearson(&xs, &ys).unwrap();
        assert!((r.coefficient + 1.0).abs() < 1e-12);
    }

    #[test]
    fn matches_scipy_pearsonr() {
        // scipy.stats.pearsonr([1,2,3,4,5], [1,2,3,4,6]) -> r = 12/sqrt(148),
        // t = 6*sqrt(3), two-sided p = 1 - (2/pi)*(atan(6) + 18/111)
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.0, 2.0, 3.0, 4.0, 6.0];
        let r = pearson(&xs, &ys).unwrap();
        assert!((r.coefficient - 0.986_393_924).abs() < 1e-6);
        assert!((r.p_value - 0.001_901_39).abs() < 1e-5);
    }

    #[test]
    fn one_point_is_insufficient() {
        let err = pearson(&[1.0], &[2.0]).unwrap_err();
        assert!(matches!(err, StatsError::InsufficientData { n: 1 }));
    }

    #[test]
    fn two_points_have_uninformative_p() {
        let r = pearson(&[1.0, 2.0], &[5.0, 3.0]).unwrap();
        assert_eq!(r.p_value, 1.0);
        assert!((r.coefficient + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_degenerate() {
        let err = pearson(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, StatsError::DegenerateInput { series: "first" }));

        let err = pearson(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1]).unwrap_err();
        assert!(matches!(err, StatsError::DegenerateInput { series: "second" }));
    }
}
