//! Closed-form ordinary least squares with standard errors on both parameters.
use crate::diagnostics::{EventSink, FitEvent, LogSink};
use crate::model::{LsmDescription, LsmError, MismatchStrategy, Result};
use crate::validation::{resolve_mismatch, validate_measurements};

/// Fits `y = incline * x + shift` to paired measurements.
///
/// The estimator holds no state besides the sink it reports diagnostics to,
/// so one instance can serve any number of fits.
pub struct Estimator<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> Estimator<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Validates both sequences, reconciles their lengths with `strategy` if
    /// they differ, and computes the fit.
    ///
    /// # Errors
    /// - Value-kind if either sequence has fewer than three values or a
    ///   non-finite value.
    /// - Policy-kind if the lengths differ under [`MismatchStrategy::Fail`].
    /// - Numeric-kind if the abscissa has no spread.
    pub fn describe(
        &self,
        abscissa: &[f64],
        ordinates: &[f64],
        strategy: MismatchStrategy,
    ) -> Result<LsmDescription> {
        self.validate("abscissa", abscissa)?;
        self.validate("ordinates", ordinates)?;

        let (abscissa, ordinates) = if abscissa.len() != ordinates.len() {
            resolve_mismatch(abscissa, ordinates, strategy, self.sink)?
        } else {
            (abscissa, ordinates)
        };

        let description = self.fit(abscissa, ordinates)?;
        self.sink.record(&FitEvent::Fitted { points: abscissa.len() });
        Ok(description)
    }

    fn validate(&self, what: &'static str, measurements: &[f64]) -> Result<()> {
        validate_measurements(what, measurements).inspect_err(|e| {
            self.sink.record(&FitEvent::RejectedMeasurements {
                what,
                len: measurements.len(),
                reason: e.to_string(),
            });
        })
    }

    /// The closed-form solution over equal-length, validated input.
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LsmDescription> {
        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;
        let mean_x2 = x.iter().map(|a| a * a).sum::<f64>() / n;

        // Centered moments: the raw `mean_xy - mean_x * mean_y` and
        // `mean_x2 - mean_x^2` cancel catastrophically for offset abscissae.
        let spread = x.iter().map(|a| (a - mean_x).powi(2)).sum::<f64>() / n;
        let covariance = x.iter().zip(y).map(|(a, b)| (a - mean_x) * (b - mean_y)).sum::<f64>() / n;
        // The mean of a constant abscissa may itself round (e.g. `[0.1; 3]`),
        // leaving a tiny positive spread, so compare the values directly too.
        if spread <= 0.0 || x.windows(2).all(|w| w[0] == w[1]) {
            self.sink.record(&FitEvent::DegenerateAbscissa { len: x.len() });
            return Err(LsmError::NumericDomain("abscissa values have zero variance"));
        }

        let incline = covariance / spread;
        let shift = mean_y - incline * mean_x;

        let residual_variance = x
            .iter()
            .zip(y)
            .map(|(a, b)| (b - incline * a - shift).powi(2))
            .sum::<f64>()
            / (n - 2.0);
        let incline_error = (residual_variance / (n * spread)).sqrt();
        let shift_error = (residual_variance * mean_x2 / (n * spread)).sqrt();

        if [incline, shift, incline_error, shift_error].iter().any(|v| !v.is_finite()) {
            return Err(LsmError::NumericDomain("fit produced a non-finite value"));
        }
        Ok(LsmDescription::new(incline, shift, incline_error, shift_error))
    }
}

/// Fits a line to `abscissa`/`ordinates`, logging diagnostics through the
/// `log` facade.
pub fn get_lsm_description(
    abscissa: &[f64],
    ordinates: &[f64],
    mismatch_strategy: MismatchStrategy,
) -> Result<LsmDescription> {
    Estimator::new(&LogSink).describe(abscissa, ordinates, mismatch_strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NullSink, RecordingSink};
    use crate::model::ErrorKind;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn describe(x: &[f64], y: &[f64]) -> Result<LsmDescription> {
        Estimator::new(&NullSink).describe(x, y, MismatchStrategy::Fail)
    }

    /// Centered-sum formulation, used as an independent cross-check.
    fn reference_fit(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
        let n = x.len() as f64;
        let mx = x.iter().sum::<f64>() / n;
        let my = y.iter().sum::<f64>() / n;
        let sxx: f64 = x.iter().map(|a| (a - mx).powi(2)).sum();
        let sxy: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
        let slope = sxy / sxx;
        let intercept = my - slope * mx;
        let s2: f64 = x.iter().zip(y).map(|(a, b)| (b - slope * a - intercept).powi(2)).sum::<f64>() / (n - 2.0);
        let sum_x2: f64 = x.iter().map(|a| a * a).sum();
        (slope, intercept, (s2 / sxx).sqrt(), (s2 * sum_x2 / (n * sxx)).sqrt())
    }

    #[test]
    fn test_known_fixture() {
        let d = describe(&[1.0, 2.0, 3.0, 4.0], &[2.1, 3.9, 6.05, 7.9]).unwrap();
        assert_abs_diff_eq!(d.incline(), 1.955, epsilon = 1e-12);
        assert_abs_diff_eq!(d.shift(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(d.incline_error(), 0.002175f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.shift_error(), 0.0163125f64.sqrt(), epsilon = 1e-12);
    }

    #[rstest]
    #[case(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 2.9, 5.2, 7.1, 8.8])]
    #[case(&[-3.0, 0.5, 2.0, 7.5], &[10.0, 4.2, 1.1, -9.0])]
    #[case(&[100.0, 101.0, 103.0, 110.0, 111.5, 120.0], &[0.3, 0.1, 0.7, 0.2, 0.9, 0.4])]
    #[case(&[1.7e9, 1.7e9 + 60.0, 1.7e9 + 180.0, 1.7e9 + 240.0], &[3.0, 3.4, 4.1, 4.6])]
    fn test_matches_centered_formulation(#[case] x: &[f64], #[case] y: &[f64]) {
        let d = describe(x, y).unwrap();
        let (slope, intercept, slope_err, intercept_err) = reference_fit(x, y);
        assert_abs_diff_eq!(d.incline(), slope, epsilon = 1e-9);
        assert_abs_diff_eq!(d.shift(), intercept, epsilon = 1e-7);
        assert_abs_diff_eq!(d.incline_error(), slope_err, epsilon = 1e-9);
        assert_abs_diff_eq!(d.shift_error(), intercept_err, epsilon = 1e-7);
    }

    #[test]
    fn test_exact_line_has_zero_error() {
        let d = describe(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
        assert_abs_diff_eq!(d.incline(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.shift(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.incline_error(), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(d.shift_error(), 0.0, epsilon = 1e-7);
    }

    #[rstest]
    #[case(1e7)]
    #[case(1e8)]
    #[case(1e9)]
    fn test_offset_abscissa_keeps_exact_fit(#[case] offset: f64) {
        let d = describe(&[offset, offset + 1.0, offset + 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(d.incline(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d.shift(), 1.0 - offset, epsilon = 1e-6);
        assert_abs_diff_eq!(d.incline_error(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d.shift_error(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_slope_is_not_rounded() {
        let d = describe(&[0.0, 1.0, 2.0], &[0.0, 0.5, 1.0]).unwrap();
        assert_abs_diff_eq!(d.incline(), 0.5, epsilon = 1e-12);
    }

    #[rstest]
    #[case(&[5.0, 5.0, 5.0, 5.0])]
    #[case(&[0.1, 0.1, 0.1])]
    fn test_constant_abscissa_is_numeric_error(#[case] x: &[f64]) {
        let y: Vec<f64> = (0..x.len()).map(|i| i as f64).collect();
        let sink = RecordingSink::default();
        let err = Estimator::new(&sink).describe(x, &y, MismatchStrategy::Fail).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Numeric);
        assert_eq!(sink.events.borrow().as_slice(), &[FitEvent::DegenerateAbscissa { len: x.len() }]);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1.0], &[1.0])]
    #[case(&[1.0, 2.0], &[1.0, 2.0])]
    #[case(&[1.0, 2.0, 3.0], &[1.0, 2.0])]
    fn test_short_sequences_are_value_errors(#[case] x: &[f64], #[case] y: &[f64]) {
        // Length is checked before any mismatch handling, even under Truncate.
        let err = Estimator::new(&NullSink).describe(x, y, MismatchStrategy::Truncate).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_nan_is_value_error() {
        let err = describe(&[1.0, 2.0, 3.0], &[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, LsmError::NonRealMeasurement { what: "ordinates", index: 1 }));
    }

    #[test]
    fn test_mismatch_fails_by_default() {
        let err = describe(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Policy);
    }

    #[test]
    fn test_truncate_fits_the_common_prefix() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.1, 5.9];
        let truncated = Estimator::new(&NullSink).describe(&x, &y, MismatchStrategy::Truncate).unwrap();
        let direct = describe(&x[..3], &y).unwrap();
        assert_eq!(truncated, direct);
    }

    #[test]
    fn test_success_is_reported() {
        let sink = RecordingSink::default();
        Estimator::new(&sink).describe(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.9], MismatchStrategy::Fail).unwrap();
        assert_eq!(sink.events.borrow().as_slice(), &[FitEvent::Fitted { points: 3 }]);
    }
}
