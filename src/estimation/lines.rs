//! Evaluates a fit, and its one-standard-error band, over an abscissa.
use super::ols::Estimator;
use crate::diagnostics::LogSink;
use crate::model::{LsmDescription, LsmLines, MismatchStrategy, Result};

impl Estimator<'_> {
    /// Builds the predicted line and the band around it.
    ///
    /// With `description == None` the fit is first computed from
    /// `abscissa`/`ordinates` under [`MismatchStrategy::Fail`]; otherwise the
    /// supplied fit is evaluated as-is and the ordinates are only carried along.
    /// Every derived line has exactly `abscissa.len()` values.
    pub fn lines(
        &self,
        abscissa: &[f64],
        ordinates: &[f64],
        description: Option<&LsmDescription>,
    ) -> Result<LsmLines> {
        let description = match description {
            Some(d) => *d,
            None => self.describe(abscissa, ordinates, MismatchStrategy::Fail)?,
        };
        Ok(LsmLines::evaluate(abscissa, ordinates, &description))
    }
}

/// [`Estimator::lines`] with diagnostics sent to the `log` facade.
pub fn get_lsm_lines(
    abscissa: &[f64],
    ordinates: &[f64],
    lsm_description: Option<&LsmDescription>,
) -> Result<LsmLines> {
    Estimator::new(&LogSink).lines(abscissa, ordinates, lsm_description)
}
