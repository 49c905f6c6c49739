//! Concise reports: the fit metadata and the SSE before and after fitting.
//!
//! A saved concise report looks like this:
//! ```text
//! Fit = True
//! Error = 0.0
//! Error before (SSE) = 3.00
//! Error after (SSE) = 0.00
//! ```
//! R² and KL divergence are never computed for this layout.
use std::fmt::Write;

use super::{write_me_up as write_report, ReportMode, ReportOptions, ReportStyle, SimulationRun};
use crate::{display::Metadata, error::Result, value::Value};

/// Report layout holding only the before/after SSE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Concise;
impl ReportStyle for Concise {
    fn compose<T: Value>(
        &self,
        run: &SimulationRun<'_, T>,
        fitted: &dyn Metadata,
        error: &dyn Metadata,
    ) -> Result<String> {
        run.validate()?;
        let (before, after) = run.formatted_errors();
        log::debug!("SSE for {}: before {before}, after {after}", run.name());

        let mut report = String::new();
        writeln!(report, "Fit = {fitted}")?;
        writeln!(report, "Error = {error}")?;
        writeln!(report, "Error before (SSE) = {before}")?;
        writeln!(report, "Error after (SSE) = {after}")?;
        Ok(report)
    }
}

/// Compares `sim` and `fit` against `actual`, and writes a concise report to `<name>.txt` if `save` is set.
///
/// Shorthand for [`crate::report::write_me_up`] with [`ReportMode::Concise`] in the working directory.
///
/// # Returns
/// `(error_before, error_after)`: the SSE of `sim` and of `fit` against `actual`, with two decimals.
///
/// # Errors
/// - [`crate::error::Error::LengthMismatch`] if `sim` or `fit` differ in length from `actual`.
/// - [`crate::error::Error::Io`] if the report cannot be written.
///
/// # Example
/// ```
/// # use simstat::report::concise::write_me_up;
/// let actual = [1.0, 2.0, 3.0];
/// let (before, after) = write_me_up("example", &actual, &[2.0, 3.0, 4.0], &actual, true, 0.0, false).unwrap();
/// assert_eq!((before.as_str(), after.as_str()), ("3.00", "0.00"));
/// ```
pub fn write_me_up<T: Value>(
    name: &str,
    actual: &[T],
    sim: &[T],
    fit: &[T],
    fitted: impl Metadata,
    error: impl Metadata,
    save: bool,
) -> Result<(String, String)> {
    let run = SimulationRun::new(name, actual, sim, fit);
    let options = ReportOptions {
        mode: ReportMode::Concise,
        save,
        directory: None,
    };
    write_report(&run, fitted, error, &options)
}
