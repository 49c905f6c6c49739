//! Verbose reports: a metric block for each candidate, then the fit metadata.
//!
//! A saved verbose report looks like this (every line but the last two ends in a space):
//! ```text
//! Results for test:
//! UNFIT SIMULATION
//!      SSE = 3.000
//!      Rsq = -1.500
//!      KLd = -2.367
//!
//! Results for test:
//! FITTED SIMULATION
//!      SSE = 0.000
//!      Rsq = 0.000
//!      KLd = 0.000
//!
//! Fit = True
//! Error = 0.5
//! ```
use std::fmt::Write;

use super::{
    write_me_up as write_report, Comparison, ReportMode, ReportOptions, ReportStyle,
    SimulationRun, SimulationStatus,
};
use crate::{
    display::{Fixed, Metadata, METRIC_PRECISION},
    error::Result,
    value::Value,
};

/// Builds the metric block comparing `sim` against `actual`.
///
/// The block holds the SSE, R² and KL divergence with three decimals, and ends in a blank line.
/// See [`crate::statistics`] for the metrics themselves.
///
/// # Parameters
/// - `name`: Label printed in the block header.
/// - `status`: [`SimulationStatus`], or `true` for an unfit simulation and `false` for a fitted one.
/// - `actual`: The observed values.
/// - `sim`: The simulated values.
///
/// # Errors
/// Returns [`crate::error::Error::LengthMismatch`] if `sim` and `actual` differ in length.
///
/// # Example
/// ```
/// # use simstat::report::verbose::calculate_errors;
/// let block = calculate_errors("test", true, &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
/// assert!(block.contains("     SSE = 0.000 \n"));
/// ```
pub fn calculate_errors<T: Value>(
    name: &str,
    status: impl Into<SimulationStatus>,
    actual: &[T],
    sim: &[T],
) -> Result<String> {
    let status = status.into();
    let comparison = Comparison::between(actual, sim)?;
    log::debug!("Metrics for {name} ({status}): {comparison:?}");

    let mut block = String::new();
    write_block(&mut block, name, status, &comparison)?;
    Ok(block)
}

fn write_block<T: Value>(
    buffer: &mut impl Write,
    name: &str,
    status: SimulationStatus,
    comparison: &Comparison<T>,
) -> std::fmt::Result {
    writeln!(buffer, "Results for {name}: ")?;
    writeln!(buffer, "{status} ")?;
    writeln!(buffer, "     SSE = {} ", Fixed::new(comparison.sse, METRIC_PRECISION))?;
    writeln!(buffer, "     Rsq = {} ", Fixed::new(comparison.r_squared, METRIC_PRECISION))?;
    writeln!(buffer, "     KLd = {} ", Fixed::new(comparison.kl_divergence, METRIC_PRECISION))?;
    writeln!(buffer, " ")
}

/// Report layout with a metric block for both the simulation and the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbose;
impl ReportStyle for Verbose {
    fn compose<T: Value>(
        &self,
        run: &SimulationRun<'_, T>,
        fitted: &dyn Metadata,
        error: &dyn Metadata,
    ) -> Result<String> {
        run.validate()?;

        let name = run.name();
        let mut report = calculate_errors(name, SimulationStatus::Unfit, run.actual(), run.sim())?;
        report += &calculate_errors(name, SimulationStatus::Fitted, run.actual(), run.fit())?;

        writeln!(report, "Fit = {fitted}")?;
        writeln!(report, "Error = {error}")?;
        Ok(report)
    }
}

/// Compares `sim` and `fit` against `actual`, and writes a verbose report to `<name>.txt` if `save` is set.
///
/// Shorthand for [`crate::report::write_me_up`] with [`ReportMode::Verbose`] in the working directory.
///
/// # Returns
/// `(error_before, error_after)`: the SSE of `sim` and of `fit` against `actual`, with two decimals.
///
/// # Errors
/// - [`crate::error::Error::LengthMismatch`] if `sim` or `fit` differ in length from `actual`.
/// - [`crate::error::Error::Io`] if the report cannot be written.
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
        mode: ReportMode::Verbose,
        save,
        directory: None,
    };
    write_report(&run, fitted, error, &options)
}
