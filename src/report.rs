//! Before/after reports for a simulation and its fit
//!
//! A report compares observed data (`actual`) against two candidates: the initial simulation (`sim`)
//! and the simulation after fitting (`fit`). It can be written to `<name>.txt`, and always produces the
//! sum of squared errors before and after the fit, formatted with two decimals.
//!
//! # Report styles
//! The two styles produce different files and are never mixed:
//! - [`Verbose`]: A full metric block (SSE, R², KL divergence) for each candidate, then the fit metadata.
//!   See [`verbose::calculate_errors`].
//! - [`Concise`]: The fit metadata and the two SSE values only.
//!
//! [`ReportMode`] selects between them at runtime, and [`ReportOptions`] bundles the mode with the
//! `save` flag and an optional output directory.
//!
//! # Example
//! ```no_run
//! use simstat::report::{self, ReportMode, ReportOptions, SimulationRun};
//!
//! let actual = [1.0, 2.0, 3.0];
//! let sim = [2.0, 3.0, 4.0];
//! let fit = [1.0, 2.0, 3.0];
//!
//! let run = SimulationRun::new("test", &actual, &sim, &fit);
//! let options = ReportOptions { mode: ReportMode::Concise, save: true, directory: None };
//!
//! // Writes ./test.txt
//! let (before, after) = report::write_me_up(&run, true, 0.0, &options).unwrap();
//! assert_eq!(before, "3.00");
//! assert_eq!(after, "0.00");
//! ```
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::{
    display::{format_fixed, Metadata, ERROR_PRECISION},
    error::{Error, Result},
    statistics,
    value::Value,
};

pub mod concise;
pub mod verbose;

pub use concise::Concise;
pub use verbose::Verbose;

/// Extension given to saved reports
pub const REPORT_EXTENSION: &str = "txt";

/// Which of the two candidates a metric block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationStatus {
    /// The simulation before any fitting
    Unfit,

    /// The simulation after fitting
    Fitted,
}

impl From<bool> for SimulationStatus {
    /// `true` marks the block as unfit
    fn from(is_unfit: bool) -> Self {
        if is_unfit {
            Self::Unfit
        } else {
            Self::Fitted
        }
    }
}

impl Display for SimulationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unfit => write!(f, "UNFIT SIMULATION"),
            Self::Fitted => write!(f, "FITTED SIMULATION"),
        }
    }
}

/// The metrics comparing one candidate against the observed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<T: Value> {
    /// See [`statistics::sum_sq_error`]
    pub sse: T,

    /// See [`statistics::r_squared`]
    pub r_squared: T,

    /// See [`statistics::kl_divergence`]
    pub kl_divergence: T,
}

impl<T: Value> Comparison<T> {
    /// Computes every metric between `actual` and `sim`.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the slices differ in length.
    pub fn between(actual: &[T], sim: &[T]) -> Result<Self> {
        check_length("sim", actual, sim)?;

        let comparison = Self {
            sse: statistics::sum_sq_error(actual.iter().copied(), sim.iter().copied()),
            r_squared: statistics::r_squared(actual.iter().copied(), sim.iter().copied()),
            kl_divergence: statistics::kl_divergence(actual.iter().copied(), sim.iter().copied()),
        };

        if !Value::is_finite(comparison.r_squared) {
            log::warn!(
                "R² is {} for {} values; the observed data is constant",
                comparison.r_squared,
                actual.len()
            );
        }

        Ok(comparison)
    }
}

/// Observed data and the two candidates being compared against it.
#[derive(Debug, Clone, Copy)]
pub struct SimulationRun<'a, T: Value> {
    name: &'a str,
    actual: &'a [T],
    sim: &'a [T],
    fit: &'a [T],
}

impl<'a, T: Value> SimulationRun<'a, T> {
    /// Bundles a named set of observed, simulated and fitted values.
    ///
    /// `name` labels the report, and names its file. It is used as-is.
    pub fn new(name: &'a str, actual: &'a [T], sim: &'a [T], fit: &'a [T]) -> Self {
        Self {
            name,
            actual,
            sim,
            fit,
        }
    }

    /// The label of this run
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The observed data
    pub fn actual(&self) -> &'a [T] {
        self.actual
    }

    /// The simulation before fitting
    pub fn sim(&self) -> &'a [T] {
        self.sim
    }

    /// The simulation after fitting
    pub fn fit(&self) -> &'a [T] {
        self.fit
    }

    /// Checks that `sim` and `fit` are the same length as `actual`.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] naming the first offending sequence.
    pub fn validate(&self) -> Result<()> {
        check_length("sim", self.actual, self.sim)?;
        check_length("fit", self.actual, self.fit)
    }

    /// Sum of squared errors between `actual` and `sim`
    pub fn error_before(&self) -> T {
        statistics::sum_sq_error(self.actual.iter().copied(), self.sim.iter().copied())
    }

    /// Sum of squared errors between `actual` and `fit`
    pub fn error_after(&self) -> T {
        statistics::sum_sq_error(self.actual.iter().copied(), self.fit.iter().copied())
    }

    /// The before and after errors, formatted with [`ERROR_PRECISION`] decimals
    pub fn formatted_errors(&self) -> (String, String) {
        (
            format_fixed(self.error_before(), ERROR_PRECISION),
            format_fixed(self.error_after(), ERROR_PRECISION),
        )
    }

    /// `<name>.txt`
    pub fn file_name(&self) -> String {
        format!("{}.{REPORT_EXTENSION}", self.name)
    }
}

fn check_length<T>(name: &'static str, actual: &[T], other: &[T]) -> Result<()> {
    if actual.len() == other.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            name,
            expected: actual.len(),
            found: other.len(),
        })
    }
}

/// Trait for the layouts a report file can take.
pub trait ReportStyle {
    /// Builds the full text of the report file for `run`.
    ///
    /// # Parameters
    /// - `run`: The observed data and both candidates.
    /// - `fitted`: Fit metadata from the optimizer, written as `Fit = <fitted>`. See [`Metadata`].
    /// - `error`: Final error from the optimizer, written as `Error = <error>`.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the run's sequences differ in length.
    fn compose<T: Value>(
        &self,
        run: &SimulationRun<'_, T>,
        fitted: &dyn Metadata,
        error: &dyn Metadata,
    ) -> Result<String>;
}

/// Runtime selection of a [`ReportStyle`].
///
/// Deserializes from `"verbose"` or `"concise"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Metric blocks for both candidates. See [`Verbose`]
    #[default]
    Verbose,

    /// Before/after SSE only. See [`Concise`]
    Concise,
}

impl ReportStyle for ReportMode {
    fn compose<T: Value>(
        &self,
        run: &SimulationRun<'_, T>,
        fitted: &dyn Metadata,
        error: &dyn Metadata,
    ) -> Result<String> {
        match self {
            Self::Verbose => Verbose.compose(run, fitted, error),
            Self::Concise => Concise.compose(run, fitted, error),
        }
    }
}

/// How [`write_me_up`] should produce its report.
///
/// Can be loaded from JSON; missing fields take their defaults:
/// ```
/// # use simstat::report::{ReportMode, ReportOptions};
/// let options = ReportOptions::from_json(r#"{ "mode": "concise", "save": true }"#).unwrap();
/// assert_eq!(options.mode, ReportMode::Concise);
/// assert!(options.save);
/// assert!(options.directory.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Layout of the report file
    pub mode: ReportMode,

    /// Write the report to disk. The error strings are returned either way.
    pub save: bool,

    /// Directory to write `<name>.txt` into.
    /// - `None` uses the process's working directory.
    pub directory: Option<PathBuf>,
}

impl ReportOptions {
    /// Parses options from a JSON document.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the document is not valid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Where the report for `run` will be written
    pub fn report_path<T: Value>(&self, run: &SimulationRun<'_, T>) -> PathBuf {
        match &self.directory {
            Some(directory) => directory.join(run.file_name()),
            None => PathBuf::from(run.file_name()),
        }
    }
}

/// Computes the before/after errors for `run`, and writes a report if `options.save` is set.
///
/// The report file is overwritten if it exists. Nothing is written when `save` is false.
///
/// # Returns
/// `(error_before, error_after)`: the SSE of `sim` and of `fit` against `actual`, with two decimals.
///
/// # Errors
/// - [`Error::LengthMismatch`] if `sim` or `fit` differ in length from `actual`.
/// - [`Error::Io`] if the report cannot be written. The file may be left partially written.
pub fn write_me_up<T: Value>(
    run: &SimulationRun<'_, T>,
    fitted: impl Metadata,
    error: impl Metadata,
    options: &ReportOptions,
) -> Result<(String, String)> {
    run.validate()?;
    let errors = run.formatted_errors();

    if options.save {
        let contents = options.mode.compose(run, &fitted, &error)?;
        save_report(&options.report_path(run), &contents)?;
    }

    Ok(errors)
}

/// Writes `contents` to `path`, replacing anything already there.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be written.
pub fn save_report(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote report to {}", path.display());
    Ok(())
}

/// Directory under `target/` used by report tests, created on demand
#[cfg(test)]
pub(crate) fn test_output_dir() -> PathBuf {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test_output");
    std::fs::create_dir_all(&dir).expect("Failed to create test output directory");
    dir
}

/// Runs `f` with [`test_output_dir`] as the working directory.
///
/// The working directory is process-wide, so callers are serialized. Other tests must not rely on it.
#[cfg(test)]
pub(crate) fn in_test_output_dir(f: impl FnOnce()) {
    static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let _guard = CWD_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

    let previous = std::env::current_dir().expect("Failed to read working directory");
    std::env::set_current_dir(test_output_dir()).expect("Failed to enter test output directory");
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    std::env::set_current_dir(previous).expect("Failed to restore working directory");

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(mode: ReportMode) -> ReportOptions {
        ReportOptions {
            mode,
            save: true,
            directory: Some(test_output_dir()),
        }
    }

    #[test]
    fn status_from_flag() {
        assert_eq!(SimulationStatus::from(true), SimulationStatus::Unfit);
        assert_eq!(SimulationStatus::from(false), SimulationStatus::Fitted);
        assert_eq!(SimulationStatus::Unfit.to_string(), "UNFIT SIMULATION");
        assert_eq!(SimulationStatus::Fitted.to_string(), "FITTED SIMULATION");
    }

    #[test]
    fn comparison_metrics() {
        let actual = [1.0, 2.0, 3.0];
        let sim = [2.0, 3.0, 4.0];
        let comparison = Comparison::between(&actual, &sim).unwrap();
        assert_eq!(comparison.sse, 3.0);
        assert_eq!(comparison.r_squared, -1.5);
        crate::assert_close!(
            comparison.kl_divergence,
            (0.5f64).ln() + 2.0 * (2.0f64 / 3.0).ln() + 3.0 * (0.75f64).ln()
        );
    }

    #[test]
    fn comparison_rejects_length_mismatch() {
        let err = Comparison::between(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                name: "sim",
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn run_errors_identical() {
        let actual = [1.0, 2.0, 3.0];
        let run = SimulationRun::new("same", &actual, &actual, &actual);
        assert_eq!(
            run.formatted_errors(),
            ("0.00".to_string(), "0.00".to_string())
        );
    }

    #[test]
    fn run_errors_rounding() {
        // SSE before = 0.125² * 2 = 0.03125, after = 1.5² = 2.25
        let actual = [0.0, 0.0];
        let sim = [0.125, -0.125];
        let fit = [1.5, 0.0];
        let run = SimulationRun::new("rounding", &actual, &sim, &fit);
        let (before, after) = run.formatted_errors();
        assert_eq!(before, "0.03");
        assert_eq!(after, "2.25");
    }

    #[test]
    fn run_validate() {
        let actual = [1.0, 2.0, 3.0];
        let short = [1.0, 2.0];

        let run = SimulationRun::new("ok", &actual, &actual, &actual);
        assert!(run.validate().is_ok());

        let run = SimulationRun::new("bad_fit", &actual, &actual, &short);
        assert!(matches!(
            run.validate(),
            Err(Error::LengthMismatch { name: "fit", .. })
        ));

        let run = SimulationRun::new("bad_sim", &actual, &short, &short);
        assert!(matches!(
            run.validate(),
            Err(Error::LengthMismatch { name: "sim", .. })
        ));
    }

    #[test]
    fn report_path_default_is_relative() {
        let actual = [1.0];
        let run = SimulationRun::new("my run", &actual, &actual, &actual);
        let options = ReportOptions::default();
        assert_eq!(options.report_path(&run), PathBuf::from("my run.txt"));

        let options = ReportOptions {
            directory: Some(PathBuf::from("out")),
            ..ReportOptions::default()
        };
        assert_eq!(options.report_path(&run), Path::new("out").join("my run.txt"));
    }

    #[test]
    fn options_from_json() {
        let options = ReportOptions::from_json(r#"{ "mode": "verbose", "directory": "reports" }"#)
            .unwrap();
        assert_eq!(options.mode, ReportMode::Verbose);
        assert!(!options.save);
        assert_eq!(options.directory, Some(PathBuf::from("reports")));

        let options = ReportOptions::from_json("{}").unwrap();
        assert_eq!(options, ReportOptions::default());
    }

    #[test]
    fn options_from_json_rejects_unknown_mode() {
        let err = ReportOptions::from_json(r#"{ "mode": "loud" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn mode_dispatches_to_style() {
        let actual = [1.0, 2.0, 3.0];
        let sim = [2.0, 3.0, 4.0];
        let run = SimulationRun::new("dispatch", &actual, &sim, &actual);

        let verbose = ReportMode::Verbose.compose(&run, &1, &2).unwrap();
        assert_eq!(verbose, Verbose.compose(&run, &1, &2).unwrap());

        let concise = ReportMode::Concise.compose(&run, &1, &2).unwrap();
        assert_eq!(concise, Concise.compose(&run, &1, &2).unwrap());
        assert_ne!(verbose, concise);
    }

    #[test]
    fn write_me_up_without_save_writes_nothing() {
        let actual = [1.0, 2.0, 3.0];
        let sim = [2.0, 3.0, 4.0];
        let run = SimulationRun::new("report_unsaved", &actual, &sim, &actual);

        let options = ReportOptions {
            save: false,
            ..saved(ReportMode::Verbose)
        };
        let path = options.report_path(&run);
        let _ = std::fs::remove_file(&path);

        let (before, after) = write_me_up(&run, true, 0.0, &options).unwrap();
        assert_eq!(before, "3.00");
        assert_eq!(after, "0.00");
        assert!(!path.exists());
    }

    #[test]
    fn write_me_up_overwrites() {
        let actual = [1.0, 2.0, 3.0];
        let sim = [2.0, 3.0, 4.0];
        let run = SimulationRun::new("report_overwrite", &actual, &sim, &actual);
        let options = saved(ReportMode::Concise);

        let stale = "stale contents that are longer than the report\n".repeat(10);
        std::fs::write(options.report_path(&run), stale).unwrap();
        write_me_up(&run, "first", 1, &options).unwrap();
        write_me_up(&run, "second", 2, &options).unwrap();

        let contents = std::fs::read_to_string(options.report_path(&run)).unwrap();
        assert!(contents.starts_with("Fit = second\nError = 2\n"));
        assert!(!contents.contains("stale"));
        assert!(!contents.contains("first"));
    }

    #[test]
    fn write_me_up_rejects_mismatch_before_writing() {
        let actual = [1.0, 2.0, 3.0];
        let short = [1.0];
        let run = SimulationRun::new("report_mismatch", &actual, &actual, &short);
        let options = saved(ReportMode::Verbose);
        let path = options.report_path(&run);
        let _ = std::fs::remove_file(&path);

        let err = write_me_up(&run, true, 0.0, &options).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { name: "fit", .. }));
        assert!(!path.exists());
    }

    #[test]
    fn write_me_up_missing_directory_is_io_error() {
        let actual = [1.0];
        let run = SimulationRun::new("report_io", &actual, &actual, &actual);
        let options = ReportOptions {
            directory: Some(test_output_dir().join("does").join("not").join("exist")),
            ..saved(ReportMode::Concise)
        };

        let err = write_me_up(&run, true, 0.0, &options).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, options.report_path(&run)),
            other => panic!("Expected an IO error, got {other}"),
        }
    }
}
