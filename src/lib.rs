//! # Simstat
//! ## How far off was the simulation, and did fitting help?
//!
//! This library compares observed data against a simulation of it, before and after the simulation was fitted,
//! and turns the comparison into a short text report.
//!
//! I provide a set of tools designed to help you:
//! - Score a simulation against observed data ([`statistics`])
//!   - Sum of squared errors, an R² style score, and Kullback-Leibler divergence
//! - Summarize a fit as before/after error strings, and optionally save a report ([`report`])
//!   - Two report layouts, [`report::Verbose`] and [`report::Concise`], chosen per call or through [`report::ReportOptions`]
//! - Draw random starting parameters for an optimizer ([`initialization`])
//! - Write tests that compare floating point results ([`test`])
//!
//! The simplest use-case is to check how much a fit improved a simulation:
//! ```rust
//! use simstat::report::concise;
//!
//! let actual = [1.0, 2.0, 3.0];
//! let sim = [2.0, 3.0, 4.0];
//! let fit = [1.0, 2.0, 3.0];
//!
//! let (before, after) = concise::write_me_up("my_run", &actual, &sim, &fit, true, 0.0, false).unwrap();
//! assert_eq!(before, "3.00");
//! assert_eq!(after, "0.00");
//! ```
//!
//! # Core Concepts
//! - `actual` is the observed data. Every metric compares something against it.
//! - `sim` is the simulation before fitting, `fit` is the simulation after fitting.
//!   - Both must have the same length as `actual`.
//! - `fitted` and `error` are whatever the optimizer reported. They are written to the report through [`display::Metadata`],
//!   so `true` is `True` and `0.0` stays `0.0`.
//! - The **R²** used here is not the textbook coefficient of determination. See [`statistics::r_squared`].
//!
//! # Implementation Details
//!
//! Metric functions are generic over [`value::Value`], which covers `f32` and `f64`, and build on the `nalgebra`
//! numeric traits. They never fail: degenerate input produces NaN or infinity, which reports print as `nan` / `inf`.
//!
//! Report functions return [`error::Result`], and log through the `log` facade. No logger is installed by this crate.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

pub mod display;
pub mod error;
pub mod initialization;
pub mod report;
pub mod statistics;
pub mod value;

pub use report::{write_me_up, ReportMode, ReportOptions, SimulationRun};
