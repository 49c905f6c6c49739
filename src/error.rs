//! Error types for metric comparisons and report generation
//!
//! This module defines the failures that can surface while comparing observed
//! and simulated data or while persisting a report, along with a convenient `Result` alias.
use std::path::PathBuf;

/// Errors that can occur while comparing sequences or writing reports.
///
/// Nothing in this crate recovers from these; they are handed straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A compared sequence does not have the same number of values as the observed data.
    #[error("Sequence `{name}` has {found} values, but the observed data has {expected}")]
    LengthMismatch {
        /// Which sequence was rejected (`sim` or `fit`)
        name: &'static str,
        /// Length of the observed data
        expected: usize,
        /// Length of the rejected sequence
        found: usize,
    },

    /// The report file could not be written.
    ///
    /// The file may have been truncated or partially written when this is returned.
    #[error("Failed to write report to {}: {source}", .path.display())]
    Io {
        /// Path of the report file
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Report options could not be parsed.
    #[error("Invalid report options: {0}")]
    Config(#[from] serde_json::Error),

    /// Report text could not be assembled.
    #[error("Failed to format report")]
    Format(#[from] std::fmt::Error),

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for metric comparisons and reports
pub type Result<T> = std::result::Result<T, Error>;
