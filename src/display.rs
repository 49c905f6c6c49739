//! Utilities for displaying metric values in reports
//!
//! Reports print every number in fixed-point notation with a set number of decimals.
//! Non-finite values are written as `nan`, `inf` and `-inf`, so a report for a degenerate
//! dataset still reads the same no matter which float type produced it.
//!
//! # Helpers
//! - [`Fixed`]: Display adapter that renders a value with a fixed number of decimals.
//! - [`format_fixed`]: Shorthand for `Fixed::new(value, precision).to_string()`.
//! - [`Metadata`]: How the optimizer's `fitted` and `error` values are written on the `Fit = ` and `Error = ` lines.
//! - [`Plain`]: Writes any other [`std::fmt::Display`] type as fit metadata.
use crate::value::Value;

/// Number of decimals used for each metric line of a verbose report (`SSE = 3.000`)
pub const METRIC_PRECISION: usize = 3;

/// Number of decimals used for the before/after error strings (`3.00`)
pub const ERROR_PRECISION: usize = 2;

/// Display adapter for fixed-point output.
///
/// # Example
/// ```
/// # use simstat::display::Fixed;
/// assert_eq!(Fixed::new(2.0f64 / 3.0, 3).to_string(), "0.667");
/// assert_eq!(Fixed::new(f64::NAN, 3).to_string(), "nan");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed<T: Value> {
    value: T,
    precision: usize,
}

impl<T: Value> Fixed<T> {
    /// Wraps `value` to be displayed with `precision` decimals
    pub fn new(value: T, precision: usize) -> Self {
        Self { value, precision }
    }
}

impl<T: Value> std::fmt::Display for Fixed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.value;
        if num_traits::float::FloatCore::is_nan(value) {
            write!(f, "nan")
        } else if num_traits::float::FloatCore::is_infinite(value) {
            if value < T::zero() {
                write!(f, "-inf")
            } else {
                write!(f, "inf")
            }
        } else {
            write!(f, "{value:.prec$}", prec = self.precision)
        }
    }
}

/// Formats a value in fixed-point notation with `precision` decimals.
///
/// # Example
/// ```
/// # use simstat::display::format_fixed;
/// assert_eq!(format_fixed(3.0f64, 2), "3.00");
/// assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-inf");
/// ```
pub fn format_fixed<T: Value>(value: T, precision: usize) -> String {
    Fixed::new(value, precision).to_string()
}

/// Fit metadata written to the `Fit = ` and `Error = ` lines of a report.
///
/// Values are spelled the way the optimizer's own logs spell them:
/// - `bool` is `True` / `False`
/// - Floats always keep a decimal point (`0.0`, `0.5`), and non-finite values are `nan`, `inf` and `-inf`
/// - `Option::None` is `None`
/// - Integers, strings and chars use their [`std::fmt::Display`] form
///
/// Wrap anything else in [`Plain`].
///
/// # Example
/// ```
/// # use simstat::display::Metadata;
/// assert_eq!((&true as &dyn Metadata).to_string(), "True");
/// assert_eq!((&0.0f64 as &dyn Metadata).to_string(), "0.0");
/// assert_eq!((&Some(3) as &dyn Metadata).to_string(), "3");
/// ```
pub trait Metadata {
    /// Writes the value as it appears in a report
    ///
    /// # Errors
    /// Returns an error if the formatter fails.
    fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;
}

impl std::fmt::Display for dyn Metadata + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_metadata(f)
    }
}

impl Metadata for bool {
    fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self {
            write!(f, "True")
        } else {
            write!(f, "False")
        }
    }
}

macro_rules! impl_float_metadata {
    ($($t:ty),+) => {$(
        impl Metadata for $t {
            fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if self.is_nan() {
                    write!(f, "nan")
                } else if self.is_infinite() {
                    write!(f, "{}", if *self < 0.0 { "-inf" } else { "inf" })
                } else {
                    write!(f, "{self:?}")
                }
            }
        }
    )+};
}
impl_float_metadata!(f32, f64);

macro_rules! impl_display_metadata {
    ($($t:ty),+) => {$(
        impl Metadata for $t {
            fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{self}")
            }
        }
    )+};
}
impl_display_metadata!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, str, String);

impl<T: Metadata> Metadata for Option<T> {
    fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Some(value) => value.fmt_metadata(f),
            None => write!(f, "None"),
        }
    }
}

impl<T: Metadata + ?Sized> Metadata for &T {
    fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (**self).fmt_metadata(f)
    }
}

/// Writes any [`std::fmt::Display`] type as fit metadata, unchanged.
///
/// # Example
/// ```
/// # use simstat::display::{Metadata, Plain};
/// let status = Plain(std::net::Ipv4Addr::LOCALHOST);
/// assert_eq!((&status as &dyn Metadata).to_string(), "127.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plain<T: std::fmt::Display>(pub T);

impl<T: std::fmt::Display> Metadata for Plain<T> {
    fn fmt_metadata(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
