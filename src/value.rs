//! Numeric types used by the comparison metrics.
//!
//! This module defines the [`Value`] trait, which abstracts the floating point
//! types that observed and simulated data can be expressed in.
//!
//! # Traits
//!
//! - [`Value`]: Extends `FloatCore`, `Scalar`, and `RealField` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - Unambiguous `powi`, `abs`, `ln` and `is_finite` helpers.
//!
//! # Example
//!
//! ```rust
//! use simstat::value::Value;
//!
//! let two = f64::two();
//! let squared = Value::powi(two, 2);
//! assert_eq!(squared, 4.0);
//! ```
use crate::error::Error;

/// Numeric type for observed and simulated values
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::Display
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Raises the value to the power of an integer
    #[must_use]
    fn powi(self, n: i32) -> Self {
        nalgebra::ComplexField::powi(self, n)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Natural logarithm
    #[must_use]
    fn ln(self) -> Self {
        nalgebra::ComplexField::ln(self)
    }

    /// True if the value is neither NaN nor infinite
    fn is_finite(self) -> bool {
        num_traits::float::FloatCore::is_finite(self)
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::Display
        + std::fmt::LowerExp
{
}
