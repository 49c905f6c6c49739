//! Assertions for tests that compare metric values.
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal within a small tolerance (epsilon).
//! This is useful for comparing computed values where exact equality is not expected due to rounding errors.
//! - Uses the machine epsilon for the floating-point type as the tolerance.
//! - `assert_eq!` equivalent for floats.
//! - Two NaNs compare as close, so degenerate metrics can be asserted on directly.
//!
//! ### [`crate::assert_all_close`]
//! Asserts that two slices of floating-point values are approximately equal element-wise within a small tolerance (epsilon).
//! - Element-wise [`crate::assert_close`].

/// Asserts that two floating-point values are approximately equal within a small tolerance (epsilon).
///
/// # Parameters
/// - `$a`, `$b`: Values to compare. Both must be the same [`crate::value::Value`] type.
/// - `$msg`: *(optional)* Custom failure message. Supports formatting arguments just like `format!`.
///
/// # Panics
/// If the values differ by more than `T::epsilon()`, or if only one of them is NaN.
///
/// # Examples
/// ```
/// # use simstat::assert_close;
/// assert_close!(1.0 + 1e-16, 1.0, "Nearly equal");
/// assert_close!(f64::NAN, f64::NAN);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(, $msg:literal $(, $($args:tt),*)?)?) => { #[allow(clippy::float_cmp)] {
        fn epsilon<T: $crate::value::Value>(_: T) -> T {
            T::epsilon()
        }
        #[allow(clippy::eq_op)]
        fn is_nan<T: $crate::value::Value>(v: T) -> bool {
            v != v
        }

        #[allow(unused_mut, unused_assignments)] let mut msg = "Values not close".to_string();
        $( msg = format!($msg, $($($args)?)?); )?

        let (a, b) = ($a, $b);
        assert!(
            (is_nan(a) && is_nan(b)) || a == b || $crate::value::Value::abs(a - b) <= epsilon(a),
            "{msg}: {a} != {b}"
        );
    }};
}

/// Asserts that two slices of floating-point values are approximately equal element-wise within a small tolerance (epsilon).
///
/// # Parameters
/// - `$src`: Source slice (implements `iter()`).
/// - `$dst`: Destination slice (same length as `$src`).
/// - `$msg`: *(optional)* Custom failure message. Defaults to `"{len} elements"`.
///   Supports formatting arguments just like `format!`.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differ by more than `T::epsilon()`.
///
/// # Examples
/// ```
/// # use simstat::assert_all_close;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![1.0 + 1e-16, 2.0, 3.0];
///
/// assert_all_close!(a, b); // OK
/// assert_all_close!(a, b, "Vectors must match"); // Custom message
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr  $(, $msg:literal $(, $($args:tt),*)?)?) => {
        #[allow(unused_assignments, unused_mut)]
        let mut msg = format!("{} elements", $src.len());
        $(
            msg = format!($msg, $($($args)?)?);
        )?

        assert_eq!($src.len(), $dst.len(), "{msg} - length mismatch");

        for (i, (s, d)) in $src.iter().zip($dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, "{msg} - src[{i}]");
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn assert_close_macro() {
        assert_close!(1.0 + 1e-16, 1.0, "Values should be close");
        assert_close!(0.5f32, 0.5f32);
        assert_close!(f64::NAN, f64::NAN);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn assert_close_macro_fails() {
        assert_close!(1.0, 1.1);
    }

    #[test]
    #[should_panic(expected = "Values not close")]
    fn assert_close_macro_nan_against_number() {
        assert_close!(f64::NAN, 1.0);
    }

    #[test]
    fn assert_all_close_macro() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0 + 1e-16, 2.0, 3.0];
        assert_all_close!(a, b);
        assert_all_close!(a, b, "Vectors must match");
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn assert_all_close_macro_length_mismatch() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0];
        assert_all_close!(a, b);
    }
}
