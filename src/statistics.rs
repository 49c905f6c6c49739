//! Functions for comparing observed data against a simulation
//!
//! Every function here is pure: it takes two sequences of values and returns a single number.
//! The first sequence is always the observed (`actual`) data, and the second the simulated or fitted data.
//!
//! # Error Metrics
//! - [`sum_sq_error`]: Sum of squared differences between the two sequences. Lower is better, 0 for identical data.
//!
//! # Model Fit
//! - [`r_squared`]: Spread of the simulation around the observed mean, relative to the spread of the observed data.
//!   - This is **not** the textbook coefficient of determination; see the function docs.
//!
//! # Divergence
//! - [`kl_divergence`]: Kullback-Leibler divergence computed on the raw values.
//! - [`relative_entropy`]: Kullback-Leibler divergence after scaling both sequences to sum to 1.
//!
//! # Descriptive Statistics
//! - [`mean`]: Arithmetic mean of a dataset.
//!
//! # Mismatched lengths
//! Sequences are paired with [`Iterator::zip`], so values past the end of the shorter sequence are ignored.
//! The report builders in [`crate::report`] reject mismatched lengths before any metric is computed.
//!
//! # Examples
//!
//! ```rust
//! use simstat::statistics::{sum_sq_error, r_squared};
//!
//! let actual = vec![1.0, 2.0, 3.0];
//! let sim = vec![2.0, 3.0, 4.0];
//!
//! let sse = sum_sq_error(actual.iter().copied(), sim.iter().copied());
//! assert_eq!(sse, 3.0);
//!
//! let r2 = r_squared(actual.into_iter(), sim.into_iter());
//! println!("R² = {r2}");
//! ```
use crate::value::Value;

/// Computes the arithmetic mean of a sequence of values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// Mean = (Σ x_i) / N
/// where
///   x_i = each value in the dataset, N = total number of values
/// ```
/// </div>
///
/// # Returns
/// The arithmetic mean of all elements in `data`.
/// - Returns NaN if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = simstat::statistics::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for value in data {
        sum += value;
        count += T::one();
    }
    sum / count
}

/// Computes the sum of squared errors (SSE) between two sets of values.
///
/// This is the total squared distance between the observed data and the simulation.
/// It is never negative, and is `0` only when both sequences are identical.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// SSE = Σ (a_i - b_i)²
/// where
///   a_i = observed values, b_i = simulated values
/// ```
/// </div>
///
/// # Parameters
/// - `a`: Iterator over the observed (actual) values.
/// - `b`: Iterator over the simulated values.
///
/// # Example
/// ```rust
/// # use simstat::statistics::sum_sq_error;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![2.0, 3.0, 4.0];
/// let sse = sum_sq_error(a.into_iter(), b.into_iter());
/// assert_eq!(sse, 3.0);
/// ```
pub fn sum_sq_error<T: Value>(a: impl Iterator<Item = T>, b: impl Iterator<Item = T>) -> T {
    let mut total = T::zero();
    for (a, b) in a.zip(b) {
        total += Value::powi(a - b, 2);
    }
    total
}

/// Calculate the R-squared style score used by the simulation reports.
///
/// <div class="warning">
///
/// This measures how far the **simulated** values stray from the **observed** mean,
/// relative to how far the observed values themselves stray from it.
/// It does not use the residuals `a - b`, so it differs from the usual R²:
/// - `r_squared(a, a)` is `0`, not `1`.
/// - A simulation that is flat at the observed mean scores `1`.
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_reg / SS_tot)
/// where
///   SS_reg = Σ (b_i - a_mean)²
///   SS_tot = Σ (a_i - a_mean)²
/// ```
/// </div>
///
/// # Parameters
/// - `a`: The actual (observed) values.
/// - `b`: The simulated values.
///
/// # Returns
/// The score as a `T`.
/// - If `a` is constant, `SS_tot` is zero and the result is NaN or negative infinity.
///
/// # Example
/// ```rust
/// # use simstat::statistics::r_squared;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![2.0, 2.0, 2.0];
/// let r2 = r_squared(a.into_iter(), b.into_iter());
/// assert_eq!(r2, 1.0);
/// ```
pub fn r_squared<T: Value>(a: impl Iterator<Item = T>, b: impl Iterator<Item = T>) -> T {
    let a: Vec<T> = a.collect();
    let a_mean = mean(a.iter().copied());

    //
    // Sum of (b - a_mean)^2
    // Sum of (a - a_mean)^2
    let mut ss_reg = T::zero();
    let mut ss_total = T::zero();
    for (a, b) in a.into_iter().zip(b) {
        ss_reg += Value::powi(b - a_mean, 2);
        ss_total += Value::powi(a - a_mean, 2);
    }

    T::one() - (ss_reg / ss_total)
}

/// Computes the Kullback-Leibler divergence of `b` from `a`, on the raw values.
///
/// The sequences are **not** normalized to sum to 1; use [`relative_entropy`] for that.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// KL = Σ a_i * ln(a_i / b_i)
/// where
///   terms with a_i = 0 contribute 0
/// ```
/// </div>
///
/// # Returns
/// The divergence, in nats.
/// - Infinite if some `b_i` is zero while `a_i` is not.
/// - NaN if either sequence contains negative values.
///
/// # Example
/// ```rust
/// # use simstat::statistics::kl_divergence;
/// let a = vec![0.2, 0.3, 0.5];
/// let kl = kl_divergence(a.iter().copied(), a.iter().copied());
/// assert_eq!(kl, 0.0);
/// ```
pub fn kl_divergence<T: Value>(a: impl Iterator<Item = T>, b: impl Iterator<Item = T>) -> T {
    let mut total = T::zero();
    for (a, b) in a.zip(b) {
        if a == T::zero() {
            continue;
        }
        total += a * Value::ln(a / b);
    }
    total
}

/// Computes the Kullback-Leibler divergence after scaling each sequence to sum to 1.
///
/// This treats both inputs as unnormalized probability distributions,
/// so `relative_entropy(a, b) == relative_entropy(2a, b)`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// p_i = a_i / Σ a, q_i = b_i / Σ b
/// KL = Σ p_i * ln(p_i / q_i)
/// ```
/// [`kl_divergence`] is used on the scaled values
/// </div>
///
/// # Example
/// ```rust
/// # use simstat::statistics::relative_entropy;
/// let a = vec![1.0, 1.0];
/// let b = vec![2.0, 2.0];
/// let kl = relative_entropy(a.into_iter(), b.into_iter());
/// assert_eq!(kl, 0.0);
/// ```
pub fn relative_entropy<T: Value>(a: impl Iterator<Item = T>, b: impl Iterator<Item = T>) -> T {
    let a: Vec<T> = a.collect();
    let b: Vec<T> = b.collect();

    let a_total = a.iter().fold(T::zero(), |acc, &v| acc + v);
    let b_total = b.iter().fold(T::zero(), |acc, &v| acc + v);

    kl_divergence(
        a.into_iter().map(|v| v / a_total),
        b.into_iter().map(|v| v / b_total),
    )
}
