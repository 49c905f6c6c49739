//! Random starting points for parameter searches.
//!
//! Nothing in [`crate::report`] calls this; it exists for callers that seed an optimizer
//! with a handful of random parameters before producing a `fit`.
use rand::SeedableRng;
use rand_distr::{Distribution, StandardUniform};

use crate::{error::Result, value::Value};

/// Number of values produced by [`random_initialization`]
pub const INITIAL_PARAMETERS: usize = 5;

/// Draws below this value are rejected and drawn again
pub const MINIMUM_DRAW: f64 = 0.1;

fn rng(seed: Option<u64>) -> rand::rngs::SmallRng {
    match seed {
        Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
        None => rand::rngs::SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Generates [`INITIAL_PARAMETERS`] random values, each rounded to one decimal place.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// - Each value is drawn from a uniform distribution on `[0, 1)`.
/// - Draws below [`MINIMUM_DRAW`] are discarded and drawn again.
/// - The accepted draw is rounded to the nearest `0.1`, so results lie in `0.1..=1.0`.
/// </div>
///
/// # Parameters
/// - `seed` *(optional)*: Fixes the RNG seed for reproducibility.
///   If not provided, a system RNG will be used each run.
///
/// # Errors
/// Returns [`crate::error::Error::CastFailed`] if a draw cannot be represented in `T`.
///
/// # Example
/// ```
/// # use simstat::initialization::random_initialization;
/// let params = random_initialization::<f64>(Some(42)).unwrap();
/// assert_eq!(params.len(), 5);
/// assert_eq!(params, random_initialization::<f64>(Some(42)).unwrap());
/// ```
pub fn random_initialization<T: Value>(seed: Option<u64>) -> Result<Vec<T>> {
    let mut rng = rng(seed);

    let mut values = Vec::with_capacity(INITIAL_PARAMETERS);
    while values.len() < INITIAL_PARAMETERS {
        let draw: f64 = StandardUniform.sample(&mut rng);
        if draw < MINIMUM_DRAW {
            continue;
        }

        let rounded = (draw * 10.0).round() / 10.0;
        values.push(T::try_cast(rounded)?);
    }

    Ok(values)
}
