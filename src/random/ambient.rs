//! Non-reproducible randomness for "pick something new" actions.
//!
//! Nothing here may feed shape generation; a blob is a function of its
//! [`crate::ShapeParams`] alone.

use rand::Rng;

/// Uniform draws from ambient (non-seeded) randomness.
pub trait AmbientRandomSource {
    /// Uniform integer in `[min, max]`; reversed bounds are swapped.
    fn rand_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[min, max)`; an empty or non-finite range yields the lower bound.
    fn rand_float(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng> AmbientRandomSource for R {
    fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.random_range(lo..=hi)
    }

    fn rand_float(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo >= hi || !(hi - lo).is_finite() {
            return lo;
        }
        self.random_range(lo..hi)
    }
}

/// The thread-local OS-seeded generator.
pub fn thread_ambient() -> rand::rngs::ThreadRng {
    rand::rng()
}

#[cfg(test)]
#[path = "../../tests/unit/random/ambient.rs"]
mod tests;
