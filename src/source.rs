//! Randomness capability consumed by [`Generator`](crate::Generator).
//!
//! The generator never constructs its own source. Whatever is injected decides
//! how unpredictable the identifiers are: a weak or seeded source silently
//! produces guessable identifiers without any detectable failure. For
//! security-sensitive identifiers (session keys, reset tokens, ...) inject a
//! cryptographically secure generator such as [`rand::rngs::StdRng`] seeded
//! from the operating system, or [`rand::rngs::ThreadRng`].

use rand::Rng;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a uniformly distributed value in `[0, bound)`.
    ///
    /// Callers always pass `bound > 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
