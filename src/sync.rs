//! Thread-safe wrapper around [`Generator`].
//!
//! [`Generator`] itself does no locking. `SharedGenerator` serialises access
//! to one generator (and so to its source) behind a mutex, for callers that
//! hand a single instance to several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::generator::Generator;
use crate::options::IdOption;
use crate::source::RandomSource;

/// A cloneable, lock-protected handle to a single generator.
#[derive(Debug)]
pub struct SharedGenerator<R> {
    inner: Arc<Mutex<Generator<R>>>,
}

impl<R> Clone for SharedGenerator<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedGenerator<R> {
    /// Create a shared generator, see [`Generator::new`].
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Generator::new`].
    pub fn new<I>(source: R, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = IdOption>,
    {
        Ok(Self::from(Generator::new(source, options)?))
    }

    /// Generate an identifier of the default length.
    pub fn new_id(&self) -> String {
        self.inner.lock().new_id()
    }

    /// Generate an identifier of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// See [`Generator::new_id_with_length`].
    pub fn new_id_with_length(&self, length: usize) -> Result<String> {
        self.inner.lock().new_id_with_length(length)
    }
}

impl<R> From<Generator<R>> for SharedGenerator<R> {
    fn from(generator: Generator<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }
}
