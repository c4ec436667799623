//! Random identifier generator.
//!
//! A [`Generator`] owns a validated alphabet, a validated default length and
//! the randomness source it was constructed with. Each character of an
//! identifier is an independent uniform draw (with replacement) from the
//! alphabet, so repeated characters are expected.
//!
//! Output is a pure function of the alphabet and the sequence of draws: the
//! same seeded source yields the same identifiers, which tests rely on.

use tracing::{debug, trace};

use crate::error::{IdGenError, Result};
use crate::options::{IdOption, MIN_LENGTH, Options};
use crate::source::RandomSource;

/// Generates random identifiers from a fixed character set.
///
/// All sampling methods take `&mut self` because every draw advances the
/// source. Wrap the generator in a lock (or use
/// [`SharedGenerator`](crate::SharedGenerator)) to share it across threads.
///
/// # Example
///
/// ```
/// use idgen::{Generator, with_charset, with_default_length};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut generator = Generator::new(
///     StdRng::from_os_rng(),
///     [with_charset("0123456789abcdef"), with_default_length(32)],
/// )?;
/// assert_eq!(generator.new_id().len(), 32);
/// # Ok::<(), idgen::IdGenError>(())
/// ```
///
/// A generator is not `Clone`: a copy would carry the same source state and
/// replay the original's identifiers.
///
/// ```compile_fail
/// use idgen::Generator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let generator = Generator::new(StdRng::seed_from_u64(0), [])?;
/// let copy: Generator<StdRng> = generator.clone();
/// # Ok::<(), idgen::IdGenError>(())
/// ```
#[derive(Debug)]
pub struct Generator<R> {
    charset: Vec<char>,
    default_length: usize,
    source: R,
}

impl<R: RandomSource> Generator<R> {
    /// Create a generator over `source`, applying `options` to the defaults.
    ///
    /// The source is moved in as-is; it is never reseeded or copied. Its
    /// statistical quality is the caller's responsibility, see
    /// [`source`](crate::source).
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Options::resolve`]; no generator is
    /// created in that case.
    pub fn new<I>(source: R, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = IdOption>,
    {
        Ok(Self::with_options(source, Options::resolve(options)?))
    }

    /// Create a generator from already resolved options.
    pub fn with_options(source: R, options: Options) -> Self {
        let (charset, default_length) = options.into_parts();
        debug!(
            charset_size = charset.len(),
            default_length, "Identifier generator created"
        );
        Self {
            charset,
            default_length,
            source,
        }
    }

    /// Generate an identifier of the default length.
    pub fn new_id(&mut self) -> String {
        self.sample(self.default_length)
    }

    /// Generate an identifier of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenError::LengthTooSmall`] if `length` is below
    /// [`MIN_LENGTH`]. The source is not advanced in that case.
    pub fn new_id_with_length(&mut self, length: usize) -> Result<String> {
        if length < MIN_LENGTH {
            return Err(IdGenError::LengthTooSmall {
                length,
                min: MIN_LENGTH,
            });
        }
        Ok(self.sample(length))
    }

    /// Endless iterator of default-length identifiers.
    pub fn ids(&mut self) -> impl Iterator<Item = String> + '_ {
        std::iter::repeat_with(move || self.new_id())
    }

    fn sample(&mut self, length: usize) -> String {
        let bound = self.charset.len();
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(self.charset[self.source.next_index(bound)]);
        }
        trace!(length, "Identifier generated");
        out
    }
}

impl<R> Generator<R> {
    /// The sampling alphabet.
    #[must_use]
    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    /// The length used by [`Generator::new_id`].
    #[must_use]
    pub const fn default_length(&self) -> usize {
        self.default_length
    }

    /// Consume the generator and hand back its source.
    pub fn into_source(self) -> R {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::options::{DEFAULT_CHARSET, with_charset, with_default_length};

    /// Replays a fixed list of draws, wrapping around, and counts them.
    #[derive(Debug)]
    struct ScriptedSource {
        draws: Vec<usize>,
        taken: usize,
    }

    impl ScriptedSource {
        fn new(draws: Vec<usize>) -> Self {
            Self { draws, taken: 0 }
        }

        fn counting() -> Self {
            Self::new((0..1000).collect())
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_index(&mut self, bound: usize) -> usize {
            let draw = self.draws[self.taken % self.draws.len()] % bound;
            self.taken += 1;
            draw
        }
    }

    fn no_options() -> std::iter::Empty<IdOption> {
        std::iter::empty()
    }

    #[test]
    fn test_default_generator() {
        let mut generator = Generator::new(ScriptedSource::counting(), no_options()).unwrap();

        let got: Vec<String> = (0..4).map(|_| generator.new_id()).collect();
        assert_eq!(
            got,
            [
                "abcdefghijklmnopqrst",
                "uvwxyzABCDEFGHIJKLMN",
                "OPQRSTUVWXYZ12345678",
                "90abcdefghijklmnopqr",
            ]
        );
    }

    #[test]
    fn test_generator_with_options() {
        let mut generator = Generator::new(
            ScriptedSource::new(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8]),
            [with_charset("0123456789"), with_default_length(12)],
        )
        .unwrap();

        assert_eq!(generator.new_id(), "314159265358");
        assert_eq!(generator.new_id(), "314159265358");
    }

    #[test]
    fn test_new_id_with_length() {
        let mut generator = Generator::new(ScriptedSource::counting(), no_options()).unwrap();

        assert_eq!(
            generator.new_id_with_length(30).unwrap(),
            "abcdefghijklmnopqrstuvwxyzABCD"
        );
        assert_eq!(generator.new_id_with_length(10).unwrap(), "EFGHIJKLMN");
    }

    #[test]
    fn test_length_too_small_consumes_nothing() {
        let mut generator = Generator::new(ScriptedSource::counting(), no_options()).unwrap();

        let err = generator.new_id_with_length(9).unwrap_err();
        assert_eq!(err, IdGenError::LengthTooSmall { length: 9, min: 10 });
        assert!(generator.new_id_with_length(0).is_err());

        // The generator is still usable and starts at the first draw.
        assert_eq!(generator.new_id(), "abcdefghijklmnopqrst");
        assert_eq!(generator.into_source().taken, 20);
    }

    #[test]
    fn test_construction_errors() {
        let err = Generator::new(ScriptedSource::counting(), [with_charset("abc")]).unwrap_err();
        assert!(matches!(err, IdGenError::CharSetTooSmall { size: 3, .. }));

        let err =
            Generator::new(ScriptedSource::counting(), [with_default_length(5)]).unwrap_err();
        assert!(matches!(err, IdGenError::DefaultLengthTooSmall { length: 5, .. }));
    }

    #[test]
    fn test_accessors() {
        let generator = Generator::new(StdRng::seed_from_u64(0), no_options()).unwrap();
        assert_eq!(generator.default_length(), 20);
        assert_eq!(generator.charset().iter().collect::<String>(), DEFAULT_CHARSET);
    }

    #[test]
    fn test_alphabet_containment() {
        let mut generator = Generator::new(
            StdRng::seed_from_u64(1),
            [with_charset("αβγδεζηθικ"), with_default_length(64)],
        )
        .unwrap();

        for id in generator.ids().take(50) {
            assert_eq!(id.chars().count(), 64);
            assert!(id.chars().all(|c| "αβγδεζηθικ".contains(c)));
        }
    }

    #[test]
    fn test_seeded_generators_reproduce() {
        let mut first = Generator::new(StdRng::seed_from_u64(0), no_options()).unwrap();
        let mut second = Generator::new(StdRng::seed_from_u64(0), no_options()).unwrap();

        let left: Vec<String> = first.ids().take(10).collect();
        let right: Vec<String> = second.ids().take(10).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_borrowed_source() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = {
            let mut generator = Generator::new(&mut rng, no_options()).unwrap();
            generator.new_id()
        };
        assert_eq!(id.len(), 20);
    }
}
