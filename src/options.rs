//! Generator options and their resolution.
//!
//! Options are override items applied in order over the built-in defaults.
//! Later items win when they set the same field. Validation runs once, after
//! every item has been merged.

use crate::error::{IdGenError, Result};

/// Minimum number of characters an accepted character set must contain.
pub const MIN_CHARSET_SIZE: usize = 10;

/// Minimum accepted identifier length, for both the default and per-call lengths.
pub const MIN_LENGTH: usize = 10;

/// Identifier length used when no override is supplied.
pub const DEFAULT_LENGTH: usize = 20;

/// Case-sensitive alphanumerics, used when no character set is supplied.
///
/// The order is part of the contract: seeded sources reproduce identical
/// identifiers only if indices map to the same characters.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// A single override applied on top of the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOption {
    /// Replace the sampling alphabet.
    CharSet(Vec<char>),
    /// Replace the length used by [`Generator::new_id`](crate::Generator::new_id).
    DefaultLength(usize),
}

/// Use the characters of `charset` as the sampling alphabet.
///
/// Characters are counted as Unicode scalar values. Duplicates are kept and
/// make the duplicated character proportionally more likely.
pub fn with_charset(charset: impl AsRef<str>) -> IdOption {
    IdOption::CharSet(charset.as_ref().chars().collect())
}

/// Use an explicit sequence of characters as the sampling alphabet.
pub fn with_charset_chars(charset: impl IntoIterator<Item = char>) -> IdOption {
    IdOption::CharSet(charset.into_iter().collect())
}

/// Set the default identifier length.
#[must_use]
pub const fn with_default_length(length: usize) -> IdOption {
    IdOption::DefaultLength(length)
}

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    charset: Vec<char>,
    default_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.chars().collect(),
            default_length: DEFAULT_LENGTH,
        }
    }
}

impl Options {
    /// Merge `options` over the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenError::CharSetTooSmall`] if the resolved character set has
    /// fewer than [`MIN_CHARSET_SIZE`] characters, otherwise
    /// [`IdGenError::DefaultLengthTooSmall`] if the resolved default length is
    /// below [`MIN_LENGTH`].
    pub fn resolve<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = IdOption>,
    {
        let mut resolved = Self::default();
        for option in options {
            resolved.apply(option);
        }
        resolved.validate()?;
        Ok(resolved)
    }

    /// The resolved sampling alphabet.
    #[must_use]
    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    /// The resolved default length.
    #[must_use]
    pub const fn default_length(&self) -> usize {
        self.default_length
    }

    pub(crate) fn into_parts(self) -> (Vec<char>, usize) {
        (self.charset, self.default_length)
    }

    fn apply(&mut self, option: IdOption) {
        match option {
            IdOption::CharSet(charset) => self.charset = charset,
            IdOption::DefaultLength(length) => self.default_length = length,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.charset.len() < MIN_CHARSET_SIZE {
            return Err(IdGenError::CharSetTooSmall {
                size: self.charset.len(),
                min: MIN_CHARSET_SIZE,
            });
        }
        if self.default_length < MIN_LENGTH {
            return Err(IdGenError::DefaultLengthTooSmall {
                length: self.default_length,
                min: MIN_LENGTH,
            });
        }
        Ok(())
    }
}
