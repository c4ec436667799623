//! Error handling module.
//!
//! Every failure in this crate is a minimum-entropy violation detected
//! synchronously at the offending call. None of them are retried or logged
//! here; they are returned to the caller as-is.

/// Identifier generation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdGenError {
    /// The resolved character set has fewer than `min` characters.
    #[error("character set is too small ({size} characters), needs at least {min} characters")]
    CharSetTooSmall {
        /// Number of characters in the rejected set.
        size: usize,
        /// Required minimum.
        min: usize,
    },

    /// The resolved default length is below `min`.
    #[error(
        "default ID length is too small ({length}), needs to be at least {min} characters long"
    )]
    DefaultLengthTooSmall {
        /// Rejected default length.
        length: usize,
        /// Required minimum.
        min: usize,
    },

    /// A per-call length is below `min`.
    #[error("given ID length is too small ({length}), needs to be at least {min} characters long")]
    LengthTooSmall {
        /// Rejected length.
        length: usize,
        /// Required minimum.
        min: usize,
    },
}

impl IdGenError {
    /// Whether the error was raised while constructing a generator.
    ///
    /// Construction errors mean no generator exists; a per-call error leaves
    /// the generator fully usable.
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::CharSetTooSmall { .. } | Self::DefaultLengthTooSmall { .. }
        )
    }
}

/// Result type alias using `IdGenError`.
pub type Result<T> = std::result::Result<T, IdGenError>;
