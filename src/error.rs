//! Errors for the fallible ways of making a [`Tree`][crate::Tree].

use thiserror::Error;

/// Everything that can go wrong while parsing a tree out of text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token in the key list didn't parse as a key.
    #[error("invalid key {token:?} at position {position}: {reason}")]
    InvalidKey {
        /// Index of the offending token among all tokens, starting at 0.
        position: usize,
        /// The offending token.
        token: String,
        /// Why the key type rejected it.
        reason: String,
    },

    /// The key list opened with `[` but never closed it (or the other way around).
    #[error("unmatched bracket in key list")]
    UnmatchedBracket,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
