//! Error types for the FASTGNP core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GnpError>;

/// Error produced when configuring a [`crate::Generator`] or parsing an
/// [`crate::Algorithm`] selector.
///
/// Both conditions are detected before any random state exists, so a failed
/// call never consumes entropy and never yields a partial result.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GnpError {
    /// The vertex count must be positive.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The invalid vertex count supplied by the caller.
        got: u64,
    },
    /// The edge probability must lie within `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// The algorithm selector does not name a known algorithm.
    #[error("unknown algorithm `{provided}`; expected `per`, `pzer`, or `pprezer`")]
    UnknownAlgorithm {
        /// Raw selector supplied by the caller.
        provided: String,
    },
}

/// Stable codes describing [`GnpError`] variants.
///
/// # Examples
/// ```
/// use fastgnp_core::{GnpError, GnpErrorCode};
///
/// let err = GnpError::InvalidVertexCount { got: 0 };
/// assert_eq!(err.code(), GnpErrorCode::InvalidVertexCount);
/// assert_eq!(err.code().as_str(), "GNP_INVALID_VERTEX_COUNT");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GnpErrorCode {
    /// The vertex count must be positive.
    InvalidVertexCount,
    /// The edge probability must lie within `[0, 1]`.
    InvalidProbability,
    /// The algorithm selector does not name a known algorithm.
    UnknownAlgorithm,
}

impl GnpErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertexCount => "GNP_INVALID_VERTEX_COUNT",
            Self::InvalidProbability => "GNP_INVALID_PROBABILITY",
            Self::UnknownAlgorithm => "GNP_UNKNOWN_ALGORITHM",
        }
    }
}

impl fmt::Display for GnpErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GnpError {
    /// Retrieve the stable [`GnpErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GnpErrorCode {
        match self {
            Self::InvalidVertexCount { .. } => GnpErrorCode::InvalidVertexCount,
            Self::InvalidProbability { .. } => GnpErrorCode::InvalidProbability,
            Self::UnknownAlgorithm { .. } => GnpErrorCode::UnknownAlgorithm,
        }
    }
}
