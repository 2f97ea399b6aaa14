//! Error types for pair detection and cross-matching.
//!
//! This module provides a unified error type [`MatchError`] covering the
//! failure modes of the matching engine: invalid threshold configuration,
//! empty input catalogs, and coordinate-string parsing failures.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Raised before any computation? |
//! |---------|----------|-------------------------------|
//! | [`Configuration`](MatchError::Configuration) | Inverted or negative threshold range | Yes |
//! | [`EmptyReferenceCatalog`](MatchError::EmptyReferenceCatalog) | Cross-match against zero reference coordinates | Yes |
//! | [`EmptyPrimaryCatalog`](MatchError::EmptyPrimaryCatalog) | Cross-match with no primary records | Yes |
//! | [`Parse`](MatchError::Parse) | Sexagesimal string does not match any known format | — |
//!
//! Per-record numeric anomalies (zero or negative parallax) are never
//! errors: such records are excluded from clustering locally and stay in
//! the catalog untouched.
//!
//! # Usage
//!
//! Most fallible functions return [`PairResult<T>`], which is
//! `Result<T, MatchError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use starpairs::errors::MatchError;
//!
//! let err = MatchError::configuration("min RA separation exceeds max");
//! assert!(err.to_string().contains("min RA separation"));
//! ```

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias for `Result<T, MatchError>`.
pub type PairResult<T> = Result<T, MatchError>;

/// Unified error type for the matching engine.
///
/// Validation errors are raised immediately, before any pair evaluation or
/// cross-match computation begins; no partial graph or cluster state is
/// ever produced alongside an error.
#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchError {
    /// Threshold configuration is invalid (negative value or min > max).
    #[error("Invalid threshold configuration: {message}")]
    Configuration { message: String },

    /// The reference catalog passed to the cross-match contains no coordinates.
    #[error("Reference catalog contains no coordinates")]
    EmptyReferenceCatalog,

    /// The primary catalog passed to the cross-match contains no records.
    #[error("Primary catalog contains no records")]
    EmptyPrimaryCatalog,

    /// A coordinate string could not be parsed as sexagesimal.
    #[error("Cannot parse coordinate: {message}")]
    Parse { message: String },
}

impl MatchError {
    /// Creates a [`Configuration`](Self::Configuration) error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
