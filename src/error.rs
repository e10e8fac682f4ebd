//! Error types for record decoding.
//!
//! This module provides the [`DecodeError`] type for all decoding operations
//! and the [`Result`] convenience type.
//!
//! Errors are deliberately rare: unknown tags, unknown subfield codes and
//! unparsable literals are diagnostics followed by omission, never errors.
//! A [`DecodeError`] is raised only when a field's structure contradicts its
//! tag — a fixed-width control tag delivered with subfield data, or the
//! reverse — which invalidates the one record being decoded, not the batch.

use thiserror::Error;

/// Error type for record decoding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A control tag (such as 008) arrived carrying subfield data.
    #[error("field {tag}: expected a fixed-width control value, got subfield data")]
    ExpectedControlField {
        /// The offending field tag.
        tag: String,
    },

    /// A data tag arrived carrying a fixed-width control value.
    #[error("field {tag}: expected subfield data, got a fixed-width control value")]
    ExpectedDataField {
        /// The offending field tag.
        tag: String,
    },
}

/// Convenience type alias for [`std::result::Result`] with [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
