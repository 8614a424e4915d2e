//! Error taxonomy shared by the metaprune crates.
//!
//! The planning core is pure and deterministic, so every error here is
//! terminal for the run: retrying would reproduce the same failure. Callers
//! decide whether to abort or re-source their input.

use thiserror::Error;

/// Errors surfaced while planning delete-metadata instructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PruneError {
    /// A raw identifier did not split into exactly
    /// `ticker-randomSequence-serialHex`.
    #[error("invalid token identifier format: {identifier}")]
    InvalidTokenFormat {
        /// The offending raw identifier.
        identifier: String,
    },

    /// The serial suffix of an identifier was not a valid base-16 unsigned
    /// integer.
    #[error("invalid hex serial suffix in token identifier: {identifier}")]
    InvalidSerial {
        /// The offending raw identifier.
        identifier: String,
    },

    /// The configured per-bulk capacity was zero. Capacity is never clamped.
    #[error("bulk capacity must be at least 1")]
    InvalidCapacity,
}

/// Convenience alias used across the workspace.
pub type Result<T, E = PruneError> = std::result::Result<T, E>;
