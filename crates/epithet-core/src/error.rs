//! Error types for the Epithet engine.
//!
//! The engine itself degrades gracefully on sparse photo input, so the only
//! runtime failures are configuration problems and snapshots that cannot be
//! imported. Each carries enough context to tell the caller what to fix.

use thiserror::Error;

/// Top-level error type for Epithet operations.
#[derive(Error, Debug)]
pub enum EpithetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Vocabulary snapshot errors
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while importing a vocabulary snapshot.
///
/// The live store is never touched when one of these is returned.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Snapshot could not be parsed or violates a store invariant
    #[error("Malformed vocabulary snapshot: {0}")]
    MalformedSnapshot(String),

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Convenience type alias for Epithet results.
pub type Result<T> = std::result::Result<T, EpithetError>;

/// Convenience type alias for snapshot import results.
pub type VocabularyResult<T> = std::result::Result<T, VocabularyError>;
