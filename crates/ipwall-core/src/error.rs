//! Error types for ipwall-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Range text parsing failure.
///
/// A failed parse is never partially applied: the store is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not a valid `"A.B.C.D-E.F.G.H"` range
    #[error("malformed range '{input}': {reason}")]
    Malformed {
        /// The rejected input
        input: String,
        /// What made it invalid
        reason: &'static str,
    },
}

/// Range store mutation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Memory for one more entry could not be reserved; the store is unchanged
    #[error("out of memory while adding range")]
    OutOfMemory,
}

/// Engine-level failure for text-based control operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Range text was rejected by the parser
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Store mutation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configuration loading failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or structure error
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A seed range failed to parse
    #[error(transparent)]
    Range(#[from] ParseError),
}

/// Convenience result type for engine operations
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
