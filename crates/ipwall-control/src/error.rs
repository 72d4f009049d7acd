//! Error types for the control plane

use thiserror::Error;

use ipwall_core::{EngineError, ParseError};

/// Control command failure.
///
/// Every variant is recovered at the command boundary and reported to the
/// caller; none are fatal to the running engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Range text was rejected by the parser
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The engine rejected the operation
    #[error(transparent)]
    Engine(EngineError),

    /// The LIST response does not fit the wire budget; no partial data is
    /// returned
    #[error("list response needs {needed} bytes but the budget is {limit}")]
    ResponseTooLarge {
        /// Bytes the full listing would occupy
        needed: usize,
        /// The fixed response budget
        limit: usize,
    },
}

// Parse failures inside the engine surface as `Parse`, so callers see one
// taxonomy regardless of which operation rejected the text.
impl From<EngineError> for ControlError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Parse(e) => ControlError::Parse(e),
            other => ControlError::Engine(other),
        }
    }
}
