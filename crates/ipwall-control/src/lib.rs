//! # ipwall Control Plane
//!
//! Validates and dispatches operator commands against a [`FilterEngine`].
//!
//! The transport that carries commands into the process (a device file and
//! ioctl surface in the classic deployment, a socket elsewhere) is an
//! external collaborator: it decodes bytes into [`Command`] values, calls
//! [`ControlPlane::dispatch`], and encodes the [`Response`]. Both types are
//! serde-serializable for exactly that purpose.
//!
//! Mutations are serialized against the packet path by the engine's own
//! lock; this crate adds command validation, response formatting, and the
//! fixed response budget of the wire format.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod command;
mod error;

pub use command::{Command, Response};
pub use error::ControlError;

use std::sync::Arc;

use tracing::warn;

use ipwall_core::FilterEngine;

/// Maximum length of a formatted LIST response, in bytes.
///
/// The control wire format returns listings in a 512-byte NUL-terminated
/// buffer, leaving 511 bytes of payload. A listing that does not fit is
/// reported as [`ControlError::ResponseTooLarge`], never truncated.
pub const MAX_RESPONSE_LEN: usize = 511;

/// Command dispatcher for one filtering engine.
#[derive(Debug, Clone)]
pub struct ControlPlane {
    engine: Arc<FilterEngine>,
}

impl ControlPlane {
    /// Create a control plane driving `engine`.
    pub fn new(engine: Arc<FilterEngine>) -> Self {
        Self { engine }
    }

    /// Shared handle to the underlying engine.
    pub fn engine(&self) -> &Arc<FilterEngine> {
        &self.engine
    }

    /// Execute one operator command.
    ///
    /// Synchronous, single attempt, no retries. Every failure is recovered
    /// at this boundary and leaves the engine running with its state
    /// unchanged.
    pub fn dispatch(&self, command: Command) -> Result<Response, ControlError> {
        match command {
            Command::AddRange(text) => {
                let range = self.engine.add_range(&text)?;
                Ok(Response::Added(range))
            }
            Command::RemoveRange(text) => {
                let count = self.engine.remove_range(&text)?;
                Ok(Response::Removed { count })
            }
            Command::Toggle => Ok(Response::Toggled {
                enabled: self.engine.toggle(),
            }),
            Command::List => self.format_listing().map(Response::Ranges),
        }
    }

    /// Format the blocklist snapshot, one `A.B.C.D-E.F.G.H` line per range
    /// in snapshot order (newest first).
    fn format_listing(&self) -> Result<String, ControlError> {
        let mut out = String::new();
        for range in self.engine.list_ranges() {
            out.push_str(&range.to_string());
            out.push('\n');
        }

        if out.len() > MAX_RESPONSE_LEN {
            warn!(
                needed = out.len(),
                limit = MAX_RESPONSE_LEN,
                "listing exceeds response budget"
            );
            return Err(ControlError::ResponseTooLarge {
                needed: out.len(),
                limit: MAX_RESPONSE_LEN,
            });
        }
        Ok(out)
    }
}
