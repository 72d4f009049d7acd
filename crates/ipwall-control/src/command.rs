//! Operator command and response model

use serde::{Deserialize, Serialize};

use ipwall_core::AddressRange;

/// One operator request.
///
/// Range text obeys the wire form checked by the parser: ASCII
/// `"A.B.C.D-E.F.G.H"`, at most [`MAX_RANGE_TEXT_LEN`] bytes.
///
/// [`MAX_RANGE_TEXT_LEN`]: ipwall_core::MAX_RANGE_TEXT_LEN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Add a blocklist range
    AddRange(String),
    /// Remove the first entry exactly matching the given range text
    RemoveRange(String),
    /// Flip enforcement on or off
    Toggle,
    /// Fetch the formatted blocklist
    List,
}

/// Successful outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Range added to the blocklist
    Added(AddressRange),
    /// Removal attempt finished
    Removed {
        /// Number of entries removed; zero when the range was not present,
        /// which is informational, not a failure
        count: usize,
    },
    /// Enforcement flipped
    Toggled {
        /// State after the flip
        enabled: bool,
    },
    /// Formatted listing, one range per line in snapshot order
    Ranges(String),
}
