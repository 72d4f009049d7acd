//! Inclusive IPv4 address ranges and their wire text form
//!
//! The control wire format carries a range as ASCII `"A.B.C.D-E.F.G.H"`:
//! dotted quads on each side of a single `-`, no surrounding whitespace,
//! at most [`MAX_RANGE_TEXT_LEN`] bytes. Parsing is the [`FromStr`] impl;
//! [`std::fmt::Display`] renders the same form back.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Maximum accepted length of range text, in bytes.
///
/// The wire format carries range text in a 32-byte NUL-terminated buffer,
/// leaving 31 bytes of payload. The limit is enforced explicitly rather
/// than left to transport truncation.
pub const MAX_RANGE_TEXT_LEN: usize = 31;

/// An inclusive range of IPv4 addresses.
///
/// Bounds are host-order numeric addresses. Two ranges are equal only when
/// both bounds match exactly; overlapping or duplicate ranges stay distinct
/// entries everywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRange {
    start: u32,
    end: u32,
}

impl AddressRange {
    /// Create a range from numeric bounds.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from address bounds.
    pub fn from_addrs(start: Ipv4Addr, end: Ipv4Addr) -> Self {
        Self::new(u32::from(start), u32::from(end))
    }

    /// Lower bound (inclusive).
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Upper bound (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Whether `addr` falls inside this range.
    ///
    /// A reversed range (`start > end`) contains no address at all: the
    /// parser accepts such ranges and matching is vacuously false rather
    /// than an error.
    #[inline]
    pub fn contains(&self, addr: u32) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            Ipv4Addr::from(self.start),
            Ipv4Addr::from(self.end)
        )
    }
}

impl FromStr for AddressRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn malformed(input: &str, reason: &'static str) -> ParseError {
            ParseError::Malformed {
                input: input.to_string(),
                reason,
            }
        }

        if s.len() > MAX_RANGE_TEXT_LEN {
            return Err(malformed(s, "input exceeds the 31-byte wire budget"));
        }

        let Some((start, end)) = s.split_once('-') else {
            return Err(malformed(s, "missing '-' separator"));
        };

        let start: Ipv4Addr = start
            .parse()
            .map_err(|_| malformed(s, "invalid start address"))?;
        let end: Ipv4Addr = end
            .parse()
            .map_err(|_| malformed(s, "invalid end address"))?;

        Ok(Self::from_addrs(start, end))
    }
}
