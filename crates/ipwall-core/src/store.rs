//! Ordered collection of active blocklist ranges

use crate::error::StoreError;
use crate::range::AddressRange;

/// Ordered collection of active ranges, newest entry first.
///
/// Entries are not deduplicated or merged: adding the same range twice
/// yields two entries and overlapping ranges are harmless, since matching
/// is a disjunction over all entries. The store is owned by the engine and
/// only reached through its lock.
#[derive(Debug, Default)]
pub struct RangeStore {
    ranges: Vec<AddressRange>,
}

impl RangeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Add a range at the front of the store.
    ///
    /// Allocation failure leaves the store unchanged.
    pub fn add(&mut self, range: AddressRange) -> Result<(), StoreError> {
        // Reserve first; the insert itself must not allocate.
        self.ranges
            .try_reserve(1)
            .map_err(|_| StoreError::OutOfMemory)?;
        self.ranges.insert(0, range);
        Ok(())
    }

    /// Remove the first entry exactly equal to `range`.
    ///
    /// Returns the number of entries removed (0 or 1). Removing a range
    /// that was never added is a no-op, not an error.
    pub fn remove(&mut self, range: AddressRange) -> usize {
        match self.ranges.iter().position(|r| *r == range) {
            Some(idx) => {
                self.ranges.remove(idx);
                1
            }
            None => 0,
        }
    }

    /// Whether any stored range contains `addr`.
    #[inline]
    pub fn contains(&self, addr: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(addr))
    }

    /// Point-in-time copy of the stored ranges, newest first.
    pub fn snapshot(&self) -> Vec<AddressRange> {
        self.ranges.clone()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the store holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
