//! Packet filtering engine
//!
//! Hot-path verdict evaluation over a shared blocklist, plus the mutation
//! entry points used by the control plane. The shared state sits behind a
//! fair reader/writer lock: packet evaluation and listing take the read
//! side, mutations take a short exclusive section, and nothing inside a
//! critical section allocates or performs I/O.

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::error::{EngineError, ParseError};
use crate::range::AddressRange;
use crate::store::RangeStore;

/// Disposition of a single inspected packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the packet through
    Accept,
    /// Discard the packet
    Drop,
}

/// Point-in-time copy of the engine counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Packets evaluated
    pub evaluated: u64,
    /// Packets dropped
    pub dropped: u64,
}

#[derive(Debug)]
struct EngineState {
    store: RangeStore,
    enabled: bool,
}

/// Filtering engine: a blocklist plus an enforcement flag.
///
/// One instance is constructed at startup and shared by reference between
/// the packet path and the control plane; tearing it down releases every
/// stored range. The lock is fair, so a continuous stream of packet-path
/// readers cannot starve a control-plane writer.
#[derive(Debug)]
pub struct FilterEngine {
    state: RwLock<EngineState>,
    evaluated: AtomicU64,
    dropped: AtomicU64,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    /// Create an engine with an empty blocklist and enforcement enabled.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState {
                store: RangeStore::new(),
                enabled: true,
            }),
            evaluated: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    /// Create an engine seeded from configuration.
    ///
    /// Ranges are added in config order with the usual prepend semantics,
    /// so the last configured range ends up first in the store. Any range
    /// failing to parse rejects the whole config with nothing installed.
    pub fn from_config(config: &FilterConfig) -> Result<Self, EngineError> {
        // Parse everything before touching the store, as the runtime
        // mutation paths do.
        let ranges = config
            .ranges
            .iter()
            .map(|text| text.parse::<AddressRange>())
            .collect::<Result<Vec<_>, _>>()?;

        let engine = Self::new();
        {
            let mut state = engine.state.write();
            state.enabled = config.enabled;
            for range in ranges {
                state.store.add(range)?;
            }
        }
        Ok(engine)
    }

    /// Decide the fate of a packet with the given source address.
    ///
    /// Total: never fails, performs no allocation on the decision path, and
    /// holds the shared lock only for the containment test. When blocking
    /// is disabled every packet is accepted. Drop diagnostics are emitted
    /// after the lock is released and never affect the verdict.
    #[inline]
    pub fn evaluate(&self, src_addr: u32) -> Verdict {
        let verdict = {
            let state = self.state.read();
            if state.enabled && state.store.contains(src_addr) {
                Verdict::Drop
            } else {
                Verdict::Accept
            }
        };

        self.evaluated.fetch_add(1, Ordering::Relaxed);
        if verdict == Verdict::Drop {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            debug!(src = %Ipv4Addr::from(src_addr), "dropping packet from blocked source");
        }
        verdict
    }

    /// Flip enforcement and return the new state.
    ///
    /// This is a flip, not a set: two toggles restore the original state.
    pub fn toggle(&self) -> bool {
        let enabled = {
            let mut state = self.state.write();
            state.enabled = !state.enabled;
            state.enabled
        };
        info!(enabled, "blocking toggled");
        enabled
    }

    /// Whether enforcement is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Parse `text` and add the resulting range to the blocklist.
    ///
    /// The parse happens outside the lock; a rejected input leaves the
    /// store untouched.
    pub fn add_range(&self, text: &str) -> Result<AddressRange, EngineError> {
        let range: AddressRange = text.parse()?;
        self.state.write().store.add(range)?;
        info!(%range, "added range");
        Ok(range)
    }

    /// Parse `text` and remove the first exactly-matching entry.
    ///
    /// Returns the number of entries removed; zero means the range was not
    /// present, which is not an error.
    pub fn remove_range(&self, text: &str) -> Result<usize, ParseError> {
        let range: AddressRange = text.parse()?;
        let removed = self.state.write().store.remove(range);
        if removed > 0 {
            info!(%range, "removed range");
        }
        Ok(removed)
    }

    /// Consistent point-in-time copy of the blocklist, newest first.
    pub fn list_ranges(&self) -> Vec<AddressRange> {
        self.state.read().store.snapshot()
    }

    /// Number of blocklist entries.
    pub fn range_count(&self) -> usize {
        self.state.read().store.len()
    }

    /// Snapshot of the engine counters.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            evaluated: self.evaluated.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(a: u8, b: u8, c: u8, d: u8) -> u32 {
        u32::from(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn new_engine_starts_enabled_and_empty() {
        let engine = FilterEngine::new();
        assert!(engine.is_enabled());
        assert_eq!(engine.range_count(), 0);
        assert_eq!(engine.evaluate(addr(1, 2, 3, 4)), Verdict::Accept);
    }

    #[test]
    fn blocked_source_is_dropped() {
        let engine = FilterEngine::new();
        engine.add_range("5.0.0.0-5.0.0.255").unwrap();
        assert_eq!(engine.evaluate(addr(5, 0, 0, 10)), Verdict::Drop);
        assert_eq!(engine.evaluate(addr(5, 0, 1, 1)), Verdict::Accept);
    }

    #[test]
    fn toggle_reports_new_state() {
        let engine = FilterEngine::new();
        assert!(!engine.toggle());
        assert!(engine.toggle());
    }

    #[test]
    fn rejected_input_leaves_store_untouched() {
        let engine = FilterEngine::new();
        engine.add_range("5.0.0.0-5.0.0.255").unwrap();
        assert!(engine.add_range("5.0.0.0-bad").is_err());
        assert_eq!(engine.range_count(), 1);
    }

    #[test]
    fn from_config_parses_everything_before_installing() {
        let config = FilterConfig {
            enabled: true,
            ranges: vec!["1.0.0.0-1.0.0.255".into(), "bad".into()],
        };
        assert!(FilterEngine::from_config(&config).is_err());
    }

    #[test]
    fn stats_count_evaluations_and_drops() {
        let engine = FilterEngine::new();
        engine.add_range("9.0.0.0-9.0.0.9").unwrap();
        engine.evaluate(addr(9, 0, 0, 1));
        engine.evaluate(addr(8, 0, 0, 1));
        let stats = engine.stats();
        assert_eq!(stats.evaluated, 2);
        assert_eq!(stats.dropped, 1);
    }
}
