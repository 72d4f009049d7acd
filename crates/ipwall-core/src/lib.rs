//! # ipwall Core
//!
//! Platform-independent engine for IP-range packet filtering.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Address ranges** - Inclusive IPv4 ranges and their wire text form
//! - **Range store** - The ordered blocklist collection
//! - **Filter engine** - Per-packet verdict evaluation with a concurrent
//!   control surface
//! - **Configuration** - TOML-backed startup settings
//!
//! The packet-interception layer is an external collaborator: it hands one
//! source address per packet to [`FilterEngine::evaluate`] and enforces the
//! returned [`Verdict`].
//!
//! ## Example
//!
//! ```rust
//! use ipwall_core::{FilterEngine, Verdict};
//!
//! let engine = FilterEngine::new();
//! engine.add_range("5.0.0.0-5.0.0.255")?;
//!
//! assert_eq!(engine.evaluate(u32::from_be_bytes([5, 0, 0, 10])), Verdict::Drop);
//! assert_eq!(engine.evaluate(u32::from_be_bytes([5, 0, 1, 1])), Verdict::Accept);
//! # Ok::<(), ipwall_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod range;
pub mod store;

// Re-exports for convenience
pub use config::FilterConfig;
pub use engine::{EngineStats, FilterEngine, Verdict};
pub use error::{ConfigError, EngineError, ParseError, Result, StoreError};
pub use range::{AddressRange, MAX_RANGE_TEXT_LEN};
pub use store::RangeStore;
