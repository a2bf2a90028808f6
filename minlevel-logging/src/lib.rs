//! Shared logging layer for the minimum-level probes
//!
//! This crate resolves per-category log levels from configuration,
//! builds the `tracing` dispatcher that enforces them, and records
//! which events actually made it past the filter so probes can assert
//! on what was emitted.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod witness;

pub use config::{CategoryConfig, LoggingConfig};
pub use dispatch::LoggingDispatch;
pub use error::{ConfigError, WitnessError};
pub use filter::CategoryFilter;
pub use witness::LoggingWitness;

// Used by the `logged!` macro so callers don't need the path spelled out.
#[doc(hidden)]
pub use tracing as __tracing;
