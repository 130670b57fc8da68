//! Telemetry for the heuristics filter.
//!
//! Structured logging only. The crate itself performs no I/O beyond the
//! `tracing` events its components emit; hosts opt in by installing a
//! subscriber, either their own or via [`init_logging`].

mod logging;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
