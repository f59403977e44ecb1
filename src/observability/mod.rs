//! Logging setup for the command-line front-end.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to a test that wants to see the events).

pub mod telemetry;
