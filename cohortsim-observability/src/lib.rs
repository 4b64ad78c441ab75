//! # cohortsim-observability
//!
//! Structured logging for the simulation engine via `tracing`.
//! The library crates only emit events; installing a subscriber is left to
//! the embedding application.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
