//! Integration tests for gate-trace.
//!
//! These tests drive the bridge the way an authorization subsystem does:
//! through the public event handlers, through [`GateObserver`] hooks fired
//! by `TestGate`, and from several threads at once.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # Run a specific test
//! cargo test --test integration test_collision_reproduced -- --nocapture
//! ```
//!
//! [`GateObserver`]: gate_trace::GateObserver

#![allow(clippy::unwrap_used)]

mod bridge_tests;
mod caller_tests;
mod common;
mod concurrency_tests;
mod derive_tests;
mod gate_tests;
mod tracing_tests;
