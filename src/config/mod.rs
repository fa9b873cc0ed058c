//! Configuration types for gate-trace.
//!
//! - [`BridgeConfig`]: span naming and context options for the trace bridge

mod bridge;

pub use bridge::BridgeConfig;
