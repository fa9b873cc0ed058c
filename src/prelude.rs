//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use gate_trace::prelude::*;
//! ```
//!
//! This provides access to:
//! - The bridge, its builder and the observer seam
//! - Error types
//! - Argument and entity types

pub use crate::{
    bridge::{AuthorizationTraceBridge, BridgeBuilder, GateObserver},
    caller::{CallSite, CallerResolver},
    config::BridgeConfig,
    error::{AccessDenied, Error, ErrorKind, Result},
    sink::{SpanHandle, TraceSink},
    types::{Argument, ArgumentDescriptor, CheckOutcome, Context, Entity, EntityRef, Value},
};

#[cfg(feature = "derive")]
pub use gate_trace_derive::Entity;
