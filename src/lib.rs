//! # gate-trace
//!
//! Reports authorization gate checks as spans on an APM sink.
//!
//! An authorization subsystem fires a "check started" event before it
//! evaluates a gate check and a "check finished" event with the outcome
//! afterwards. The [`AuthorizationTraceBridge`] opens a span on the first
//! event, parks it under a key derived from the check arguments, and on the
//! second event attaches the outcome and the calling code location before
//! closing it.
//!
//! ## Quick Start
//!
//! ```rust
//! use gate_trace::prelude::*;
//! use gate_trace::testing::RecordingSink;
//!
//! let sink = RecordingSink::new();
//! let bridge = AuthorizationTraceBridge::new(sink.clone());
//!
//! let user = EntityRef::new("User", 7);
//! let post = EntityRef::new("Post", 42);
//! let args = [Argument::entity(&post)];
//!
//! bridge.on_check_started(&user, "edit-post", &args);
//! let allowed = bridge.on_check_finished(&user, "edit-post", true, &args);
//!
//! assert!(allowed);
//! let span = &sink.ended_spans()[0];
//! assert_eq!(span.label(), "Authorization::edit-post");
//! ```
//!
//! ## Key Concepts
//!
//! - **Correlation**: start and finish are matched by the md5 of the JSON
//!   encoding of the formatted arguments. The actor is not part of the key
//! - **Observers never interfere**: the finish handler returns the result it
//!   was given and neither handler fails or panics
//! - **Denial ≠ Error**: [`testing::TestGate::check`] returns `false` for a
//!   denial; only `authorize()` turns it into [`AccessDenied`]
//!
//! ## Features
//!
//! - `backtrace` (default): resolve the check call-site from the stack
//! - `derive` (default): `#[derive(Entity)]`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod bridge;
pub mod config;
pub mod error;
pub mod types;

// Correlation and span plumbing
pub mod caller;
pub mod correlation;
pub mod sink;

// Testing utilities
pub mod testing;

// Tracing support
pub mod tracing_support;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use bridge::{AuthorizationTraceBridge, BridgeBuilder, GateObserver};
pub use config::BridgeConfig;
pub use error::{AccessDenied, Error, ErrorKind, Result};
pub use sink::{SpanHandle, TraceSink};
pub use types::{Argument, ArgumentDescriptor, CheckOutcome, Context, Entity, EntityRef, Value};

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use gate_trace_derive::Entity;
