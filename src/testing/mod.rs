//! Testing utilities for code that emits gate checks.
//!
//! This module provides tools for testing applications that wire the bridge:
//!
//! - [`RecordingSink`]: A sink that keeps every span for assertions
//! - [`FixedCaller`]: A call-site resolver with a canned answer
//! - [`TestGate`]: A minimal in-memory gate that fires observer hooks
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gate_trace::{AuthorizationTraceBridge, EntityRef};
//! use gate_trace::testing::{FixedCaller, RecordingSink, TestGate};
//!
//! let sink = RecordingSink::new();
//! let bridge = AuthorizationTraceBridge::builder()
//!     .sink(sink.clone())
//!     .caller_resolver(FixedCaller::none())
//!     .build()
//!     .unwrap();
//!
//! let gate = TestGate::new()
//!     .define("view-reports", |_actor, _args| true)
//!     .observe(Arc::new(bridge));
//!
//! assert!(gate.allows(&EntityRef::new("User", 1), "view-reports", &[]));
//! assert_eq!(sink.ended_spans().len(), 1);
//! ```
//!
//! ## RecordingSink vs TracingSink
//!
//! | Feature | RecordingSink | TracingSink |
//! |---------|---------------|-------------|
//! | Span inspection | ✓ | ✗ |
//! | Recording toggle | ✓ | ✓ |
//! | Subscriber output | ✗ | ✓ |
//! | Best for | Unit tests | Applications |

mod fixed_caller;
mod recording_sink;
mod test_gate;

pub use fixed_caller::FixedCaller;
pub use recording_sink::{RecordingSink, RecordingSpan, SpanRecord};
pub use test_gate::TestGate;
