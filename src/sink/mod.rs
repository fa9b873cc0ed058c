//! The tracing-sink contract.
//!
//! A sink is the APM client the bridge reports to. The bridge only needs to
//! open a span, ask whether the sink is currently recording, attach named
//! context records and end the span; storage, sampling and transport are the
//! sink's business.
//!
//! ```text
//! on_check_started ──► TraceSink::start_span("gate", "Authorization::edit-post")
//!                         │
//!                         ▼ Box<dyn SpanHandle>  (kept in the PendingSet)
//! on_check_finished ─► add_context("Check", ..) ─► add_context("Caller", ..) ─► end()
//! ```
//!
//! Implementations shipped with the crate:
//!
//! | Sink | Use |
//! |------|-----|
//! | [`NoopSink`] | tracing disabled |
//! | [`TracingSink`](crate::tracing_support::TracingSink) | forward to the `tracing` ecosystem |
//! | [`RecordingSink`](crate::testing::RecordingSink) | assertions in tests |

mod noop;

pub use noop::{NoopSink, NoopSpan};

use crate::types::Context;

/// An external tracing client that can open spans.
///
/// Object-safe, so the bridge holds it as `Arc<dyn TraceSink>`.
pub trait TraceSink: Send + Sync {
    /// Opens a span. The sink may hand back a handle that records nothing.
    fn start_span(&self, category: &str, label: &str) -> Box<dyn SpanHandle>;

    /// Returns `true` if spans opened now are actually being recorded.
    fn is_recording(&self) -> bool;
}

/// A span opened by a [`TraceSink`].
///
/// The bridge owns the handle while the check is pending. Once
/// [`end`](SpanHandle::end) is called the sink owns the span's lifecycle and
/// the handle is dropped.
pub trait SpanHandle: Send {
    /// Attaches a named context record. Returns the handle for chaining.
    fn add_context(&mut self, name: &str, data: Context) -> &mut dyn SpanHandle;

    /// Closes the span.
    fn end(&mut self);

    /// Returns `true` once [`end`](SpanHandle::end) has been called.
    fn is_ended(&self) -> bool;
}
