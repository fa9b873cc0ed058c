//! Tracing integration for observability.
//!
//! [`TracingSink`] forwards gate spans to the `tracing` ecosystem, so any
//! subscriber (fmt, OpenTelemetry, Jaeger, ...) sees authorization checks.
//!
//! Each gate span becomes a `gate_check` span under the `gate_trace` target
//! with `category` and `label` fields. Every context record is emitted as an
//! event inside that span with the record name and its JSON body.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tracing_subscriber::prelude::*;
//! use gate_trace::{AuthorizationTraceBridge, tracing_support::TracingSink};
//!
//! // Set up tracing subscriber
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//!
//! let bridge = AuthorizationTraceBridge::new(TracingSink::new());
//! // Logs: gate_check{category=gate label=Authorization::edit-post}: context="Check" data={...}
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{Level, Span};

use crate::{
    sink::{SpanHandle, TraceSink},
    types::Context,
};

/// Target used for every span and event emitted by [`TracingSink`].
pub const TARGET: &str = "gate_trace";

/// A sink that reports gate spans through `tracing`.
///
/// The sink is recording while its switch is on and a subscriber is
/// interested in `INFO` events for the [`TARGET`] target. Clones share the
/// switch.
#[derive(Debug, Clone)]
pub struct TracingSink {
    recording: Arc<AtomicBool>,
}

impl TracingSink {
    /// Creates a sink with recording switched on.
    pub fn new() -> Self {
        Self { recording: Arc::new(AtomicBool::new(true)) }
    }

    /// Switches recording on.
    pub fn start_recording(&self) {
        self.recording.store(true, Ordering::SeqCst);
    }

    /// Switches recording off. Spans opened afterwards are discarded.
    pub fn stop_recording(&self) {
        self.recording.store(false, Ordering::SeqCst);
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for TracingSink {
    fn start_span(&self, category: &str, label: &str) -> Box<dyn SpanHandle> {
        let span = if self.is_recording() {
            tracing::info_span!(target: TARGET, "gate_check", category = %category, label = %label)
        } else {
            Span::none()
        };
        Box::new(TracingSpan { span, ended: false })
    }

    fn is_recording(&self) -> bool {
        self.recording.load(Ordering::SeqCst) && tracing::enabled!(target: TARGET, Level::INFO)
    }
}

/// Handle wrapping a `tracing` span. Ending it drops the span, which closes
/// it for the subscriber.
#[derive(Debug)]
pub struct TracingSpan {
    span: Span,
    ended: bool,
}

impl SpanHandle for TracingSpan {
    fn add_context(&mut self, name: &str, data: Context) -> &mut dyn SpanHandle {
        if self.ended || self.span.is_disabled() {
            return self;
        }

        match data.to_json() {
            Ok(json) => self.span.in_scope(|| {
                tracing::info!(target: TARGET, context = name, data = %json, "gate span context");
            }),
            Err(err) => tracing::debug!(context = name, error = %err, "gate span context dropped"),
        }
        self
    }

    fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        drop(std::mem::replace(&mut self.span, Span::none()));
    }

    fn is_ended(&self) -> bool {
        self.ended
    }
}
