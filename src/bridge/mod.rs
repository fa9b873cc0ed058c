//! The authorization trace bridge.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ Gate check                                                           │
//! │                                                                      │
//! │  before hook ──► on_check_started(actor, ability, args)              │
//! │                    │ format(args) ─► descriptor                      │
//! │                    │ sink.start_span("gate", "Authorization::..")    │
//! │                    └ if recording: pending[md5(json(descriptor))]    │
//! │                                                                      │
//! │  policy evaluation (host framework)                                  │
//! │                                                                      │
//! │  after hook ───► on_check_finished(actor, ability, result, args)     │
//! │                    │ same key ─► take span from pending              │
//! │                    │ "Check"  {ability, result, arguments}           │
//! │                    │ "Caller" {file, line}    (best effort)          │
//! │                    └ end span, return result untouched               │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both handlers are pure observers: they never return errors, never panic
//! and never change the decision that flows through them.

mod builder;
mod observer;

pub use builder::{BridgeBuilder, HasSink, NoSink};
pub use observer::GateObserver;

use std::fmt;
use std::sync::Arc;

use crate::{
    caller::{self, CallerResolver},
    config::BridgeConfig,
    correlation::{CorrelationKey, PendingSet},
    sink::{SpanHandle, TraceSink},
    types::{Argument, ArgumentDescriptor, CheckOutcome, Context, Entity},
};

/// Correlates gate check events and reports them as spans.
///
/// The bridge owns its [`PendingSet`]; share one bridge across threads through
/// an `Arc` rather than creating one per request, or finish events will not
/// find their spans.
///
/// ## Example
///
/// ```rust
/// use gate_trace::{Argument, AuthorizationTraceBridge, EntityRef};
/// use gate_trace::testing::RecordingSink;
///
/// let sink = RecordingSink::new();
/// let bridge = AuthorizationTraceBridge::new(sink.clone());
///
/// let user = EntityRef::new("User", 7);
/// let post = EntityRef::new("Post", 42);
/// let args = [Argument::entity(&post)];
///
/// bridge.on_check_started(&user, "edit-post", &args);
/// assert_eq!(bridge.pending_len(), 1);
///
/// let allowed = bridge.on_check_finished(&user, "edit-post", true, &args);
/// assert!(allowed);
/// assert_eq!(bridge.pending_len(), 0);
/// assert_eq!(sink.ended_spans().len(), 1);
/// ```
pub struct AuthorizationTraceBridge {
    sink: Arc<dyn TraceSink>,
    caller: Arc<dyn CallerResolver>,
    config: BridgeConfig,
    pending: PendingSet<Box<dyn SpanHandle>>,
}

impl AuthorizationTraceBridge {
    /// Creates a bridge reporting to `sink` with the default configuration
    /// and call-site resolver.
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        Self::from_parts(Arc::new(sink), caller::default_resolver(), BridgeConfig::default())
    }

    /// Returns a builder for a customised bridge.
    pub fn builder() -> BridgeBuilder<NoSink> {
        BridgeBuilder::new()
    }

    pub(crate) fn from_parts(
        sink: Arc<dyn TraceSink>,
        caller: Arc<dyn CallerResolver>,
        config: BridgeConfig,
    ) -> Self {
        Self { sink, caller, config, pending: PendingSet::new() }
    }

    /// Handles the check-started event.
    ///
    /// Opens a span on the sink and, if the sink is recording, parks it in the
    /// pending set under the arguments' correlation key. The actor is not
    /// part of the key.
    pub fn on_check_started(&self, _actor: &dyn Entity, ability: &str, arguments: &[Argument<'_>]) {
        let descriptor = ArgumentDescriptor::format(arguments);
        let span = self.sink.start_span(&self.config.category, &self.config.label_for(ability));

        if !self.sink.is_recording() {
            return;
        }

        let Some(key) = derive_key(&descriptor) else {
            return;
        };

        tracing::trace!(ability, key = %key, "gate check started");

        if self.pending.insert(key, span).is_some() {
            tracing::trace!(ability, "pending gate span replaced by a check with identical arguments");
        }
    }

    /// Handles the check-finished event and returns `result` unchanged.
    ///
    /// When a pending span matches the arguments it receives the check
    /// context (and the call-site, when one can be resolved) and is ended.
    /// Without a match this does nothing.
    pub fn on_check_finished(
        &self,
        _actor: &dyn Entity,
        ability: &str,
        result: bool,
        arguments: &[Argument<'_>],
    ) -> bool {
        let descriptor = ArgumentDescriptor::format(arguments);

        let Some(key) = derive_key(&descriptor) else {
            return result;
        };
        let Some(mut span) = self.pending.take(&key) else {
            return result;
        };

        let outcome = CheckOutcome::from(result);
        let check = Context::new()
            .with("ability", ability)
            .with("result", outcome.as_str())
            .with("arguments", descriptor);
        span.add_context(&self.config.check_context, check);

        if self.config.capture_caller
            && let Some(site) = self.caller.resolve()
        {
            span.add_context(&self.config.caller_context, site.to_context());
        }

        span.end();
        tracing::trace!(ability, key = %key, result = %outcome, "gate check finished");

        result
    }

    /// Returns the set of started-but-not-finished checks.
    pub fn pending(&self) -> &PendingSet<Box<dyn SpanHandle>> {
        &self.pending
    }

    /// Returns the number of started-but-not-finished checks.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the bridge configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

impl fmt::Debug for AuthorizationTraceBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationTraceBridge")
            .field("config", &self.config)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

fn derive_key(descriptor: &ArgumentDescriptor) -> Option<CorrelationKey> {
    match CorrelationKey::derive(descriptor) {
        Ok(key) => Some(key),
        Err(err) => {
            tracing::debug!(error = %err, "gate check arguments could not be encoded; span skipped");
            None
        },
    }
}
