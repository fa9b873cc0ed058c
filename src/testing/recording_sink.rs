//! RecordingSink for asserting on emitted spans.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::{
    sink::{SpanHandle, TraceSink},
    types::Context,
};

/// A sink that keeps every span it opens in memory.
///
/// Clones share the same storage, so a test can hand one clone to the bridge
/// and inspect spans through another.
///
/// ## Example
///
/// ```rust
/// use gate_trace::Context;
/// use gate_trace::sink::TraceSink;
/// use gate_trace::testing::RecordingSink;
///
/// let sink = RecordingSink::new();
/// let mut span = sink.start_span("gate", "Authorization::view");
/// span.add_context("Check", Context::new().with("result", "allowed"));
/// span.end();
///
/// let spans = sink.spans();
/// assert_eq!(spans[0].label(), "Authorization::view");
/// assert!(spans[0].is_ended());
/// ```
#[derive(Clone)]
pub struct RecordingSink {
    inner: Arc<Inner>,
}

struct Inner {
    spans: Mutex<Vec<SpanRecord>>,
    recording: AtomicBool,
}

impl RecordingSink {
    /// Creates a sink that is recording.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                spans: Mutex::new(Vec::new()),
                recording: AtomicBool::new(true),
            }),
        }
    }

    /// Turns recording on or off for spans opened from now on.
    pub fn set_recording(&self, recording: bool) {
        self.inner.recording.store(recording, Ordering::SeqCst);
    }

    /// Returns a snapshot of every recorded span in start order.
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.inner.spans.lock().clone()
    }

    /// Returns a snapshot of the spans that have been ended.
    pub fn ended_spans(&self) -> Vec<SpanRecord> {
        self.inner.spans.lock().iter().filter(|span| span.is_ended()).cloned().collect()
    }

    /// Returns the number of recorded spans.
    pub fn span_count(&self) -> usize {
        self.inner.spans.lock().len()
    }

    /// Forgets every recorded span.
    pub fn clear(&self) {
        self.inner.spans.lock().clear();
    }

    fn update(&self, id: Uuid, f: impl FnOnce(&mut SpanRecord)) {
        let mut spans = self.inner.spans.lock();
        if let Some(record) = spans.iter_mut().find(|span| span.id == id) {
            f(record);
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSink")
            .field("spans", &self.span_count())
            .field("recording", &self.is_recording())
            .finish()
    }
}

impl TraceSink for RecordingSink {
    fn start_span(&self, category: &str, label: &str) -> Box<dyn SpanHandle> {
        if !self.is_recording() {
            return Box::new(RecordingSpan { sink: None, id: Uuid::nil(), ended: false });
        }

        let record = SpanRecord {
            id: Uuid::new_v4(),
            category: category.to_owned(),
            label: label.to_owned(),
            contexts: Vec::new(),
            started_at: Instant::now(),
            duration: None,
        };
        let id = record.id;
        self.inner.spans.lock().push(record);

        Box::new(RecordingSpan { sink: Some(self.clone()), id, ended: false })
    }

    fn is_recording(&self) -> bool {
        self.inner.recording.load(Ordering::SeqCst)
    }
}

/// Handle for a span opened on a [`RecordingSink`].
///
/// Spans opened while the sink was not recording are detached and write
/// nothing back.
pub struct RecordingSpan {
    sink: Option<RecordingSink>,
    id: Uuid,
    ended: bool,
}

impl SpanHandle for RecordingSpan {
    fn add_context(&mut self, name: &str, data: Context) -> &mut dyn SpanHandle {
        if let Some(sink) = &self.sink {
            sink.update(self.id, |record| record.contexts.push((name.to_owned(), data)));
        }
        self
    }

    fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        if let Some(sink) = &self.sink {
            sink.update(self.id, |record| {
                record.duration = Some(record.started_at.elapsed());
            });
        }
    }

    fn is_ended(&self) -> bool {
        self.ended
    }
}

/// A span as seen by a [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct SpanRecord {
    id: Uuid,
    category: String,
    label: String,
    contexts: Vec<(String, Context)>,
    started_at: Instant,
    duration: Option<Duration>,
}

impl SpanRecord {
    /// Returns the unique span id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the span category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the span label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns every context record in the order it was attached.
    pub fn contexts(&self) -> &[(String, Context)] {
        &self.contexts
    }

    /// Returns the first context record attached under `name`.
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|(n, _)| n == name).map(|(_, ctx)| ctx)
    }

    /// Returns the names of the attached context records, in order.
    pub fn context_names(&self) -> Vec<&str> {
        self.contexts.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns `true` once the span has been ended.
    pub fn is_ended(&self) -> bool {
        self.duration.is_some()
    }

    /// Returns how long the span was open, once ended.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
