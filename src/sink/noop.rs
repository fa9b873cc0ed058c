//! A sink that records nothing.

use super::{SpanHandle, TraceSink};
use crate::types::Context;

/// A sink that never records.
///
/// `is_recording()` is always `false`, so a bridge wired to it keeps its
/// pending set empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn start_span(&self, _category: &str, _label: &str) -> Box<dyn SpanHandle> {
        Box::new(NoopSpan::default())
    }

    fn is_recording(&self) -> bool {
        false
    }
}

/// A span handle that discards every context record.
#[derive(Debug, Default)]
pub struct NoopSpan {
    ended: bool,
}

impl SpanHandle for NoopSpan {
    fn add_context(&mut self, _name: &str, _data: Context) -> &mut dyn SpanHandle {
        self
    }

    fn end(&mut self) {
        self.ended = true;
    }

    fn is_ended(&self) -> bool {
        self.ended
    }
}
