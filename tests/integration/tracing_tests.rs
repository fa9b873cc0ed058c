//! The bridge reporting through `tracing`.

use std::{io, sync::Arc};

use gate_trace::{Argument, AuthorizationTraceBridge, BridgeConfig, tracing_support::TracingSink};
use parking_lot::Mutex;

use crate::common::{Post, User};

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_bridge_emits_tracing_span() {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let bridge = AuthorizationTraceBridge::builder()
            .sink(TracingSink::new())
            .config(BridgeConfig::without_caller())
            .build()
            .unwrap();
        let user = User::new(7, "alice");
        let post = Post::new(42);
        let args = [Argument::entity(&post)];

        bridge.on_check_started(&user, "edit-post", &args);
        assert_eq!(bridge.pending_len(), 1);
        assert!(bridge.on_check_finished(&user, "edit-post", true, &args));
        assert_eq!(bridge.pending_len(), 0);
    });

    let output = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    assert!(output.contains("Authorization::edit-post"));
    assert!(output.contains(r#"{"ability":"edit-post","arguments":["Post:42"],"result":"allowed"}"#));
}

#[test]
fn test_stopped_sink_leaves_nothing_pending() {
    let sink = TracingSink::new();
    sink.stop_recording();
    let bridge = AuthorizationTraceBridge::new(sink);
    let user = User::new(7, "alice");

    bridge.on_check_started(&user, "edit-post", &[]);
    assert_eq!(bridge.pending_len(), 0);
}
