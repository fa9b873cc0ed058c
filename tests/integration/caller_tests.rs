//! Call-site resolution from the live stack.

use std::sync::Arc;

use gate_trace::{
    Argument, AuthorizationTraceBridge, Value,
    caller::{BacktraceCaller, CallerResolver},
    testing::{RecordingSink, TestGate},
};

use crate::common::{Post, User};

fn gate_with(resolver: BacktraceCaller) -> (TestGate, RecordingSink) {
    let sink = RecordingSink::new();
    let bridge = AuthorizationTraceBridge::builder()
        .sink(sink.clone())
        .caller_resolver(resolver)
        .build()
        .unwrap();
    let gate = TestGate::new().define("edit-post", |_, _| true).observe(Arc::new(bridge));
    (gate, sink)
}

#[test]
fn test_caller_points_at_the_checking_code() {
    let (gate, sink) = gate_with(BacktraceCaller::new());
    let user = User::new(7, "alice");
    let post = Post::new(42);

    gate.check(&user, "edit-post", &[Argument::entity(&post)]);

    let span = &sink.ended_spans()[0];
    assert!(span.context("Check").is_some());

    // Symbols are only guaranteed with debug info; there the first frame
    // outside the crate is this test.
    let caller = span.context("Caller");
    #[cfg(debug_assertions)]
    assert!(caller.is_some(), "no call-site resolved");

    if let Some(caller) = caller {
        let file = caller.get("file").and_then(Value::as_str).unwrap();
        assert!(file.ends_with("caller_tests.rs"), "unexpected caller file {file}");
        assert!(caller.get("line").and_then(Value::as_i64).unwrap() > 0);
    }
}

#[test]
fn test_skipped_module_is_never_the_caller() {
    let (gate, sink) = gate_with(BacktraceCaller::new().skip_module("integration"));
    let user = User::new(7, "alice");

    gate.check(&user, "edit-post", &[]);

    let span = &sink.ended_spans()[0];
    if let Some(file) = span.context("Caller").and_then(|c| c.get("file")).and_then(Value::as_str) {
        assert!(!file.ends_with("caller_tests.rs"));
    }

    // Without the extra prefix the same stack resolves to this file.
    #[cfg(debug_assertions)]
    assert!(
        BacktraceCaller::new()
            .resolve()
            .is_some_and(|site| site.file().ends_with("caller_tests.rs"))
    );
}

#[test]
fn test_direct_resolve_from_test_code() {
    let site = BacktraceCaller::new().resolve();
    #[cfg(debug_assertions)]
    assert!(site.is_some(), "no call-site resolved");

    if let Some(site) = site {
        assert!(site.file().ends_with("caller_tests.rs"), "unexpected caller file {site}");
        assert!(site.line() > 0);
    }
}
