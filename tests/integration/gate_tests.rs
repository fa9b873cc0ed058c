//! The bridge observing a gate through its hooks.

use std::sync::Arc;

use gate_trace::{
    AccessDenied, Argument, Entity, Error, ErrorKind, GateObserver, Value, testing::TestGate,
};

use crate::common::{Post, User, recording_bridge, str_field};

fn posts_gate(observer: Arc<dyn GateObserver>) -> TestGate {
    TestGate::new()
        .define("edit-post", |actor, args| {
            actor.entity_ref() == "User:7" && args.first().map(Argument::format) == Some(Value::from("Post:42"))
        })
        .define("view-dashboard", |_, _| true)
        .observe(observer)
}

#[test]
fn test_allowed_check_is_traced() {
    let (bridge, sink) = recording_bridge();
    let gate = posts_gate(bridge.clone());
    let alice = User::new(7, "alice");
    let post = Post::new(42);

    assert!(gate.allows(&alice, "edit-post", &[Argument::entity(&post)]));

    let spans = sink.ended_spans();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].label(), "Authorization::edit-post");
    assert_eq!(
        str_field(spans[0].context("Check").and_then(|c| c.get("result"))),
        Some("allowed")
    );
    assert_eq!(bridge.pending_len(), 0);
}

#[test]
fn test_denied_check_is_traced_and_reported() {
    let (bridge, sink) = recording_bridge();
    let gate = posts_gate(bridge.clone());
    let bob = User::new(8, "bob");
    let post = Post::new(42);

    let denied: AccessDenied =
        gate.authorize(&bob, "edit-post", &[Argument::entity(&post)]).unwrap_err();
    assert_eq!(denied.actor(), "User:8");
    assert_eq!(denied.ability(), "edit-post");
    assert_eq!(denied.arguments(), ["Post:42"]);
    assert!(denied.reason().is_none());

    let err: Error = denied.into();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let check = sink.ended_spans()[0].context("Check").cloned().unwrap();
    assert_eq!(str_field(check.get("result")), Some("denied"));
}

#[test]
fn test_undefined_ability_is_denied_and_traced() {
    let (bridge, sink) = recording_bridge();
    let gate = posts_gate(bridge.clone());
    let alice = User::new(7, "alice");

    assert!(gate.denies(&alice, "delete-everything", &[]));
    assert_eq!(sink.ended_spans()[0].label(), "Authorization::delete-everything");
}

#[test]
fn test_sequential_checks_each_get_a_span() {
    let (bridge, sink) = recording_bridge();
    let gate = posts_gate(bridge.clone());
    let alice = User::new(7, "alice");

    for id in 40..45 {
        let post = Post::new(id);
        gate.check(&alice, "edit-post", &[Argument::entity(&post)]);
    }
    gate.check(&alice, "view-dashboard", &[]);

    assert_eq!(sink.ended_spans().len(), 6);
    assert_eq!(bridge.pending_len(), 0);
}

#[test]
fn test_two_bridges_observe_independently() {
    let (first, first_sink) = recording_bridge();
    let (second, second_sink) = recording_bridge();
    let gate = TestGate::new().define("view", |_, _| true).observe(first.clone()).observe(second);
    let alice = User::new(7, "alice");

    assert!(gate.allows(&alice, "view", &[Argument::from(1)]));

    assert_eq!(first_sink.ended_spans().len(), 1);
    assert_eq!(second_sink.ended_spans().len(), 1);
    assert_eq!(first.pending_len(), 0);
}
