//! End-to-end scenarios for the check-started / check-finished handlers.

use gate_trace::{Argument, ArgumentDescriptor, EntityRef, Value, correlation::CorrelationKey};

use crate::common::{Post, User, recording_bridge, str_field};

#[test]
fn test_edit_post_scenario() {
    let (bridge, sink) = recording_bridge();
    let user = User::new(7, "alice");
    let post = Post::new(42);
    let args = [Argument::entity(&post)];

    bridge.on_check_started(&user, "edit-post", &args);

    let spans = sink.spans();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category(), "gate");
    assert_eq!(spans[0].label(), "Authorization::edit-post");
    assert_eq!(bridge.pending_len(), 1);

    assert!(bridge.on_check_finished(&user, "edit-post", true, &args));

    let span = &sink.spans()[0];
    assert!(span.is_ended());
    assert_eq!(span.context_names(), ["Check", "Caller"]);

    let check = span.context("Check").cloned().unwrap();
    assert_eq!(str_field(check.get("ability")), Some("edit-post"));
    assert_eq!(str_field(check.get("result")), Some("allowed"));
    assert_eq!(check.get("arguments"), Some(&Value::from(vec!["Post:42"])));

    let caller = span.context("Caller").cloned().unwrap();
    assert_eq!(str_field(caller.get("file")), Some("app/http/posts_controller.rs"));
    assert_eq!(caller.get("line").and_then(Value::as_i64), Some(27));

    assert_eq!(bridge.pending_len(), 0);
}

#[test]
fn test_round_trip_restores_pending_size() {
    let (bridge, sink) = recording_bridge();
    let user = User::new(1, "alice");

    bridge.on_check_started(&user, "view-post", &[Argument::from(1)]);
    let before = bridge.pending_len();

    bridge.on_check_started(&user, "view-post", &[Argument::from(2)]);
    bridge.on_check_finished(&user, "view-post", false, &[Argument::from(2)]);

    assert_eq!(bridge.pending_len(), before);
    assert_eq!(sink.ended_spans().len(), 1);
}

#[test]
fn test_finish_returns_result_unchanged() {
    let (bridge, _sink) = recording_bridge();
    let user = User::new(1, "alice");

    for result in [true, false] {
        bridge.on_check_started(&user, "publish", &[]);
        assert_eq!(bridge.on_check_finished(&user, "publish", result, &[]), result);
    }
    // Unmatched finishes pass the result through as well.
    assert!(bridge.on_check_finished(&user, "publish", true, &[]));
    assert!(!bridge.on_check_finished(&user, "publish", false, &[]));
}

#[test]
fn test_non_matching_finish_changes_nothing() {
    let (bridge, sink) = recording_bridge();
    let user = User::new(1, "alice");
    let post = Post::new(42);
    let other = Post::new(43);

    bridge.on_check_started(&user, "edit-post", &[Argument::entity(&post)]);
    bridge.on_check_finished(&user, "edit-post", true, &[Argument::entity(&other)]);

    assert_eq!(bridge.pending_len(), 1);
    assert!(sink.ended_spans().is_empty());
}

#[test]
fn test_finish_without_start_is_ignored() {
    let (bridge, sink) = recording_bridge();
    let user = User::new(1, "alice");

    assert!(bridge.on_check_finished(&user, "edit-post", true, &[Argument::from(1)]));
    assert_eq!(bridge.pending_len(), 0);
    assert_eq!(sink.span_count(), 0);
}

#[test]
fn test_ability_is_not_part_of_the_key() {
    let (bridge, sink) = recording_bridge();
    let user = User::new(1, "alice");
    let post = Post::new(42);
    let args = [Argument::entity(&post)];

    bridge.on_check_started(&user, "edit-post", &args);
    bridge.on_check_finished(&user, "delete-post", false, &args);

    let span = &sink.spans()[0];
    assert!(span.is_ended());
    assert_eq!(span.label(), "Authorization::edit-post");
    assert_eq!(
        str_field(span.context("Check").and_then(|c| c.get("ability"))),
        Some("delete-post")
    );
}

#[test]
fn test_collision_reproduced() {
    let (bridge, sink) = recording_bridge();
    let alice = User::new(1, "alice");
    let bob = User::new(2, "bob");
    let post = Post::new(42);
    let args = [Argument::entity(&post)];

    bridge.on_check_started(&alice, "edit-post", &args);
    bridge.on_check_started(&bob, "edit-post", &args);
    assert_eq!(bridge.pending_len(), 1);
    assert_eq!(sink.span_count(), 2);

    // Alice's finish closes the span opened for Bob.
    bridge.on_check_finished(&alice, "edit-post", true, &args);
    let spans = sink.spans();
    assert!(!spans[0].is_ended());
    assert!(spans[1].is_ended());
    assert_eq!(bridge.pending_len(), 0);

    // Bob's finish finds nothing.
    bridge.on_check_finished(&bob, "edit-post", false, &args);
    assert_eq!(sink.ended_spans().len(), 1);
}

#[test]
fn test_not_recording_sink() {
    let (bridge, sink) = recording_bridge();
    sink.set_recording(false);
    let user = User::new(1, "alice");

    bridge.on_check_started(&user, "view", &[]);
    assert_eq!(bridge.pending_len(), 0);
    assert!(bridge.on_check_finished(&user, "view", true, &[]));
    assert_eq!(sink.span_count(), 0);
}

#[test]
fn test_pending_key_matches_descriptor_hash() {
    let (bridge, _sink) = recording_bridge();
    let user = EntityRef::new("User", 1);
    let post = Post::new(42);
    let args = [Argument::entity(&post), Argument::value("draft")];

    bridge.on_check_started(&user, "edit-post", &args);

    let descriptor = ArgumentDescriptor::format(&args);
    assert_eq!(descriptor.to_json().ok().as_deref(), Some(r#"["Post:42","draft"]"#));
    let key = CorrelationKey::derive(&descriptor).unwrap();
    assert!(bridge.pending().contains(&key));
    assert_eq!(bridge.pending().keys(), [key]);
}
