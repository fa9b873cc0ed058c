//! Shared fixtures for the integration tests.

use std::sync::Arc;

use gate_trace::{
    AuthorizationTraceBridge, Entity, Value,
    caller::CallSite,
    testing::{FixedCaller, RecordingSink},
};

/// The acting user in most scenarios.
#[derive(Debug, Clone, Entity)]
pub struct User {
    #[entity(key)]
    pub id: u64,
    #[allow(dead_code)]
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

/// A blog post, the usual check subject.
#[derive(Debug, Clone, Entity)]
#[entity(type = "Post")]
pub struct Post {
    #[entity(key)]
    pub id: u64,
    #[allow(dead_code)]
    pub title: String,
}

impl Post {
    pub fn new(id: u64) -> Self {
        Self { id, title: format!("Post #{id}") }
    }
}

/// A bridge wired to a fresh recording sink with a fixed call-site.
pub fn recording_bridge() -> (Arc<AuthorizationTraceBridge>, RecordingSink) {
    let sink = RecordingSink::new();
    let bridge = AuthorizationTraceBridge::builder()
        .sink(sink.clone())
        .caller_resolver(FixedCaller::new(CallSite::new("app/http/posts_controller.rs", 27)))
        .build()
        .unwrap();
    (Arc::new(bridge), sink)
}

/// Reads a string field out of a context value.
#[allow(dead_code)]
pub fn str_field<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str)
}
