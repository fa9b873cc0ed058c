//! `#[derive(Entity)]` rendering.

use gate_trace::{Argument, ArgumentDescriptor, Entity, Value};

use crate::common::{Post, User};

#[derive(Entity)]
#[entity(type = "Invoice")]
struct Invoice(#[entity(key)] String);

#[derive(Entity)]
struct Team {
    #[allow(dead_code)]
    name: String,
    #[entity(key)]
    slug: &'static str,
}

#[test]
fn test_explicit_type_name() {
    let post = Post::new(42);
    assert_eq!(post.entity_type(), "Post");
    assert_eq!(post.entity_key(), Value::Integer(42));
    assert_eq!(post.entity_ref(), "Post:42");
}

#[test]
fn test_type_name_defaults_to_struct_name() {
    let user = User::new(7, "alice");
    assert_eq!(user.entity_ref(), "User:7");

    let team = Team { name: "Core".into(), slug: "core" };
    assert_eq!(team.entity_ref(), "Team:core");
}

#[test]
fn test_tuple_struct_key() {
    let invoice = Invoice("INV-001".to_string());
    assert_eq!(invoice.entity_ref(), "Invoice:INV-001");
}

#[test]
fn test_derived_entity_formats_as_argument() {
    let post = Post::new(42);
    let descriptor = ArgumentDescriptor::format(&[Argument::from(&post)]);
    assert_eq!(descriptor.to_json().unwrap(), r#"["Post:42"]"#);
}
