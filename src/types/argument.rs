//! Check arguments and their formatted descriptor.

use std::fmt;

use serde::Serialize;

use super::{Entity, Value};

/// One raw argument passed to a gate check, after the actor and ability.
///
/// Arguments are either domain entities (rendered as `"Type:key"`) or plain
/// values that pass through formatting unchanged.
///
/// ```rust
/// use gate_trace::{Argument, EntityRef};
///
/// let post = EntityRef::new("Post", 42);
/// let args = [Argument::entity(&post), Argument::from(3), Argument::value("draft")];
///
/// assert_eq!(args[0].format().as_str(), Some("Post:42"));
/// assert_eq!(args[1].format().as_i64(), Some(3));
/// ```
#[derive(Clone)]
pub enum Argument<'a> {
    /// A domain entity.
    Entity(&'a dyn Entity),
    /// Any other value.
    Value(Value),
}

impl<'a> Argument<'a> {
    /// Wraps a domain entity.
    pub fn entity(entity: &'a dyn Entity) -> Self {
        Argument::Entity(entity)
    }

    /// Wraps a plain value.
    pub fn value(value: impl Into<Value>) -> Self {
        Argument::Value(value.into())
    }

    /// Applies the formatting rule to this argument.
    pub fn format(&self) -> Value {
        match self {
            Argument::Entity(entity) => Value::String(entity.entity_ref()),
            Argument::Value(value) => value.clone(),
        }
    }
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Entity(entity) => f.debug_tuple("Entity").field(&entity.entity_ref()).finish(),
            Argument::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl<'a, E: Entity> From<&'a E> for Argument<'a> {
    fn from(entity: &'a E) -> Self {
        Argument::Entity(entity)
    }
}

impl From<Value> for Argument<'_> {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

macro_rules! argument_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument<'_> {
                fn from(value: $ty) -> Self {
                    Argument::Value(Value::from(value))
                }
            }
        )*
    };
}

argument_from_value!(bool, i32, i64, u32, u64, usize, f64, String);

/// The formatted, human-readable form of a check's arguments.
///
/// Produced element-wise by [`Argument::format`]. Its JSON encoding is
/// deterministic: equal arguments always encode to identical bytes, which is
/// what makes it usable as correlation-key input.
///
/// ```rust
/// use gate_trace::{Argument, ArgumentDescriptor, EntityRef};
///
/// let post = EntityRef::new("Post", 42);
/// let descriptor = ArgumentDescriptor::format(&[Argument::entity(&post)]);
///
/// assert_eq!(descriptor.to_json().unwrap(), r#"["Post:42"]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgumentDescriptor(Vec<Value>);

impl ArgumentDescriptor {
    /// Formats raw check arguments.
    pub fn format(arguments: &[Argument<'_>]) -> Self {
        Self(arguments.iter().map(Argument::format).collect())
    }

    /// Returns the formatted values in argument order.
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the check had no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the descriptor as compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the descriptor as compact JSON bytes.
    pub fn to_json_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Renders every element as a plain string, for logs and denial messages.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Value::to_key_string).collect()
    }
}

impl From<ArgumentDescriptor> for Value {
    fn from(descriptor: ArgumentDescriptor) -> Self {
        Value::Array(descriptor.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use test_case::test_case;

    use super::*;
    use crate::types::EntityRef;

    #[test_case(Argument::from(42), "42" ; "integer")]
    #[test_case(Argument::value("draft"), "\"draft\"" ; "string")]
    #[test_case(Argument::from(true), "true" ; "boolean")]
    #[test_case(Argument::from(Value::Null), "null" ; "null")]
    #[test_case(Argument::value(vec![1i64, 2]), "[1,2]" ; "array")]
    fn test_plain_values_pass_through(argument: Argument<'_>, expected: &str) {
        let json = serde_json::to_string(&argument.format()).unwrap();
        assert_eq!(json, expected);
    }

    #[test]
    fn test_entity_is_rendered() {
        let post = EntityRef::new("Post", 42);
        let descriptor = ArgumentDescriptor::format(&[Argument::entity(&post)]);
        assert_eq!(descriptor.values(), [Value::from("Post:42")]);
    }

    #[test]
    fn test_mixed_arguments_keep_order() {
        let post = EntityRef::new("Post", 42);
        let team = EntityRef::new("Team", "core");
        let descriptor = ArgumentDescriptor::format(&[
            Argument::from(&team),
            Argument::from(1),
            Argument::entity(&post),
        ]);

        assert_eq!(descriptor.to_json().unwrap(), r#"["Team:core",1,"Post:42"]"#);
        assert_eq!(descriptor.to_strings(), ["Team:core", "1", "Post:42"]);
    }

    #[test]
    fn test_nested_objects_encode_deterministically() {
        let mut first = BTreeMap::new();
        first.insert("b".to_string(), Value::from(2));
        first.insert("a".to_string(), Value::from(1));

        let mut second = BTreeMap::new();
        second.insert("a".to_string(), Value::from(1));
        second.insert("b".to_string(), Value::from(2));

        let lhs = ArgumentDescriptor::format(&[Argument::from(Value::Object(first))]);
        let rhs = ArgumentDescriptor::format(&[Argument::from(Value::Object(second))]);
        assert_eq!(lhs.to_json_bytes().unwrap(), rhs.to_json_bytes().unwrap());
    }

    #[test]
    fn test_empty_arguments() {
        let descriptor = ArgumentDescriptor::format(&[]);
        assert!(descriptor.is_empty());
        assert_eq!(descriptor.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_debug_shows_rendered_entity() {
        let post = EntityRef::new("Post", 1);
        assert_eq!(format!("{:?}", Argument::entity(&post)), "Entity(\"Post:1\")");
    }
}
