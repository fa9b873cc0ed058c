//! Domain entities and their human-readable rendering.
//!
//! Gate checks are usually made against domain objects (a post, an invoice, a
//! team). When such an object appears among the check arguments it is rendered
//! as `"<TypeName>:<PrimaryKey>"` instead of being serialized field by field.
//!
//! ## Quick Start
//!
//! ```rust
//! use gate_trace::{Entity, Value};
//!
//! struct Post {
//!     id: u64,
//!     title: String,
//! }
//!
//! impl Entity for Post {
//!     fn entity_type(&self) -> &str { "Post" }
//!     fn entity_key(&self) -> Value { self.id.into() }
//! }
//!
//! let post = Post { id: 42, title: "Hello".into() };
//! assert_eq!(post.entity_ref(), "Post:42");
//! ```
//!
//! ## Derive Macro
//!
//! With the `derive` feature enabled:
//!
//! ```rust,ignore
//! use gate_trace::Entity;
//!
//! #[derive(Entity)]
//! #[entity(type = "Post")]
//! struct Post {
//!     #[entity(key)]
//!     id: u64,
//!     title: String,
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

use super::Value;

/// A domain value that has a type name and a primary key.
///
/// The trait is object-safe so heterogeneous entities can be passed to a
/// check as `&dyn Entity`.
pub trait Entity {
    /// Returns the type name (e.g. `"Post"`, `"User"`).
    fn entity_type(&self) -> &str;

    /// Returns the primary-key value of this instance.
    fn entity_key(&self) -> Value;

    /// Returns the rendered reference in `"Type:key"` format.
    fn entity_ref(&self) -> String {
        format!("{}:{}", self.entity_type(), self.entity_key().to_key_string())
    }
}

impl<E: Entity + ?Sized> Entity for &E {
    fn entity_type(&self) -> &str {
        (**self).entity_type()
    }

    fn entity_key(&self) -> Value {
        (**self).entity_key()
    }
}

/// An owned, ad-hoc entity built from a type name and a key.
///
/// Handy for actors and for arguments that do not have a dedicated Rust type.
///
/// ```rust
/// use gate_trace::{Entity, EntityRef};
///
/// let user = EntityRef::new("User", 7);
/// assert_eq!(user.entity_ref(), "User:7");
/// assert_eq!(user.to_string(), "User:7");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRef {
    entity_type: Cow<'static, str>,
    key: Value,
}

impl EntityRef {
    /// Creates an entity reference from type and key components.
    pub fn new(entity_type: impl Into<Cow<'static, str>>, key: impl Into<Value>) -> Self {
        Self { entity_type: entity_type.into(), key: key.into() }
    }

    /// Captures the type and key of any entity.
    pub fn from_entity(entity: &dyn Entity) -> Self {
        Self { entity_type: Cow::Owned(entity.entity_type().to_owned()), key: entity.entity_key() }
    }

    /// Returns the primary key.
    pub fn key(&self) -> &Value {
        &self.key
    }
}

impl Entity for EntityRef {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn entity_key(&self) -> Value {
        self.key.clone()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.key.to_key_string())
    }
}
