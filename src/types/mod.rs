//! Core types for gate-trace.
//!
//! - [`Value`]: JSON-compatible value with deterministic encoding
//! - [`Context`]: named record attached to a span
//! - [`Entity`]: domain value rendered as `"Type:key"`
//! - [`Argument`] / [`ArgumentDescriptor`]: raw and formatted check arguments
//! - [`CheckOutcome`]: allowed / denied

mod argument;
mod context;
mod entity;
mod outcome;
mod value;

pub use argument::{Argument, ArgumentDescriptor};
pub use context::Context;
pub use entity::{Entity, EntityRef};
pub use outcome::CheckOutcome;
pub use value::Value;
