//! Error types for gate-trace.
//!
//! The crate has two error types:
//! - [`Error`]: failures of fallible crate APIs (configuration, key derivation)
//! - [`AccessDenied`]: a gate check that completed and denied the actor
//!
//! ## Key Invariant
//!
//! The observer entry points (`on_check_started`, `on_check_finished`) never
//! return an `Error`. Anything that goes wrong while tracing a check is
//! swallowed so the authorization decision itself is never affected.
//!
//! ```rust,ignore
//! // check() - denial is `false`, not an error
//! let allowed = gate.check(&user, "edit-post", &[Argument::entity(&post)]);
//!
//! // authorize() - denial is Err(AccessDenied)
//! gate.authorize(&user, "edit-post", &[Argument::entity(&post)])?;
//! ```

mod access_denied;
#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use access_denied::AccessDenied;
pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for gate-trace operations.
pub type Result<T> = std::result::Result<T, Error>;
