//! Content-derived correlation keys.

use std::fmt;

use crate::{Result, types::ArgumentDescriptor};

/// A key linking a check-started event to its check-finished event.
///
/// The key is the hex-encoded MD5 digest of the descriptor's JSON encoding.
/// It is a pure function of the formatted arguments.
///
/// ```rust
/// use gate_trace::{Argument, ArgumentDescriptor, EntityRef};
/// use gate_trace::correlation::CorrelationKey;
///
/// let post = EntityRef::new("Post", 42);
/// let descriptor = ArgumentDescriptor::format(&[Argument::entity(&post)]);
///
/// let a = CorrelationKey::derive(&descriptor).unwrap();
/// let b = CorrelationKey::derive(&descriptor).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorrelationKey(String);

impl CorrelationKey {
    /// Derives the key for a formatted argument list.
    pub fn derive(descriptor: &ArgumentDescriptor) -> Result<Self> {
        let encoded = descriptor.to_json_bytes()?;
        Ok(Self::from_bytes(&encoded))
    }

    /// Hashes an already-encoded payload.
    pub fn from_bytes(encoded: &[u8]) -> Self {
        let digest = md5::compute(encoded);
        Self(hex::encode(digest.0))
    }

    /// Returns the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
