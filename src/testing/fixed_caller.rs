//! FixedCaller for deterministic call-site tests.

use crate::caller::{CallSite, CallerResolver};

/// A call-site resolver that always returns the same answer.
///
/// ```rust
/// use gate_trace::caller::{CallSite, CallerResolver};
/// use gate_trace::testing::FixedCaller;
///
/// let caller = FixedCaller::new(CallSite::new("src/posts.rs", 12));
/// assert_eq!(caller.resolve().map(|site| site.line()), Some(12));
/// assert!(FixedCaller::none().resolve().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedCaller {
    site: Option<CallSite>,
}

impl FixedCaller {
    /// Creates a resolver that always reports `site`.
    pub fn new(site: CallSite) -> Self {
        Self { site: Some(site) }
    }

    /// Creates a resolver that never finds a call-site.
    pub fn none() -> Self {
        Self { site: None }
    }
}

impl CallerResolver for FixedCaller {
    fn resolve(&self) -> Option<CallSite> {
        self.site.clone()
    }
}
