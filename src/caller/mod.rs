//! Best-effort capture of the code location that triggered a gate check.
//!
//! After a check finishes, the bridge asks its [`CallerResolver`] for the
//! first call-site outside the tracing machinery and, if there is one, adds
//! it to the span as a `"Caller"` record. Resolution never fails loudly: a
//! resolver that cannot tell returns `None` and the span simply goes
//! without it.
//!
//! - [`NoCaller`]: never resolves, for environments without stack access
//! - [`BacktraceCaller`]: walks the current stack (feature `backtrace`)
//! - [`FixedCaller`](crate::testing::FixedCaller): canned answer for tests

#[cfg(feature = "backtrace")]
mod stack;

#[cfg(feature = "backtrace")]
pub use stack::BacktraceCaller;

use std::fmt;
use std::sync::Arc;

use crate::types::Context;

/// A source location: file path and 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: String,
    line: u32,
}

impl CallSite {
    /// Creates a call-site.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self { file: file.into(), line }
    }

    /// Returns the file path.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Builds the `{file, line}` context record.
    pub fn to_context(&self) -> Context {
        Context::new().with("file", self.file.as_str()).with("line", self.line)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Finds the code location that invoked the authorization check.
///
/// Called inline from the check-finished handler; implementations must not
/// block and must not panic.
pub trait CallerResolver: Send + Sync {
    /// Returns the first call-site outside the tracing machinery, if known.
    fn resolve(&self) -> Option<CallSite>;
}

impl<R: CallerResolver + ?Sized> CallerResolver for Arc<R> {
    fn resolve(&self) -> Option<CallSite> {
        (**self).resolve()
    }
}

/// A resolver that never finds a call-site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaller;

impl CallerResolver for NoCaller {
    fn resolve(&self) -> Option<CallSite> {
        None
    }
}

/// Returns the resolver used when none is configured.
pub(crate) fn default_resolver() -> Arc<dyn CallerResolver> {
    #[cfg(feature = "backtrace")]
    {
        Arc::new(BacktraceCaller::new())
    }
    #[cfg(not(feature = "backtrace"))]
    {
        Arc::new(NoCaller)
    }
}
