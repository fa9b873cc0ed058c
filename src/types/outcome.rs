//! Outcome of a gate check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The result of a gate check as it is reported on a span.
///
/// ```rust
/// use gate_trace::CheckOutcome;
///
/// assert_eq!(CheckOutcome::from(true).as_str(), "allowed");
/// assert_eq!(CheckOutcome::from(false).as_str(), "denied");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The actor may perform the ability.
    Allowed,
    /// The actor may not perform the ability.
    Denied,
}

impl CheckOutcome {
    /// Returns `true` if access was allowed.
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, CheckOutcome::Allowed)
    }

    /// Returns `true` if access was denied.
    #[inline]
    pub fn is_denied(&self) -> bool {
        matches!(self, CheckOutcome::Denied)
    }

    /// Returns the label written into span context.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckOutcome::Allowed => "allowed",
            CheckOutcome::Denied => "denied",
        }
    }
}

impl From<bool> for CheckOutcome {
    fn from(allowed: bool) -> Self {
        if allowed { CheckOutcome::Allowed } else { CheckOutcome::Denied }
    }
}

impl From<CheckOutcome> for bool {
    fn from(outcome: CheckOutcome) -> Self {
        outcome.is_allowed()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
