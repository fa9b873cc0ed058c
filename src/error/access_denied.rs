//! AccessDenied error type for denied gate checks.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Error returned when a gate check completes and denies the actor.
///
/// This is **distinct from** [`Error`](crate::Error): it represents a
/// successful check whose outcome was "denied", not a failure to check.
///
/// - `check()` returns `false` for denial (not an error)
/// - `authorize()` returns `Err(AccessDenied)` for denial
///
/// ## Example
///
/// ```rust
/// use gate_trace::AccessDenied;
///
/// let denied = AccessDenied::new("User:7", "edit-post", vec!["Post:42".to_string()]);
/// assert_eq!(denied.actor(), "User:7");
/// assert_eq!(denied.ability(), "edit-post");
/// assert_eq!(denied.arguments(), ["Post:42"]);
/// ```
#[derive(Debug, Clone)]
pub struct AccessDenied {
    /// Rendered actor that was denied.
    actor: Cow<'static, str>,

    /// The ability that was checked.
    ability: Cow<'static, str>,

    /// Rendered check arguments.
    arguments: Vec<String>,

    /// Optional reason for the denial.
    reason: Option<Cow<'static, str>>,
}

impl AccessDenied {
    /// Creates a new AccessDenied error.
    pub fn new(
        actor: impl Into<Cow<'static, str>>,
        ability: impl Into<Cow<'static, str>>,
        arguments: Vec<String>,
    ) -> Self {
        Self { actor: actor.into(), ability: ability.into(), arguments, reason: None }
    }

    /// Returns the rendered actor (e.g. `"User:7"`).
    #[inline]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Returns the ability that was checked.
    #[inline]
    pub fn ability(&self) -> &str {
        &self.ability
    }

    /// Returns the rendered check arguments.
    #[inline]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the denial reason, if available.
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Sets the denial reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns a formatted string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![
            format!("actor={}", self.actor),
            format!("ability={}", self.ability),
            format!("arguments=[{}]", self.arguments.join(",")),
        ];

        if let Some(ref reason) = self.reason {
            parts.push(format!("reason={}", reason));
        }

        format!("access_denied: {}", parts.join(" "))
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access denied: {} cannot {}", self.actor, self.ability)?;

        if !self.arguments.is_empty() {
            write!(f, " [{}]", self.arguments.join(", "))?;
        }

        if let Some(ref reason) = self.reason {
            write!(f, " ({})", reason)?;
        }

        Ok(())
    }
}

impl StdError for AccessDenied {}

impl From<AccessDenied> for super::Error {
    fn from(denied: AccessDenied) -> Self {
        super::Error::new(
            super::ErrorKind::Forbidden,
            format!("{} cannot {}", denied.actor, denied.ability),
        )
    }
}
