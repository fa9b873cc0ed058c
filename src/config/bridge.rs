//! Span naming and context options for the trace bridge.

use crate::{Error, Result};

/// Configuration for [`AuthorizationTraceBridge`](crate::AuthorizationTraceBridge).
///
/// The defaults reproduce the layout APM dashboards expect for gate checks:
/// spans of category `gate` labelled `Authorization::<ability>`, with a
/// `Check` record for the decision and a `Caller` record for the call-site.
///
/// ## Example
///
/// ```rust
/// use gate_trace::BridgeConfig;
///
/// let config = BridgeConfig::builder()
///     .category("policy")
///     .capture_caller(false)
///     .build();
///
/// assert_eq!(config.label_for("edit-post"), "Authorization::edit-post");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct BridgeConfig {
    /// Span category passed to the sink.
    #[builder(into, default = "gate".to_string())]
    pub category: String,

    /// Prefix prepended to the ability name to form the span label.
    #[builder(into, default = "Authorization::".to_string())]
    pub label_prefix: String,

    /// Name of the context record holding ability, result and arguments.
    #[builder(into, default = "Check".to_string())]
    pub check_context: String,

    /// Name of the context record holding the call-site.
    #[builder(into, default = "Caller".to_string())]
    pub caller_context: String,

    /// Whether to resolve and attach the call-site when a check finishes.
    #[builder(default = true)]
    pub capture_caller: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BridgeConfig {
    /// Creates a configuration that never resolves call-sites.
    pub fn without_caller() -> Self {
        Self::builder().capture_caller(false).build()
    }

    /// Returns the span label for `ability`.
    pub fn label_for(&self, ability: &str) -> String {
        format!("{}{}", self.label_prefix, ability)
    }

    /// Checks that every name the sink will see is non-empty and that the
    /// two context records do not overwrite each other.
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(Error::configuration("span category cannot be empty"));
        }
        if self.check_context.trim().is_empty() {
            return Err(Error::configuration("check context name cannot be empty"));
        }
        if self.caller_context.trim().is_empty() {
            return Err(Error::configuration("caller context name cannot be empty"));
        }
        if self.check_context == self.caller_context {
            return Err(Error::configuration(format!(
                "check and caller context share the name '{}'",
                self.check_context
            )));
        }
        Ok(())
    }
}
