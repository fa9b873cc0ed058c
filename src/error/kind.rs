//! Error kind enumeration for categorizing crate errors.

/// Categorization of gate-trace errors.
///
/// None of these are ever produced by the check observers themselves; they
/// surface from builders, configuration validation and the standalone
/// correlation helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid bridge or sink configuration (empty category, empty context names).
    #[error("configuration error")]
    Configuration,

    /// Check arguments could not be encoded deterministically.
    #[error("serialization error")]
    Serialization,

    /// The authorization check was denied.
    ///
    /// Only produced when an [`AccessDenied`](crate::AccessDenied) is
    /// converted into an [`Error`](crate::Error).
    #[error("forbidden")]
    Forbidden,

    /// Unexpected internal failure.
    #[error("internal error")]
    Internal,
}

impl ErrorKind {
    /// Returns the default message used by [`Error::from_kind`](crate::Error::from_kind).
    pub(crate) fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "invalid configuration",
            ErrorKind::Serialization => "failed to serialize check arguments",
            ErrorKind::Forbidden => "access denied",
            ErrorKind::Internal => "internal error",
        }
    }
}
