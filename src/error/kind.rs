//! Error kind enumeration for the crate's own fallible operations.

/// Categorization of crate errors.
///
/// These are errors raised by the crate's fallible edges (parsing input,
/// turning a denied [`AccessDecision`] into an error). They are unrelated to
/// the [`ErrorCategory`] taxonomy the classifier produces for backend
/// failures.
///
/// [`AccessDecision`]: crate::AccessDecision
/// [`ErrorCategory`]: crate::ErrorCategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input could not be parsed or was out of range.
    ///
    /// For example an unrecognized trust level name.
    #[error("invalid argument")]
    InvalidArgument,

    /// The acting subject does not meet a resource's trust requirement.
    ///
    /// Produced when an [`AccessDenied`] is converted into an [`Error`].
    ///
    /// [`AccessDenied`]: crate::AccessDenied
    /// [`Error`]: crate::Error
    #[error("forbidden")]
    Forbidden,

    /// Invalid configuration.
    #[error("configuration error")]
    Configuration,
}
