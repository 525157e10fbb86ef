//! AccessDenied error type for trust-level denial.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::access::TrustLevel;

/// Error returned when a subject's trust level is below a resource's
/// requirement.
///
/// This type is **distinct from [`Error`](crate::Error)**. It represents a
/// gate decision that resulted in denial, not a failure to decide.
///
/// ## When is AccessDenied Returned?
///
/// - [`can_access()`](crate::can_access) returns an [`AccessDecision`] for
///   both outcomes (denial is not an error)
/// - [`AccessDecision::require()`] returns `Err(AccessDenied)` for denial
///
/// ```rust
/// use marketguard::{can_access, TrustLevel};
///
/// let decision = can_access(TrustLevel::Sandbox, TrustLevel::Trusted);
/// assert!(!decision.is_allowed());
///
/// let denied = decision.require().unwrap_err();
/// assert_eq!(denied.required(), TrustLevel::Trusted);
/// assert_eq!(denied.to_string(), "access denied: requires trusted (subject is sandbox)");
/// ```
///
/// [`AccessDecision`]: crate::AccessDecision
/// [`AccessDecision::require()`]: crate::AccessDecision::require
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    /// The trust level the subject holds.
    subject: TrustLevel,

    /// The trust level the resource requires.
    required: TrustLevel,

    /// Optional label of the gated resource.
    resource: Option<Cow<'static, str>>,
}

impl AccessDenied {
    /// Creates a new AccessDenied error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketguard::{AccessDenied, TrustLevel};
    ///
    /// let denied = AccessDenied::new(TrustLevel::Standard, TrustLevel::Core);
    /// assert_eq!(denied.subject(), TrustLevel::Standard);
    /// assert_eq!(denied.required(), TrustLevel::Core);
    /// assert!(denied.resource().is_none());
    /// ```
    pub fn new(subject: TrustLevel, required: TrustLevel) -> Self {
        Self {
            subject,
            required,
            resource: None,
        }
    }

    /// Returns the trust level the subject holds.
    #[inline]
    pub fn subject(&self) -> TrustLevel {
        self.subject
    }

    /// Returns the unmet trust level.
    ///
    /// Use this to render "requires {level}" to the user.
    #[inline]
    pub fn required(&self) -> TrustLevel {
        self.required
    }

    /// Returns the gated resource label, if one was attached.
    #[inline]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Attaches a resource label, e.g. `"item:42"` or `"publish"`.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<Cow<'static, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Returns a formatted string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![
            format!("subject_level={}", self.subject),
            format!("required_level={}", self.required),
        ];

        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }

        format!("access_denied: {}", parts.join(" "))
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access denied: ")?;

        if let Some(ref resource) = self.resource {
            write!(f, "{} ", resource)?;
        }

        write!(f, "requires {} (subject is {})", self.required, self.subject)
    }
}

impl StdError for AccessDenied {}

/// Converts a denial into the crate's [`Error`](super::Error) with kind
/// [`Forbidden`](super::ErrorKind::Forbidden), for callers that only
/// propagate one error type.
impl From<AccessDenied> for super::Error {
    fn from(denied: AccessDenied) -> Self {
        let message = match denied.resource {
            Some(ref resource) => format!("{} requires {}", resource, denied.required),
            None => format!("requires {}", denied.required),
        };
        super::Error::forbidden(message).with_source(denied)
    }
}
