//! The access policy seam and its default comparator.

use super::{AccessDecision, TrustLevel};

/// Decides whether a subject may act on a resource.
///
/// Callers depend on this trait and on [`AccessDecision`], never on how the
/// decision is reached. [`TrustScale`] is the default implementation; a
/// per-action capability policy would be another.
///
/// The trait is object-safe so policies can be injected as
/// `&dyn AccessPolicy` or `Arc<dyn AccessPolicy>`.
pub trait AccessPolicy: Send + Sync {
    /// Decides access for a subject at `subject` against a resource
    /// requiring `required`.
    fn decide(&self, subject: TrustLevel, required: TrustLevel) -> AccessDecision;
}

/// The default policy: a plain comparison on the ordered trust scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustScale;

impl AccessPolicy for TrustScale {
    fn decide(&self, subject: TrustLevel, required: TrustLevel) -> AccessDecision {
        if subject.satisfies(required) {
            AccessDecision::allowed(subject)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                subject_level = %subject,
                required_level = %required,
                "access denied by trust scale"
            );
            AccessDecision::denied(subject, required)
        }
    }
}

/// Decides access on the default [`TrustScale`].
///
/// `allowed` is `rank(subject) >= rank(required)`; a denial records
/// `required`.
///
/// ```rust
/// use marketguard::{can_access, TrustLevel};
///
/// assert!(can_access(TrustLevel::Trusted, TrustLevel::Standard).is_allowed());
/// assert!(can_access(TrustLevel::Core, TrustLevel::Core).is_allowed());
/// assert!(can_access(TrustLevel::Sandbox, TrustLevel::Trusted).is_denied());
/// ```
pub fn can_access(subject: TrustLevel, required: TrustLevel) -> AccessDecision {
    TrustScale.decide(subject, required)
}
