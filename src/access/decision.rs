//! Access decision returned by the gate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::TrustLevel;
use crate::{AccessDenied, Error};

/// The outcome of a trust-level access check.
///
/// A denied decision carries the unmet required level so callers can render
/// "requires {level}" without re-deriving it. An allowed decision never
/// carries one.
///
/// ```rust
/// use marketguard::{can_access, TrustLevel};
///
/// let decision = can_access(TrustLevel::Trusted, TrustLevel::Standard);
/// assert!(decision.is_allowed());
/// assert_eq!(decision.unmet_level(), None);
///
/// let decision = can_access(TrustLevel::Sandbox, TrustLevel::Trusted);
/// assert!(decision.is_denied());
/// assert_eq!(decision.unmet_level(), Some(TrustLevel::Trusted));
/// assert_eq!(decision.to_string(), "requires trusted");
/// ```
///
/// Deserialization rejects a denial without `requiredLevel` and an allowed
/// decision with one:
///
/// ```rust
/// use marketguard::AccessDecision;
///
/// let json = r#"{"allowed":false,"subjectLevel":"sandbox"}"#;
/// assert!(serde_json::from_str::<AccessDecision>(json).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DecisionRepr", try_from = "DecisionRepr")]
pub struct AccessDecision {
    /// The trust level the subject holds.
    subject_level: TrustLevel,

    /// The unmet required level. `None` means allowed.
    unmet_level: Option<TrustLevel>,
}

impl AccessDecision {
    /// Creates an "allowed" decision for a subject at `subject_level`.
    pub fn allowed(subject_level: TrustLevel) -> Self {
        Self {
            subject_level,
            unmet_level: None,
        }
    }

    /// Creates a "denied" decision recording the unmet level.
    pub fn denied(subject_level: TrustLevel, required_level: TrustLevel) -> Self {
        Self {
            subject_level,
            unmet_level: Some(required_level),
        }
    }

    /// Returns `true` if access is allowed.
    #[inline]
    pub fn is_allowed(&self) -> bool {
        self.unmet_level.is_none()
    }

    /// Returns `true` if access is denied.
    #[inline]
    pub fn is_denied(&self) -> bool {
        self.unmet_level.is_some()
    }

    /// Returns the subject's trust level.
    #[inline]
    pub fn subject_level(&self) -> TrustLevel {
        self.subject_level
    }

    /// Returns the unmet required level when denied.
    #[inline]
    pub fn unmet_level(&self) -> Option<TrustLevel> {
        self.unmet_level
    }

    /// Converts a denial into `Err(AccessDenied)`.
    pub fn require(self) -> Result<(), AccessDenied> {
        match self.unmet_level {
            Some(required) => Err(AccessDenied::new(self.subject_level, required)),
            None => Ok(()),
        }
    }

    /// Like [`require()`](Self::require), attaching a resource label to the
    /// denial.
    pub fn require_for(self, resource: impl Into<Cow<'static, str>>) -> Result<(), AccessDenied> {
        self.require()
            .map_err(|denied| denied.with_resource(resource))
    }
}

impl From<AccessDecision> for bool {
    fn from(decision: AccessDecision) -> Self {
        decision.is_allowed()
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unmet_level {
            Some(required) => write!(f, "requires {}", required),
            None => write!(f, "allowed"),
        }
    }
}

/// Wire shape: `{"allowed", "subjectLevel", "requiredLevel"?}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecisionRepr {
    allowed: bool,
    subject_level: TrustLevel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    required_level: Option<TrustLevel>,
}

impl From<AccessDecision> for DecisionRepr {
    fn from(decision: AccessDecision) -> Self {
        Self {
            allowed: decision.is_allowed(),
            subject_level: decision.subject_level,
            required_level: decision.unmet_level,
        }
    }
}

impl TryFrom<DecisionRepr> for AccessDecision {
    type Error = Error;

    fn try_from(repr: DecisionRepr) -> Result<Self, Self::Error> {
        match (repr.allowed, repr.required_level) {
            (true, None) => Ok(Self::allowed(repr.subject_level)),
            (false, Some(required)) => Ok(Self::denied(repr.subject_level, required)),
            (true, Some(required)) => Err(Error::invalid_argument(format!(
                "allowed decision cannot carry requiredLevel '{}'",
                required
            ))),
            (false, None) => Err(Error::invalid_argument(
                "denied decision is missing requiredLevel",
            )),
        }
    }
}
