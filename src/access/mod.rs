//! Trust-level access gating.
//!
//! - [`TrustLevel`]: the ordered scale `Sandbox < Standard < Trusted < Core`
//! - [`AccessDecision`]: allow/deny plus the unmet level
//! - [`AccessPolicy`]: the seam callers depend on; [`TrustScale`] is the
//!   default comparator behind [`can_access()`]

mod decision;
mod policy;
mod trust;

pub use decision::AccessDecision;
pub use policy::{AccessPolicy, TrustScale, can_access};
pub use trust::TrustLevel;
