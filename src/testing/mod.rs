//! Testing utilities.
//!
//! - [`MockAccessPolicy`]: an [`AccessPolicy`](crate::AccessPolicy) double
//!   with scripted decisions and call verification
//! - [`failures`]: raw failure fixtures, one per classification branch
//!
//! ## Quick Start
//!
//! ```rust
//! use marketguard::testing::{failures, MockAccessPolicy};
//! use marketguard::{classify, AccessPolicy, TrustLevel};
//!
//! fn publish(policy: &dyn AccessPolicy, level: TrustLevel) -> bool {
//!     policy.decide(level, TrustLevel::Trusted).is_allowed()
//! }
//!
//! let mock = MockAccessPolicy::allow_all();
//! assert!(publish(&mock, TrustLevel::Sandbox));
//!
//! assert!(!classify(&failures::not_found()).is_retryable());
//! ```

pub mod failures;
mod mock_policy;

pub use mock_policy::MockAccessPolicy;
