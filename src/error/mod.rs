//! Error types for the crate's own fallible operations.
//!
//! Two error types live here:
//! - [`Error`]: parse and configuration failures at the crate's edges
//! - [`AccessDenied`]: a trust-level denial escalated with `require()`
//!
//! Neither is the classifier's output. Backend failures are described by
//! [`ClassifiedError`](crate::ClassifiedError), which is a value, not an error
//! raised by this crate.
//!
//! ## Key Invariant
//!
//! `can_access()` returns a decision for both outcomes. Only `require()`
//! converts a denial into an error (`AccessDenied`).
//!
//! ```rust
//! use marketguard::{can_access, TrustLevel};
//!
//! // can_access() - denial is a value
//! let decision = can_access(TrustLevel::Sandbox, TrustLevel::Trusted);
//! assert!(decision.is_denied());
//!
//! // require() - denial is Err(AccessDenied)
//! assert!(decision.require().is_err());
//! ```

mod access_denied;
#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use access_denied::AccessDenied;
pub use error::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
