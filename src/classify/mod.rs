//! Failure classification.
//!
//! The classifier reduces a [`RawFailure`] to a [`ClassifiedError`]: one of
//! five [`ErrorCategory`] values, a user-safe message, a diagnostic string,
//! a retry flag, and the status code when a response was received.
//!
//! ```rust
//! use marketguard::{classify, ErrorCategory, RawFailure};
//!
//! let raw = RawFailure::from_status_body(500, r#"{"detail":"db down"}"#);
//! let err = classify(&raw);
//!
//! assert_eq!(err.category(), ErrorCategory::Server);
//! assert_eq!(err.message(), "The server encountered an error. Please try again shortly.");
//! assert_eq!(err.technical(), "db down");
//! assert!(err.is_retryable());
//! assert_eq!(err.status_code(), Some(500));
//! ```
//!
//! Callers decide retries from [`ClassifiedError::is_retryable()`] only,
//! never from status codes.

mod category;
mod classified;
mod classifier;

use std::panic::{self, UnwindSafe};

pub use category::ErrorCategory;
pub use classified::ClassifiedError;
pub use classifier::{Classifier, messages};

use crate::failure::RawFailure;

/// Classifies a raw failure with the default [`Classifier`].
pub fn classify(raw: &RawFailure) -> ClassifiedError {
    Classifier::default().classify(raw)
}

/// Returns `true` if `raw` classifies as [`ErrorCategory::Network`].
pub fn is_network_error(raw: &RawFailure) -> bool {
    raw.is_network_error()
}

/// Returns `true` if `raw` classifies as [`ErrorCategory::Auth`].
pub fn is_auth_error(raw: &RawFailure) -> bool {
    raw.is_auth_error()
}

/// Runs `f`, classifying a panic instead of unwinding further.
///
/// A `&str` or `String` panic payload becomes the technical text; any other
/// payload is classified as an unrecognized value. Either way the result is
/// [`ErrorCategory::Unknown`].
///
/// ```rust
/// use marketguard::{catch_classified, ErrorCategory};
///
/// let ok = catch_classified(|| 2 + 2);
/// assert_eq!(ok.unwrap(), 4);
/// ```
pub fn catch_classified<T, F>(f: F) -> Result<T, ClassifiedError>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| classify(&RawFailure::from_panic(payload.as_ref())))
}

/// Classification for anything that describes a failure.
///
/// Implementors only provide [`classify()`](Classify::classify); the
/// predicates are derived from it so the taxonomy has a single source.
///
/// ```rust
/// use marketguard::Classify;
///
/// let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
/// assert!(err.is_network_error());
/// assert!(err.classify().technical().starts_with("Timeout:"));
/// ```
pub trait Classify {
    /// Classifies this failure.
    fn classify(&self) -> ClassifiedError;

    /// Returns `true` if this failure classifies as [`ErrorCategory::Network`].
    fn is_network_error(&self) -> bool {
        self.classify().category() == ErrorCategory::Network
    }

    /// Returns `true` if this failure classifies as [`ErrorCategory::Auth`].
    fn is_auth_error(&self) -> bool {
        self.classify().category() == ErrorCategory::Auth
    }
}

impl Classify for RawFailure {
    fn classify(&self) -> ClassifiedError {
        classify(self)
    }
}

impl Classify for std::io::Error {
    fn classify(&self) -> ClassifiedError {
        classify(&RawFailure::from(self))
    }
}

#[cfg(feature = "reqwest")]
impl Classify for reqwest::Error {
    fn classify(&self) -> ClassifiedError {
        classify(&RawFailure::from_reqwest(self))
    }
}

impl From<&RawFailure> for ClassifiedError {
    fn from(raw: &RawFailure) -> Self {
        classify(raw)
    }
}

impl From<RawFailure> for ClassifiedError {
    fn from(raw: RawFailure) -> Self {
        classify(&raw)
    }
}
