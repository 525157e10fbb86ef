//! The closed category taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of a classified failure.
///
/// This is the stable contract UI, logging, and retry code bind to. The set
/// is closed: adding a category is a compile error at every exhaustive
/// `match`.
///
/// ## Retryable vs Non-Retryable
///
/// | Category    | Wire value  | Retryable | Typical cause                  |
/// |-------------|-------------|-----------|--------------------------------|
/// | `Network`   | `NETWORK`   | Yes       | No response, timeout, offline  |
/// | `Auth`      | `AUTH`      | No        | 401, 403                       |
/// | `NotFound`  | `NOT_FOUND` | No        | 404                            |
/// | `Server`    | `SERVER`    | Yes       | 5xx                            |
/// | `Unknown`   | `UNKNOWN`   | Yes       | Other statuses, foreign errors |
///
/// `Unknown` is retryable so recoverable failures are not silently dropped;
/// the caller retries at its own risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// No usable response was received.
    Network,

    /// The caller is unauthenticated or lacks permission.
    Auth,

    /// The backend failed (status 500 and above).
    Server,

    /// The requested resource does not exist.
    NotFound,

    /// Anything not recognized.
    Unknown,
}

impl ErrorCategory {
    /// Every category, in declaration order.
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::Network,
        ErrorCategory::Auth,
        ErrorCategory::Server,
        ErrorCategory::NotFound,
        ErrorCategory::Unknown,
    ];

    /// Returns `true` if failures in this category may be retried.
    ///
    /// This is the single source of the retry policy.
    #[inline]
    pub const fn is_retryable(self) -> bool {
        match self {
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::Unknown => true,
            ErrorCategory::Auth | ErrorCategory::NotFound => false,
        }
    }

    /// Returns the wire value, e.g. `"NOT_FOUND"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NETWORK",
            ErrorCategory::Auth => "AUTH",
            ErrorCategory::Server => "SERVER",
            ErrorCategory::NotFound => "NOT_FOUND",
            ErrorCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
