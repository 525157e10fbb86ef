//! The classifier's output record.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use super::ErrorCategory;

/// A failure reduced to a category, a user-safe message, and a retry flag.
///
/// ```text
/// ClassifiedError
/// ├── category: ErrorCategory    (closed taxonomy)
/// ├── message: &'static str      (safe to show to end users)
/// ├── technical: String          (for logs only, may echo backend text)
/// ├── retryable: bool            (derived from category)
/// └── status_code: Option<u16>   (only when a response was received)
/// ```
///
/// Values are only produced by the classifier, so `retryable` always agrees
/// with [`ErrorCategory::is_retryable()`]. Serialized field names are
/// camelCase (`statusCode`); `statusCode` is omitted when absent.
///
/// `Display` renders [`message()`](Self::message) only. Never show
/// [`technical()`](Self::technical) to end users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    category: ErrorCategory,
    message: &'static str,
    technical: String,
    retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

impl ClassifiedError {
    pub(crate) fn new(
        category: ErrorCategory,
        message: &'static str,
        technical: String,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            category,
            message,
            technical,
            retryable: category.is_retryable(),
            status_code,
        }
    }

    pub(crate) fn with_technical(mut self, technical: String) -> Self {
        self.technical = technical;
        self
    }

    /// Returns the failure category.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Returns the end-user-safe message.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the diagnostic text for logs.
    #[inline]
    pub fn technical(&self) -> &str {
        &self.technical
    }

    /// Returns `true` if the failure may be retried.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Returns the HTTP status if a response was received.
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns `true` for [`ErrorCategory::Network`].
    #[inline]
    pub fn is_network(&self) -> bool {
        self.category == ErrorCategory::Network
    }

    /// Returns `true` for [`ErrorCategory::Auth`].
    #[inline]
    pub fn is_auth(&self) -> bool {
        self.category == ErrorCategory::Auth
    }

    /// Returns a formatted string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![
            format!("category={}", self.category),
            format!("retryable={}", self.retryable),
        ];

        if let Some(status) = self.status_code {
            parts.push(format!("status={}", status));
        }

        parts.push(format!("technical={:?}", self.technical));

        format!("classified_error: {}", parts.join(" "))
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl StdError for ClassifiedError {}
