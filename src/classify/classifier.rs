//! The ordered classification table.

use super::{ClassifiedError, ErrorCategory};
use crate::config::ClassifierConfig;
use crate::failure::{OpaqueFailure, RawFailure, ResponseFailure, TransportFailure};
use crate::Result;

/// End-user messages, one per classification branch.
pub mod messages {
    /// Transport failure that timed out.
    pub const TIMEOUT: &str = "Request timed out. The server may be overloaded.";
    /// Transport failure without a timeout.
    pub const OFFLINE: &str = "Cannot connect to the backend. The server may be offline.";
    /// Status 401.
    pub const SIGN_IN: &str = "You need to sign in to access this content.";
    /// Status 403.
    pub const FORBIDDEN: &str = "You do not have permission to access this resource.";
    /// Status 404.
    pub const NOT_FOUND: &str = "The requested resource was not found.";
    /// Status 500 and above.
    pub const SERVER: &str = "The server encountered an error. Please try again shortly.";
    /// Any other status and unrecognized failures.
    pub const UNEXPECTED: &str = "An unexpected error occurred.";
}

/// Maps raw failures to [`ClassifiedError`]s.
///
/// Classification is total: every [`RawFailure`] yields a value and nothing
/// here panics or returns an error. The [`ClassifierConfig`] only shapes
/// the `technical` text and logging.
///
/// ```rust
/// use marketguard::{Classifier, ClassifierConfig, ErrorCategory, RawFailure};
///
/// let classifier = Classifier::new(ClassifierConfig::compact()).unwrap();
/// let err = classifier.classify(&RawFailure::response(404, None));
/// assert_eq!(err.category(), ErrorCategory::NotFound);
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Creates a classifier with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config fails
    /// [`validate()`](ClassifierConfig::validate).
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the classifier's configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a raw failure.
    pub fn classify(&self, raw: &RawFailure) -> ClassifiedError {
        let classified = classify_raw(raw);
        let classified = match self.config.max_technical_len {
            Some(limit) if classified.technical().chars().count() > limit => {
                let cut = truncate(classified.technical(), limit);
                classified.with_technical(cut)
            }
            _ => classified,
        };

        #[cfg(feature = "tracing")]
        if self.config.emit_events {
            tracing::debug!(
                category = %classified.category(),
                status = ?classified.status_code(),
                retryable = classified.is_retryable(),
                "classified failure"
            );
            tracing::trace!(technical = %classified.technical(), "classified failure detail");
        }

        classified
    }
}

/// First match wins; precedence is the order of the arms.
fn classify_raw(raw: &RawFailure) -> ClassifiedError {
    match raw {
        RawFailure::Transport(TransportFailure { timed_out: true, message }) => {
            let message = non_empty(message.as_deref()).unwrap_or("deadline exceeded");
            ClassifiedError::new(
                ErrorCategory::Network,
                messages::TIMEOUT,
                format!("Timeout: {}", message),
                None,
            )
        }
        RawFailure::Transport(TransportFailure { timed_out: false, message }) => {
            ClassifiedError::new(
                ErrorCategory::Network,
                messages::OFFLINE,
                non_empty(message.as_deref())
                    .unwrap_or("Network error")
                    .to_string(),
                None,
            )
        }
        RawFailure::Response(response) => classify_response(response),
        RawFailure::Opaque(OpaqueFailure { message: Some(message), .. }) if !message.is_empty() => {
            ClassifiedError::new(
                ErrorCategory::Unknown,
                messages::UNEXPECTED,
                message.clone(),
                None,
            )
        }
        RawFailure::Opaque(OpaqueFailure { rendering, .. }) => ClassifiedError::new(
            ErrorCategory::Unknown,
            messages::UNEXPECTED,
            non_empty(Some(rendering.as_str()))
                .unwrap_or("Unknown error")
                .to_string(),
            None,
        ),
    }
}

fn classify_response(response: &ResponseFailure) -> ClassifiedError {
    let status = response.status;
    let (category, message, fallback) = match status {
        401 => (ErrorCategory::Auth, messages::SIGN_IN, String::from("Unauthorized")),
        403 => (ErrorCategory::Auth, messages::FORBIDDEN, String::from("Forbidden")),
        404 => (ErrorCategory::NotFound, messages::NOT_FOUND, String::from("Not found")),
        500..=u16::MAX => (
            ErrorCategory::Server,
            messages::SERVER,
            format!("Server error {}", status),
        ),
        // TODO: 400/409/422 are not transient; split them out of Unknown so
        // they stop being retryable.
        _ => (ErrorCategory::Unknown, messages::UNEXPECTED, format!("HTTP {}", status)),
    };

    let technical = response.detail().unwrap_or(fallback);
    ClassifiedError::new(category, message, technical, Some(status))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

fn truncate(text: &str, limit: usize) -> String {
    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
