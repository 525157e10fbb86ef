//! Classifier configuration.

use crate::{Error, Result};

/// Configuration for a [`Classifier`](crate::Classifier).
///
/// Options here only shape diagnostics. Category, user message,
/// retryability, and status code are fixed by the classification table and
/// cannot be configured.
///
/// ## Default Values
///
/// - `max_technical_len`: `None` (technical text is kept whole)
/// - `emit_events`: `true`
///
/// ## Example
///
/// ```rust
/// use marketguard::ClassifierConfig;
///
/// let config = ClassifierConfig::builder()
///     .max_technical_len(120)
///     .emit_events(false)
///     .build();
/// assert_eq!(config.max_technical_len, Some(120));
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct ClassifierConfig {
    /// Maximum length of `technical` in characters. Longer text is cut and
    /// suffixed with `…`.
    pub max_technical_len: Option<usize>,

    /// Whether to emit a `tracing` event per classification.
    ///
    /// Has no effect unless the `tracing` feature is enabled.
    #[builder(default = true)]
    pub emit_events: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClassifierConfig {
    /// Length cap applied by [`compact()`](Self::compact).
    pub const COMPACT_TECHNICAL_LEN: usize = 256;

    /// A configuration that caps technical text for log lines.
    pub fn compact() -> Self {
        Self::builder()
            .max_technical_len(Self::COMPACT_TECHNICAL_LEN)
            .build()
    }

    /// Checks the configuration for values the classifier cannot honor.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
    /// `max_technical_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_technical_len == Some(0) {
            return Err(Error::configuration(
                "max_technical_len must be greater than zero",
            ));
        }
        Ok(())
    }
}
