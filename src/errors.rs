//! Error types for focus_textrank
//!
//! Every stage of the summarizer returns [`Result`]. The public entry points
//! turn these errors into empty, best-effort output and log them, so callers
//! of the high-level API never see a failure.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for focus_textrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// Input text is empty or whitespace-only
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Fewer sentences than the selection minimum; the input is returned as-is
    #[error("Insufficient content: {sentences} sentence(s), need more than {min_sentences}")]
    InsufficientContent {
        sentences: usize,
        min_sentences: usize,
    },

    /// The linguistic tokenizer was requested but is not compiled in
    #[error("Tokenizer unavailable: {requested}")]
    UnavailableTokenizer { requested: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Any other failure inside a stage
    #[error("Unexpected failure in {stage}: {message}")]
    UnexpectedFailure { stage: String, message: String },
}

impl SummarizeError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an insufficient content error
    pub fn insufficient_content(sentences: usize, min_sentences: usize) -> Self {
        Self::InsufficientContent {
            sentences,
            min_sentences,
        }
    }

    /// Create an unavailable tokenizer error
    pub fn unavailable_tokenizer(requested: impl Into<String>) -> Self {
        Self::UnavailableTokenizer {
            requested: requested.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an unexpected failure error for a named stage
    pub fn unexpected(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedFailure {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Errors that describe a degenerate input rather than a fault.
    ///
    /// These are expected in normal use and are logged at debug level.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::InsufficientContent { .. }
                | Self::UnavailableTokenizer { .. }
        )
    }
}

/// Log a stage failure at the level its kind deserves
pub(crate) fn report(stage: &str, err: &SummarizeError) {
    if err.is_recoverable() {
        tracing::debug!(stage, error = %err, "degenerate input");
    } else {
        tracing::error!(stage, error = %err, "stage failed");
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizeError::empty_input("no text provided");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("no text provided"));

        let err = SummarizeError::insufficient_content(2, 3);
        assert!(err.to_string().contains("2 sentence(s)"));
        assert!(err.to_string().contains("more than 3"));

        let err = SummarizeError::unexpected("rank", "score vector length mismatch");
        assert!(err.to_string().contains("in rank"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(SummarizeError::empty_input("x").is_recoverable());
        assert!(SummarizeError::insufficient_content(1, 3).is_recoverable());
        assert!(SummarizeError::unavailable_tokenizer("linguistic").is_recoverable());
        assert!(!SummarizeError::invalid_config("ratio").is_recoverable());
        assert!(!SummarizeError::unexpected("select", "boom").is_recoverable());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummarizeError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SummarizeError::Serialization { .. }));
    }
}
