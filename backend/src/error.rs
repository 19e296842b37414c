use thiserror::Error;

/// Failures of a single analysis request.
///
/// Everything except `Configuration` is request-scoped: the HTTP layer turns it
/// into a 400 response and the process keeps serving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Video with ID {0} not found")]
    NotFound(String),

    #[error("API error: check your API key or quota ({0})")]
    AuthOrQuota(String),

    #[error("YouTube API error: {0}")]
    Upstream(String),
}

impl AnalyzerError {
    /// True for errors caused by the submitted input or the provider's answer,
    /// as opposed to a broken deployment.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AnalyzerError::Configuration(_))
    }
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalyzerError::Upstream(format!("request timed out: {e}"))
        } else {
            AnalyzerError::Upstream(format!("failed to reach the provider: {e}"))
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::Upstream(format!("unexpected response format: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_configuration_errors_are_fatal() {
        assert!(!AnalyzerError::Configuration("missing key".into()).is_recoverable());
        assert!(AnalyzerError::InvalidInput("bad".into()).is_recoverable());
        assert!(AnalyzerError::NotFound("abcdefghijk".into()).is_recoverable());
        assert!(AnalyzerError::AuthOrQuota("quotaExceeded".into()).is_recoverable());
        assert!(AnalyzerError::Upstream("boom".into()).is_recoverable());
    }

    #[test]
    fn not_found_message_names_the_video() {
        let err = AnalyzerError::NotFound("dQw4w9WgXcQ".to_string());
        assert_eq!(err.to_string(), "Video with ID dQw4w9WgXcQ not found");
    }

    #[test]
    fn json_errors_become_upstream_errors() {
        let err: AnalyzerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AnalyzerError::Upstream(_)));
    }
}
