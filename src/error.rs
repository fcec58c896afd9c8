//! Error types for the ghost-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.
//!
//! Only upfront validation, configuration, and the web-result fetch are
//! allowed to surface as errors; every other provider failure degrades
//! to an empty or locally synthesized value inside its own branch.

/// Errors that can occur during a search operation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query was empty or whitespace-only. Rejected before any I/O.
    #[error("please enter a search query")]
    EmptyQuery,

    /// Invalid or missing configuration (e.g. an absent API key).
    /// Rejected before any network attempt.
    #[error("config error: {0}")]
    Config(String),

    /// The web-result provider returned HTTP 429.
    #[error("search rate limit exceeded: {0}")]
    RateLimited(String),

    /// The web-result provider returned a non-2xx status or a payload
    /// that could not be decoded.
    #[error("search provider error: {0}")]
    Provider(String),

    /// A transport-level HTTP failure on the fatal web-result branch.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A cancellable search was cancelled before completing.
    #[error("search cancelled")]
    Cancelled,
}

/// Convenience type alias for ghost-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_query() {
        let err = SearchError::EmptyQuery;
        assert_eq!(err.to_string(), "please enter a search query");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("search API key is missing".into());
        assert_eq!(err.to_string(), "config error: search API key is missing");
    }

    #[test]
    fn display_rate_limited_mentions_rate_limit() {
        let err = SearchError::RateLimited("provider returned HTTP 429".into());
        assert!(err.to_string().contains("rate limit"));
    }

    #[test]
    fn display_provider() {
        let err = SearchError::Provider("search failed with HTTP 500".into());
        assert_eq!(
            err.to_string(),
            "search provider error: search failed with HTTP 500"
        );
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_cancelled() {
        assert_eq!(SearchError::Cancelled.to_string(), "search cancelled");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
