//! Shared HTTP client construction for provider requests.
//!
//! One [`reqwest::Client`] is built per [`crate::SearchClient`] and
//! reused across every provider call. No request timeout is set here:
//! a hung upstream call is bounded only by the transport's own
//! behaviour, and callers that need to abandon stale work use the
//! cancellable search variant instead.

use crate::error::SearchError;

/// User-Agent sent with every provider request.
const USER_AGENT: &str = concat!("ghost-search/", env!("CARGO_PKG_VERSION"));

/// Build the [`reqwest::Client`] shared by all provider branches.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub(crate) fn build_client() -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_succeeds() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("ghost-search/"));
        assert!(USER_AGENT.len() > "ghost-search/".len());
    }
}
