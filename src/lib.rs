//! # ghost-search
//!
//! Search aggregation and AI enrichment pipeline for the Ghost search
//! engine. This crate is the engine behind the search box: it fans one
//! query out to a keyed web/image/video search provider, normalizes the
//! provider payloads into common record types, scores web results with
//! a credibility heuristic, asks a generative-text provider for a
//! summary and follow-up questions, and assembles everything into one
//! [`SearchResponse`].
//!
//! ## Design
//!
//! - The three source fetches run concurrently and settle together;
//!   only the web branch is fatal, and its failure does not cancel the
//!   sibling requests
//! - Generative failures degrade: the summary falls back to a locally
//!   synthesized template, related questions to an empty list
//! - No retries, no internal timeouts, no shared state across calls —
//!   each search is one independent pass
//! - Everything network-facing is injected through [`SearchClient`], so
//!   tests substitute mock servers via endpoint overrides
//!
//! ## Security
//!
//! - API keys never appear in error messages or logs
//! - Search queries are logged only at trace level
//! - This is a library, not a server — no network listeners

pub mod client;
pub mod config;
pub mod error;
pub mod generative;
mod http;
pub mod orchestrator;
pub mod providers;
pub mod types;

pub use client::SearchClient;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use types::{ImageResult, SearchResponse, VideoResult, WebResult};

/// Run one search with a transient client.
///
/// Convenience wrapper for callers that do not keep a [`SearchClient`]
/// around. Validates `config`, performs the full orchestration pass,
/// and returns the assembled response.
///
/// # Errors
///
/// Same as [`SearchClient::search`], plus [`SearchError::Config`] when
/// `config` is invalid.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ghost_search::Result<()> {
/// let config = ghost_search::SearchConfig::from_env()?;
/// let response = ghost_search::search("rust borrow checker", &config).await?;
/// println!("{}", response.ai_summary);
/// for result in &response.results {
///     println!("{}: {}", result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<SearchResponse> {
    let client = SearchClient::new(config.clone())?;
    client.search(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_before_network() {
        let config = SearchConfig::new("", "");
        let result = search("rust", &config).await;
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[tokio::test]
    async fn search_rejects_empty_query() {
        let config = SearchConfig::new("search-key", "gen-key");
        let result = search("   ", &config).await;
        assert!(matches!(result, Err(SearchError::EmptyQuery)));
    }
}
