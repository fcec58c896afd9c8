//! The public entry point: a configured, reusable search client.
//!
//! A [`SearchClient`] owns the shared HTTP client and configuration;
//! both are injected into the orchestration pipeline so tests can point
//! at mock servers through endpoint overrides. Each search call is
//! fully independent — concurrent calls need no coordination and the
//! client itself is cheap to clone.

use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::SearchResponse;
use crate::{http, orchestrator};

/// A reusable search client bound to one [`SearchConfig`].
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("search_endpoint", &self.config.search_endpoint)
            .field("generative_endpoint", &self.config.generative_endpoint)
            .field("model", &self.config.model)
            .finish()
    }
}

impl SearchClient {
    /// Create a client, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration and
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    /// Configuration problems surface here, before any query is issued.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: http::build_client()?,
            config,
        })
    }

    /// Create a client around an existing [`reqwest::Client`].
    ///
    /// Lets callers share a connection pool or substitute a specially
    /// configured client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration.
    pub fn with_http_client(config: SearchConfig, http: reqwest::Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Run one full search pass for `query`.
    ///
    /// Fans out to the web/image/video branches concurrently, generates
    /// the summary and related questions, scores the web results, and
    /// returns the assembled [`SearchResponse`] with elapsed time.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for empty or whitespace-only input
    ///   (no network call is issued).
    /// - [`SearchError::RateLimited`] when the web-result provider
    ///   returns HTTP 429.
    /// - [`SearchError::Http`] / [`SearchError::Provider`] when the
    ///   web-result branch fails in any other way.
    ///
    /// Image, video, and related-question failures degrade to empty
    /// collections; summary failures degrade to a locally synthesized
    /// fallback. None of them reject the search.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        orchestrator::search::run_search(self, query).await
    }

    /// Like [`SearchClient::search`], but abandoned when `cancel` fires.
    ///
    /// Cancellation drops every in-flight provider request and returns
    /// [`SearchError::Cancelled`]. Callers superseding a stale query
    /// (e.g. the user typed a new one) keep one token per in-flight
    /// search and cancel the old token when issuing the new search.
    pub async fn search_with_cancel(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResponse> {
        tokio::select! {
            // Check cancellation first so an already-superseded query
            // never issues a request.
            biased;
            _ = cancel.cancelled() => Err(SearchError::Cancelled),
            result = self.search(query) => result,
        }
    }
}
