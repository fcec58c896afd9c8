//! Search configuration: provider keys, endpoints, and result caps.
//!
//! [`SearchConfig`] carries everything one orchestration pass needs to
//! reach the two upstream providers. Keys come from the process
//! environment via [`SearchConfig::from_env`]; a missing key is a
//! configuration error surfaced before any network call is attempted.

use crate::error::SearchError;

/// Environment variable holding the search provider API key.
pub const SEARCH_API_KEY_VAR: &str = "GHOST_SEARCH_API_KEY";

/// Environment variable holding the generative-text provider API key.
pub const GENERATIVE_API_KEY_VAR: &str = "GHOST_GEMINI_API_KEY";

/// Environment variable overriding the search-engine identifier.
pub const ENGINE_ID_VAR: &str = "GHOST_ENGINE_ID";

/// The fixed custom-search-engine identifier used when [`ENGINE_ID_VAR`]
/// is not set.
pub const DEFAULT_ENGINE_ID: &str = "17fa9a5ae1f2d4281";

/// Production endpoint of the keyed web/image/video search provider.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Production base URL of the generative-text provider.
pub const DEFAULT_GENERATIVE_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default generative model used for summaries and related questions.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for a [`crate::SearchClient`].
///
/// Construct with [`SearchConfig::new`] or [`SearchConfig::from_env`],
/// then override endpoints with the builder methods when pointing at a
/// mock server in tests.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API key for the search provider.
    pub search_api_key: String,
    /// API key for the generative-text provider.
    pub generative_api_key: String,
    /// Custom-search-engine identifier passed as the `cx` parameter.
    pub engine_id: String,
    /// Full URL of the search endpoint (web, image, and video variants
    /// are distinguished by query parameters).
    pub search_endpoint: String,
    /// Base URL of the generative-text provider.
    pub generative_endpoint: String,
    /// Generative model name.
    pub model: String,
    /// Maximum web results returned per search.
    pub max_web_results: usize,
    /// Maximum image results returned per search.
    pub max_image_results: usize,
    /// Maximum video results returned per search.
    pub max_video_results: usize,
}

impl SearchConfig {
    /// Build a configuration from explicit API keys, with defaults for
    /// everything else.
    pub fn new(search_api_key: impl Into<String>, generative_api_key: impl Into<String>) -> Self {
        Self {
            search_api_key: search_api_key.into(),
            generative_api_key: generative_api_key.into(),
            engine_id: DEFAULT_ENGINE_ID.to_owned(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_owned(),
            generative_endpoint: DEFAULT_GENERATIVE_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            max_web_results: 10,
            max_image_results: 8,
            max_video_results: 6,
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads [`SEARCH_API_KEY_VAR`] and [`GENERATIVE_API_KEY_VAR`]
    /// (both required) and [`ENGINE_ID_VAR`] (optional).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when a required variable is
    /// missing or empty.
    pub fn from_env() -> Result<Self, SearchError> {
        let search_api_key = require_env(SEARCH_API_KEY_VAR)?;
        let generative_api_key = require_env(GENERATIVE_API_KEY_VAR)?;
        let mut config = Self::new(search_api_key, generative_api_key);
        if let Ok(engine_id) = std::env::var(ENGINE_ID_VAR) {
            if !engine_id.trim().is_empty() {
                config.engine_id = engine_id.trim().to_owned();
            }
        }
        Ok(config)
    }

    /// Override the search endpoint (for tests against a mock server).
    #[must_use]
    pub fn with_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    /// Override the generative-provider base URL (for tests against a
    /// mock server).
    #[must_use]
    pub fn with_generative_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.generative_endpoint = endpoint.into();
        self
    }

    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - both API keys must be non-empty
    /// - `engine_id` must be non-empty
    /// - all result caps must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.search_api_key.trim().is_empty() {
            return Err(SearchError::Config("search API key is missing".into()));
        }
        if self.generative_api_key.trim().is_empty() {
            return Err(SearchError::Config("generative API key is missing".into()));
        }
        if self.engine_id.trim().is_empty() {
            return Err(SearchError::Config("engine id is missing".into()));
        }
        if self.max_web_results == 0 || self.max_image_results == 0 || self.max_video_results == 0 {
            return Err(SearchError::Config(
                "result caps must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn require_env(var: &str) -> Result<String, SearchError> {
    let value = std::env::var(var)
        .map_err(|_| SearchError::Config(format!("environment variable is missing: {var}")))?;
    if value.trim().is_empty() {
        return Err(SearchError::Config(format!(
            "environment variable is empty: {var}"
        )));
    }
    Ok(value)
}
