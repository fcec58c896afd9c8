//! Web-result branch — the only fatal branch of the fan-out.
//!
//! A non-2xx status or an undecodable payload aborts the whole search;
//! HTTP 429 is mapped to the distinguishable rate-limit error. An empty
//! `items` array is a valid zero-hit response, not an error.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::WebResult;

use super::payload::{SearchItem, SearchPayload};
use super::provider_error_message;

/// Fetch and normalize web results for `query`.
///
/// Issues exactly one request; no retries.
///
/// # Errors
///
/// - [`SearchError::Http`] when the transport fails.
/// - [`SearchError::RateLimited`] when the provider returns HTTP 429.
/// - [`SearchError::Provider`] on any other non-2xx status or a
///   malformed payload.
pub(crate) async fn fetch_web_results(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Result<Vec<WebResult>, SearchError> {
    tracing::trace!(query, "web search");

    let response = http
        .get(&config.search_endpoint)
        .query(&[
            ("key", config.search_api_key.as_str()),
            ("cx", config.engine_id.as_str()),
            ("q", query),
        ])
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("web search request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::RateLimited(
                "search provider returned HTTP 429".into(),
            ));
        }
        return Err(SearchError::Provider(format!(
            "search failed with HTTP {}: {}",
            status.as_u16(),
            provider_error_message(&body)
        )));
    }

    let payload: SearchPayload = response
        .json()
        .await
        .map_err(|e| SearchError::Provider(format!("malformed search payload: {e}")))?;

    let results = normalize_web_payload(payload, config.max_web_results);
    tracing::debug!(count = results.len(), "web results normalized");
    Ok(results)
}

/// Map a decoded payload into at most `max_results` records.
///
/// Extracted as a separate function for testability with synthetic
/// payloads.
pub(crate) fn normalize_web_payload(payload: SearchPayload, max_results: usize) -> Vec<WebResult> {
    payload
        .items
        .into_iter()
        .take(max_results)
        .map(SearchItem::into_web_result)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with_items(count: usize) -> SearchPayload {
        let items: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Result {i}"),
                    "link": format!("https://example{i}.com/page"),
                    "snippet": format!("Snippet {i}"),
                    "displayLink": format!("example{i}.com")
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({ "items": items }))
            .expect("payload should deserialize")
    }

    #[test]
    fn normalization_preserves_provider_order() {
        let results = normalize_web_payload(payload_with_items(3), 10);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Result 0");
        assert_eq!(results[2].title, "Result 2");
    }

    #[test]
    fn normalization_caps_at_max_results() {
        let results = normalize_web_payload(payload_with_items(15), 10);
        assert_eq!(results.len(), 10);
    }

    #[test]
    fn empty_payload_yields_empty_results() {
        let payload = SearchPayload::default();
        assert!(normalize_web_payload(payload, 10).is_empty());
    }

    #[test]
    fn scores_start_unassigned() {
        let results = normalize_web_payload(payload_with_items(1), 10);
        assert!(results[0].credibility_score.is_none());
    }
}
