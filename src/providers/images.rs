//! Image-result branch. Soft-failing: any error yields an empty list.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::ImageResult;

use super::payload::{SearchItem, SearchPayload};

/// Fetch image results for `query`, swallowing every failure.
///
/// The search can proceed without images, so a transport error, a
/// non-2xx status, or an undecodable payload all degrade to `vec![]`
/// with a warning.
pub(crate) async fn fetch_images(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Vec<ImageResult> {
    match try_fetch_images(http, config, query).await {
        Ok(images) => {
            tracing::debug!(count = images.len(), "image results normalized");
            images
        }
        Err(err) => {
            tracing::warn!(error = %err, "image search failed");
            Vec::new()
        }
    }
}

async fn try_fetch_images(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Result<Vec<ImageResult>, SearchError> {
    let num = config.max_image_results.to_string();
    let response = http
        .get(&config.search_endpoint)
        .query(&[
            ("key", config.search_api_key.as_str()),
            ("cx", config.engine_id.as_str()),
            ("q", query),
            ("searchType", "image"),
            ("num", num.as_str()),
        ])
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("image search request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("image search HTTP error: {e}")))?;

    let payload: SearchPayload = response
        .json()
        .await
        .map_err(|e| SearchError::Provider(format!("malformed image payload: {e}")))?;

    Ok(normalize_image_payload(payload, config.max_image_results))
}

/// Map a decoded payload into at most `max_results` image records.
pub(crate) fn normalize_image_payload(
    payload: SearchPayload,
    max_results: usize,
) -> Vec<ImageResult> {
    payload
        .items
        .into_iter()
        .take(max_results)
        .map(SearchItem::into_image_result)
        .collect()
}
