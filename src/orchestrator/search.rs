//! The orchestration pipeline behind [`crate::SearchClient::search`].
//!
//! One pass: validate, fan out the three provider branches, short-circuit
//! on zero web results, run the two generative consumers, score, assemble.
//! The fan-out join never cancels siblings — a web-branch failure still
//! lets the image and video futures settle before the error propagates.

use std::time::Instant;

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::generative::{related, summary};
use crate::providers::{images, videos, web};
use crate::types::{SearchResponse, WebResult};

use super::credibility;

/// Summary used when the web branch returns zero hits.
pub(crate) const NO_RESULTS_SUMMARY: &str =
    "No results found for your query. Try different keywords.";

pub(crate) async fn run_search(
    client: &SearchClient,
    query: &str,
) -> Result<SearchResponse, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let started = Instant::now();
    let http = client.http();
    let config = client.config();

    tracing::trace!(query, "search started");

    // Step 1: the three source branches, awaited together. `join!` polls
    // all futures to completion, so the soft branches settle even when
    // the web branch errors.
    let (web_results, image_results, video_results) = futures::join!(
        web::fetch_web_results(http, config, query),
        images::fetch_images(http, config, query),
        videos::fetch_videos(http, config, query),
    );
    let web_results = web_results?;

    // Short-circuit: no web hits means no generative calls at all.
    if web_results.is_empty() {
        tracing::debug!(query, "no web results, skipping generation");
        return Ok(SearchResponse {
            results: Vec::new(),
            ai_summary: NO_RESULTS_SUMMARY.to_owned(),
            query: query.to_owned(),
            total_results: 0,
            images: image_results,
            videos: video_results,
            related_questions: Vec::new(),
            search_time_ms: elapsed_ms(started),
        });
    }

    // Step 2: summary and related questions, computed concurrently from
    // the unscored results.
    let (ai_summary, related_questions) = futures::join!(
        summary::generate_summary(http, config, query, &web_results),
        related::generate_related_questions(http, config, query),
    );

    // Step 3: credibility enrichment.
    let results: Vec<WebResult> = web_results
        .into_iter()
        .map(|result| {
            let score = credibility::score(&result);
            WebResult {
                credibility_score: Some(score),
                ..result
            }
        })
        .collect();

    let response = SearchResponse {
        total_results: results.len(),
        results,
        ai_summary,
        query: query.to_owned(),
        images: image_results,
        videos: video_results,
        related_questions,
        search_time_ms: elapsed_ms(started),
    };

    tracing::debug!(
        query,
        total = response.total_results,
        elapsed_ms = response.search_time_ms,
        "search finished"
    );
    Ok(response)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn test_client() -> SearchClient {
        SearchClient::new(SearchConfig::new("test-key", "test-key"))
            .expect("client should build")
    }

    #[tokio::test]
    async fn empty_query_rejected_synchronously() {
        let client = test_client();
        let err = run_search(&client, "").await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }

    #[tokio::test]
    async fn whitespace_query_rejected_synchronously() {
        let client = test_client();
        let err = run_search(&client, "   \t  ").await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }

    #[test]
    fn no_results_summary_is_stable() {
        assert_eq!(
            NO_RESULTS_SUMMARY,
            "No results found for your query. Try different keywords."
        );
    }
}
