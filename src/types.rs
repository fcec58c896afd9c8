//! Core record types for search results and the aggregate response.

use serde::{Deserialize, Serialize};

/// A single web search hit, normalized from the provider payload.
///
/// Created by the web-result branch, enriched once with a credibility
/// score by the orchestrator, and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result.
    pub link: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
    /// The registrable domain shown alongside the result.
    pub display_link: String,
    /// A representative page image, when the provider supplied one.
    pub image: Option<String>,
    /// A small thumbnail for the result, when available.
    pub thumbnail: Option<String>,
    /// Publication date as supplied by the provider's page metadata.
    pub published_date: Option<String>,
    /// Heuristic trust score in [0, 100], assigned post-fetch.
    pub credibility_score: Option<u8>,
}

/// An image search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    /// The full-size image URL.
    pub link: String,
    /// Thumbnail URL (falls back to the image itself).
    pub thumbnail: String,
    /// The image title.
    pub title: String,
    /// The domain the image was found on.
    pub source: String,
}

/// A video search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResult {
    /// The video page URL.
    pub link: String,
    /// Thumbnail URL, resolved through the fallback chain.
    pub thumbnail: String,
    /// The video title.
    pub title: String,
    /// The hosting domain.
    pub source: String,
    /// Duration string from embedded video metadata, when present.
    pub duration: Option<String>,
}

/// The aggregate response returned to the caller for one query.
///
/// Constructed once per orchestration pass and never mutated afterwards;
/// ownership passes entirely to the caller. Result order is the
/// provider's rank order and is relevance-significant.
///
/// Invariant: `total_results == results.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Scored web results in provider rank order.
    pub results: Vec<WebResult>,
    /// AI-generated (or locally synthesized fallback) summary.
    pub ai_summary: String,
    /// The trimmed query this response answers.
    pub query: String,
    /// Number of web results. Always equals `results.len()`.
    pub total_results: usize,
    /// Image results, empty when the image branch failed.
    pub images: Vec<ImageResult>,
    /// Video results, empty when the video branch failed.
    pub videos: Vec<VideoResult>,
    /// Up to 5 follow-up questions in generator order.
    pub related_questions: Vec<String>,
    /// Wall-clock time for the whole orchestration pass, in milliseconds.
    pub search_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_web_result() -> WebResult {
        WebResult {
            title: "Rust Programming Language".into(),
            link: "https://www.rust-lang.org/".into(),
            snippet: "A language empowering everyone".into(),
            display_link: "www.rust-lang.org".into(),
            image: None,
            thumbnail: None,
            published_date: None,
            credibility_score: None,
        }
    }

    #[test]
    fn web_result_construction() {
        let result = make_web_result();
        assert_eq!(result.display_link, "www.rust-lang.org");
        assert!(result.credibility_score.is_none());
    }

    #[test]
    fn web_result_serde_round_trip() {
        let result = WebResult {
            credibility_score: Some(80),
            published_date: Some("2025-07-01T00:00:00Z".into()),
            ..make_web_result()
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: WebResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.credibility_score, Some(80));
        assert_eq!(decoded.link, "https://www.rust-lang.org/");
    }

    #[test]
    fn video_result_optional_duration() {
        let video = VideoResult {
            link: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into(),
            thumbnail: "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg".into(),
            title: "A video".into(),
            source: "www.youtube.com".into(),
            duration: None,
        };
        assert!(video.duration.is_none());
    }

    #[test]
    fn response_total_matches_results_len() {
        let results = vec![make_web_result(), make_web_result()];
        let response = SearchResponse {
            total_results: results.len(),
            results,
            ai_summary: "summary".into(),
            query: "rust".into(),
            images: vec![],
            videos: vec![],
            related_questions: vec![],
            search_time_ms: 12,
        };
        assert_eq!(response.total_results, response.results.len());
    }
}
