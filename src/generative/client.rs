//! Request/response plumbing for the generative-text endpoint.
//!
//! Sends a single prompt as a structured `generateContent` POST and
//! returns the first candidate's text. Callers own the degradation
//! policy; this module only reports what happened.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::providers::provider_error_message;

/// Generation parameters sent alongside the prompt.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Default, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Send `prompt` to the generative endpoint and return the candidate
/// text verbatim.
///
/// Issues exactly one request; no retries.
///
/// # Errors
///
/// [`SearchError::Http`] on transport failure, [`SearchError::Provider`]
/// on a non-2xx status, an undecodable payload, or a response missing
/// the expected text field.
pub(crate) async fn generate(
    http: &reqwest::Client,
    config: &SearchConfig,
    prompt: &str,
    generation: GenerationConfig,
) -> Result<String, SearchError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        config.generative_endpoint.trim_end_matches('/'),
        config.model
    );
    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: generation,
    };

    let response = http
        .post(&url)
        .query(&[("key", config.generative_api_key.as_str())])
        .json(&body)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("generative request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::Provider(format!(
            "generative endpoint HTTP {}: {}",
            status.as_u16(),
            provider_error_message(&body)
        )));
    }

    let payload: GenerateResponse = response
        .json()
        .await
        .map_err(|e| SearchError::Provider(format!("malformed generative payload: {e}")))?;

    payload
        .into_first_text()
        .ok_or_else(|| SearchError::Provider("generative response missing candidate text".into()))
}
