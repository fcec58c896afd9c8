//! AI summary generation with a deterministic local fallback.
//!
//! The prompt carries the top results as a context block and asks for a
//! structured answer with `[Source X]` citation markers. Any failure of
//! the generative call degrades to a template built from the top three
//! results; the fallback performs no I/O and is non-empty whenever at
//! least one result exists.

use crate::config::SearchConfig;
use crate::types::WebResult;

use super::client::{self, GenerationConfig};

/// How many results feed the generative context block.
const CONTEXT_RESULTS: usize = 8;

/// How many results feed the local fallback summary.
const FALLBACK_RESULTS: usize = 3;

const SUMMARY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 600,
    top_p: Some(0.95),
};

/// Generate a prose summary of `results` for `query`.
///
/// Never fails: generative errors degrade to [`fallback_summary`], and
/// an empty result list short-circuits to a static string without
/// touching the network.
pub(crate) async fn generate_summary(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
    results: &[WebResult],
) -> String {
    if results.is_empty() {
        return "No search results found to summarize.".to_owned();
    }

    let prompt = build_summary_prompt(query, results);
    match client::generate(http, config, &prompt, SUMMARY_GENERATION).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "summary generation failed, using fallback");
            fallback_summary(query, results)
        }
    }
}

/// Build the instruction prompt with a context block from the top
/// results.
pub(crate) fn build_summary_prompt(query: &str, results: &[WebResult]) -> String {
    let context = results
        .iter()
        .take(CONTEXT_RESULTS)
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Source {}: {}\n{}\nURL: {}",
                i + 1,
                r.title,
                r.snippet,
                r.display_link
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are an expert research assistant. Analyze these search results for \"{query}\" \
         and provide a comprehensive, well-structured answer.\n\n\
         {context}\n\n\
         Provide:\n\
         1. A clear, direct answer (2-3 sentences)\n\
         2. Key points (3-4 bullet points with \u{2022} prefix)\n\
         3. Important context or nuances\n\n\
         Format your response clearly with proper spacing and cite sources when relevant \
         using [Source X] notation."
    )
}

/// Deterministic local summary from the top results.
///
/// Used whenever the generative call fails; contains the query and the
/// top results' titles, domains, and snippets under a fixed header.
pub(crate) fn fallback_summary(query: &str, results: &[WebResult]) -> String {
    let body = results
        .iter()
        .take(FALLBACK_RESULTS)
        .enumerate()
        .map(|(i, r)| format!("{}. {} ({})\n   {}", i + 1, r.title, r.display_link, r.snippet))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Based on the search results for \"{query}\":\n\n{body}")
}
