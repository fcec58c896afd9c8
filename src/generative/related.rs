//! Related follow-up question generation.
//!
//! The generator is asked for freestanding questions, one per line.
//! Parsing follows fixed literal rules: strip leading ordinal and
//! bullet markers, drop lines of 10 characters or fewer, keep at most
//! five in generator order. Any failure yields an empty list; this
//! branch is never fatal.

use crate::config::SearchConfig;

use super::client::{self, GenerationConfig};

/// Upper bound on returned questions.
const MAX_QUESTIONS: usize = 5;

/// Lines at or below this length are discarded as noise.
const MIN_QUESTION_LEN: usize = 10;

const RELATED_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.9,
    max_output_tokens: 200,
    top_p: None,
};

/// Generate up to five follow-up questions for `query`.
///
/// Never fails: any generative error degrades to an empty list with a
/// warning.
pub(crate) async fn generate_related_questions(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Vec<String> {
    let prompt = build_related_prompt(query);
    match client::generate(http, config, &prompt, RELATED_GENERATION).await {
        Ok(text) => parse_questions(&text),
        Err(err) => {
            tracing::warn!(error = %err, "related question generation failed");
            Vec::new()
        }
    }
}

/// Build the instruction prompt from the query alone.
pub(crate) fn build_related_prompt(query: &str) -> String {
    format!(
        "Based on the search query \"{query}\", generate 5 related follow-up questions \
         that users might want to explore.\n\n\
         Make them:\n\
         - Specific and actionable\n\
         - Naturally flowing from the original query\n\
         - Diverse in perspective\n\n\
         Return ONLY the questions, one per line, without numbering."
    )
}

/// Parse generator output into clean question lines.
pub(crate) fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_list_marker)
        .filter(|line| line.len() > MIN_QUESTION_LEN)
        .map(str::to_owned)
        .take(MAX_QUESTIONS)
        .collect()
}

/// Strip one leading ordinal (`1.`, `2)`) or bullet (`-`, `•`, `*`)
/// marker from a line. Digits embedded later in the line are left
/// alone.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();

    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() < line.len() {
        if let Some(rest) = after_digits
            .strip_prefix('.')
            .or_else(|| after_digits.strip_prefix(')'))
        {
            return rest.trim_start();
        }
        // Leading digits without a separator belong to the question itself.
        return line;
    }

    for marker in ['-', '\u{2022}', '*'] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }
    line
}
