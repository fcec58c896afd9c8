//! Result-source branches for the keyed search provider.
//!
//! One query fans out to three independent requests — web, image, and
//! video — each normalizing the provider payload into the crate's
//! record types. Only the web branch is fatal to the caller; the image
//! and video branches absorb their own failures and yield empty
//! sequences.

pub mod images;
pub(crate) mod payload;
pub mod videos;
pub mod web;

/// Extract a human-readable message from a provider error body.
///
/// Providers wrap errors as `{"error": {"message": "…"}}`; anything
/// else is returned as-is.
pub(crate) fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_error_message_extracted() {
        let body = r#"{"error": {"message": "Quota exceeded", "code": 429}}"#;
        assert_eq!(provider_error_message(body), "Quota exceeded");
    }

    #[test]
    fn plain_body_returned_verbatim() {
        assert_eq!(provider_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn empty_body_returned_verbatim() {
        assert_eq!(provider_error_message(""), "");
    }
}
