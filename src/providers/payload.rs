//! Typed intermediate representation of the search provider's JSON.
//!
//! The provider returns deeply nested, mostly-optional JSON. Everything
//! the pipeline consumes is declared here as serde types with defaults,
//! and each branch maps items into the crate's record types through one
//! total normalization function. No field guessing happens outside this
//! module.

use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

use crate::types::{ImageResult, WebResult};

/// Top-level search payload. An absent `items` array means zero hits.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One raw provider hit, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub display_link: Option<String>,
    /// Image-variant metadata (only present on `searchType=image` hits).
    #[serde(default)]
    pub image: Option<ImageInfo>,
    #[serde(default)]
    pub pagemap: Option<PageMap>,
}

/// Metadata attached to image-search hits.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageInfo {
    #[serde(default)]
    pub thumbnail_link: Option<String>,
}

/// Structured page annotations the provider extracts from result pages.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageMap {
    #[serde(default)]
    pub cse_image: Vec<ImageRef>,
    #[serde(default)]
    pub cse_thumbnail: Vec<ImageRef>,
    #[serde(default)]
    pub metatags: Vec<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub videoobject: Vec<VideoObject>,
}

/// A single image reference inside a pagemap.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageRef {
    #[serde(default)]
    pub src: Option<String>,
}

/// Embedded video metadata inside a pagemap.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VideoObject {
    #[serde(default)]
    pub thumbnailurl: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl PageMap {
    /// Look up a string value in the first metatag map.
    pub(crate) fn meta(&self, key: &str) -> Option<&str> {
        self.metatags.first()?.get(key)?.as_str()
    }

    fn first_image(&self) -> Option<&str> {
        self.cse_image.first()?.src.as_deref()
    }

    fn first_thumbnail(&self) -> Option<&str> {
        self.cse_thumbnail.first()?.src.as_deref()
    }
}

impl SearchItem {
    /// Normalize a raw web hit into a [`WebResult`].
    ///
    /// Total: every missing field has a defined substitute. The
    /// publication date is taken from the first metatag map, preferring
    /// `article:published_time`, then `og:updated_time`, then
    /// `datePublished`.
    pub(crate) fn into_web_result(self) -> WebResult {
        let link = self.link.unwrap_or_else(|| "#".to_owned());
        let pagemap = self.pagemap.unwrap_or_default();

        let display_link = self
            .display_link
            .filter(|d| !d.is_empty())
            .or_else(|| host_of(&link))
            .unwrap_or_default();

        let thumbnail = pagemap.first_thumbnail().map(str::to_owned);
        let image = pagemap
            .first_image()
            .or_else(|| pagemap.first_thumbnail())
            .map(str::to_owned);
        let published_date = pagemap
            .meta("article:published_time")
            .or_else(|| pagemap.meta("og:updated_time"))
            .or_else(|| pagemap.meta("datePublished"))
            .map(str::to_owned);

        WebResult {
            title: self.title.unwrap_or_else(|| "Untitled".to_owned()),
            snippet: self
                .snippet
                .unwrap_or_else(|| "No description available".to_owned()),
            display_link,
            image,
            thumbnail,
            published_date,
            credibility_score: None,
            link,
        }
    }

    /// Normalize a raw image hit into an [`ImageResult`].
    pub(crate) fn into_image_result(self) -> ImageResult {
        let link = self.link.unwrap_or_default();
        ImageResult {
            thumbnail: self
                .image
                .and_then(|i| i.thumbnail_link)
                .unwrap_or_else(|| link.clone()),
            title: self.title.unwrap_or_else(|| "Image".to_owned()),
            source: self
                .display_link
                .unwrap_or_else(|| "Unknown source".to_owned()),
            link,
        }
    }
}

/// Host component of a URL, used when the provider omits `displayLink`.
fn host_of(link: &str) -> Option<String> {
    Url::parse(link)
        .ok()?
        .host_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_from_json(json: serde_json::Value) -> SearchItem {
        serde_json::from_value(json).expect("item should deserialize")
    }

    #[test]
    fn full_item_deserializes() {
        let item = item_from_json(serde_json::json!({
            "title": "Rust Programming Language",
            "link": "https://www.rust-lang.org/",
            "snippet": "A language empowering everyone",
            "displayLink": "www.rust-lang.org",
            "pagemap": {
                "cse_thumbnail": [{"src": "https://thumb.example/t.png"}],
                "cse_image": [{"src": "https://img.example/i.png"}],
                "metatags": [{"article:published_time": "2025-07-01T00:00:00Z"}]
            }
        }));

        let result = item.into_web_result();
        assert_eq!(result.title, "Rust Programming Language");
        assert_eq!(result.display_link, "www.rust-lang.org");
        assert_eq!(result.image.as_deref(), Some("https://img.example/i.png"));
        assert_eq!(
            result.thumbnail.as_deref(),
            Some("https://thumb.example/t.png")
        );
        assert_eq!(
            result.published_date.as_deref(),
            Some("2025-07-01T00:00:00Z")
        );
    }

    #[test]
    fn bare_item_normalizes_with_substitutes() {
        let item = item_from_json(serde_json::json!({}));
        let result = item.into_web_result();
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.link, "#");
        assert_eq!(result.snippet, "No description available");
        assert!(result.image.is_none());
        assert!(result.published_date.is_none());
    }

    #[test]
    fn display_link_falls_back_to_host() {
        let item = item_from_json(serde_json::json!({
            "link": "https://docs.example.org/guide/intro"
        }));
        let result = item.into_web_result();
        assert_eq!(result.display_link, "docs.example.org");
    }

    #[test]
    fn image_falls_back_to_thumbnail() {
        let item = item_from_json(serde_json::json!({
            "link": "https://example.com/",
            "pagemap": {
                "cse_thumbnail": [{"src": "https://thumb.example/only.png"}]
            }
        }));
        let result = item.into_web_result();
        assert_eq!(result.image.as_deref(), Some("https://thumb.example/only.png"));
    }

    #[test]
    fn published_date_priority_order() {
        let item = item_from_json(serde_json::json!({
            "link": "https://example.com/",
            "pagemap": {
                "metatags": [{
                    "og:updated_time": "2025-06-01T00:00:00Z",
                    "datePublished": "2025-05-01"
                }]
            }
        }));
        let result = item.into_web_result();
        assert_eq!(
            result.published_date.as_deref(),
            Some("2025-06-01T00:00:00Z")
        );
    }

    #[test]
    fn non_string_metatag_values_are_skipped() {
        let item = item_from_json(serde_json::json!({
            "link": "https://example.com/",
            "pagemap": {
                "metatags": [{"article:published_time": 12345}]
            }
        }));
        let result = item.into_web_result();
        assert!(result.published_date.is_none());
    }

    #[test]
    fn image_result_uses_thumbnail_link() {
        let item = item_from_json(serde_json::json!({
            "title": "A picture",
            "link": "https://images.example/full.jpg",
            "displayLink": "images.example",
            "image": {"thumbnailLink": "https://images.example/thumb.jpg"}
        }));
        let image = item.into_image_result();
        assert_eq!(image.thumbnail, "https://images.example/thumb.jpg");
        assert_eq!(image.source, "images.example");
    }

    #[test]
    fn image_result_thumbnail_falls_back_to_link() {
        let item = item_from_json(serde_json::json!({
            "link": "https://images.example/full.jpg"
        }));
        let image = item.into_image_result();
        assert_eq!(image.thumbnail, "https://images.example/full.jpg");
        assert_eq!(image.title, "Image");
        assert_eq!(image.source, "Unknown source");
    }

    #[test]
    fn missing_items_array_means_empty() {
        let payload: SearchPayload =
            serde_json::from_value(serde_json::json!({"kind": "customsearch#search"}))
                .expect("payload should deserialize");
        assert!(payload.items.is_empty());
    }
}
