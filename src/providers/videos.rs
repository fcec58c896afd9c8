//! Video-result branch. Soft-failing: any error yields an empty list.
//!
//! The provider has no dedicated video search, so the query is suffixed
//! with the literal word `video` and the hits are filtered to links on
//! known video hosts or carrying embedded video metadata. Thumbnails
//! resolve through a fixed fallback chain ending in a generic
//! placeholder.

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::VideoResult;

use super::payload::{SearchItem, SearchPayload};

/// Domains whose links are recognisably video pages.
const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "vimeo.com", "dailymotion.com"];

/// Shown when no thumbnail can be resolved for a video hit.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/320x180?text=Video";

/// Fetch video results for `query`, swallowing every failure.
pub(crate) async fn fetch_videos(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Vec<VideoResult> {
    match try_fetch_videos(http, config, query).await {
        Ok(videos) => {
            tracing::debug!(count = videos.len(), "video results normalized");
            videos
        }
        Err(err) => {
            tracing::warn!(error = %err, "video search failed");
            Vec::new()
        }
    }
}

async fn try_fetch_videos(
    http: &reqwest::Client,
    config: &SearchConfig,
    query: &str,
) -> Result<Vec<VideoResult>, SearchError> {
    let video_query = format!("{query} video");
    let num = config.max_video_results.to_string();
    let response = http
        .get(&config.search_endpoint)
        .query(&[
            ("key", config.search_api_key.as_str()),
            ("cx", config.engine_id.as_str()),
            ("q", video_query.as_str()),
            ("num", num.as_str()),
        ])
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("video search request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("video search HTTP error: {e}")))?;

    let payload: SearchPayload = response
        .json()
        .await
        .map_err(|e| SearchError::Provider(format!("malformed video payload: {e}")))?;

    Ok(normalize_video_payload(payload, config.max_video_results))
}

/// Filter a decoded payload to video hits and map at most `max_results`
/// of them into records.
pub(crate) fn normalize_video_payload(
    payload: SearchPayload,
    max_results: usize,
) -> Vec<VideoResult> {
    payload
        .items
        .into_iter()
        .filter(is_video_item)
        .take(max_results)
        .map(into_video_result)
        .collect()
}

/// A hit counts as a video when its link is on a known video host or
/// its pagemap carries embedded video metadata.
fn is_video_item(item: &SearchItem) -> bool {
    let link = item
        .link
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    VIDEO_HOSTS.iter().any(|host| link.contains(host))
        || item
            .pagemap
            .as_ref()
            .is_some_and(|p| !p.videoobject.is_empty())
}

fn into_video_result(item: SearchItem) -> VideoResult {
    let link = item.link.unwrap_or_default();
    let pagemap = item.pagemap.unwrap_or_default();

    // Thumbnail fallback chain: provider thumbnail, embedded video
    // thumbnail, preview image, derived video-host thumbnail, placeholder.
    let thumbnail = pagemap
        .cse_thumbnail
        .first()
        .and_then(|i| i.src.clone())
        .or_else(|| {
            pagemap
                .videoobject
                .first()
                .and_then(|v| v.thumbnailurl.clone())
        })
        .or_else(|| pagemap.cse_image.first().and_then(|i| i.src.clone()))
        .or_else(|| youtube_thumbnail(&link))
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_owned());

    VideoResult {
        thumbnail,
        title: item.title.unwrap_or_else(|| "Video".to_owned()),
        source: item
            .display_link
            .unwrap_or_else(|| "Unknown source".to_owned()),
        duration: pagemap.videoobject.first().and_then(|v| v.duration.clone()),
        link,
    }
}

/// Derive a thumbnail URL from a YouTube-shaped link.
pub fn youtube_thumbnail(link: &str) -> Option<String> {
    let id = youtube_video_id(link)?;
    Some(format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"))
}

/// Extract the 11-character video identifier from a YouTube link.
///
/// Recognises `youtu.be/{id}`, `youtube.com/watch?v={id}`, and the
/// `/embed/`, `/v/`, `/e/`, and `/shorts/` path shapes.
pub fn youtube_video_id(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    let candidate = if host == "youtu.be" || host.ends_with(".youtu.be") {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_owned)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .or_else(|| {
                let segments: Vec<&str> = parsed.path_segments()?.collect();
                match segments.as_slice() {
                    ["embed", id, ..] | ["v", id, ..] | ["e", id, ..] | ["shorts", id, ..] => {
                        Some((*id).to_owned())
                    }
                    _ => None,
                }
            })
    } else {
        None
    };

    candidate.filter(|id| {
        id.len() == 11
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}
