//! Heuristic credibility scoring for web results.
//!
//! Pure and deterministic: domain suffix, a fixed outlet allowlist,
//! transport scheme, and publication recency each contribute a bonus on
//! top of a base of 50, clamped to [0, 100]. This is a trust estimate,
//! not a measured accuracy metric.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::WebResult;

/// Starting score before any bonus.
const BASE_SCORE: i32 = 50;

/// News outlets that receive the trusted-outlet bonus.
const TRUSTED_OUTLETS: &[&str] = &[
    "nytimes.com",
    "bbc.com",
    "reuters.com",
    "apnews.com",
    "theguardian.com",
    "wsj.com",
];

/// Score a result against the current wall clock.
///
/// Delegates to [`score_at`]; recency bonuses are measured from now.
pub fn score(result: &WebResult) -> u8 {
    score_at(result, Utc::now())
}

/// Score a result against an explicit reference time.
///
/// Bonuses: `+25` academic suffix, `+30` government suffix, `+20`
/// trusted outlet, `+15` encyclopedia, `+5` secure transport, `+10`
/// published under 30 days before `now` (else `+5` under 90 days).
/// Additive; clamped to [0, 100].
pub fn score_at(result: &WebResult, now: DateTime<Utc>) -> u8 {
    let mut score = BASE_SCORE;
    let domain = result.display_link.to_lowercase();

    if domain.ends_with(".edu") {
        score += 25;
    }
    if domain.ends_with(".gov") {
        score += 30;
    }
    if TRUSTED_OUTLETS.iter().any(|site| domain.contains(site)) {
        score += 20;
    }
    if domain.contains("wikipedia.org") {
        score += 15;
    }
    if result.link.starts_with("https://") {
        score += 5;
    }
    if let Some(days) = result
        .published_date
        .as_deref()
        .and_then(parse_published)
        .map(|published| days_between(published, now))
    {
        if days < 30.0 {
            score += 10;
        } else if days < 90.0 {
            score += 5;
        }
    }

    score.clamp(0, 100) as u8
}

/// Parse a provider-supplied publication date.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything
/// else earns no recency bonus.
fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn days_between(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    now.signed_duration_since(published).num_seconds() as f64 / 86_400.0
}
