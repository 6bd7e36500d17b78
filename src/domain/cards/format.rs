use crate::error::FeedError;
use chrono::{DateTime, Utc};
use reqwest::Url;

pub const FALLBACK_LANGUAGE_COLOR: &str = "#586069";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// "January 5, 2024"
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "Jan 5, 2024"
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Swatch colour for a repository language; unknown or missing languages get
/// the neutral fallback.
pub fn language_color(language: Option<&str>) -> &'static str {
    match language {
        Some("JavaScript") => "#f1e05a",
        Some("Python") => "#3572A5",
        Some("Java") => "#b07219",
        Some("TypeScript") => "#2b7489",
        Some("HTML") => "#e34c26",
        Some("CSS") => "#563d7c",
        Some("Shell") => "#89e051",
        Some("Go") => "#00ADD8",
        Some("Dockerfile") => "#384d54",
        Some("HCL") => "#844FBA",
        Some("YAML") => "#cb171e",
        _ => FALLBACK_LANGUAGE_COLOR,
    }
}

/// Outbound links open in a new browsing context, so only absolute http(s)
/// targets are accepted.
pub fn outbound_link(record: &str, raw: &str) -> Result<String, FeedError> {
    let url = Url::parse(raw)
        .map_err(|e| FeedError::render(record, format!("invalid link {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(html_escape(url.as_str())),
        scheme => Err(FeedError::render(
            record,
            format!("link scheme {scheme} is not allowed"),
        )),
    }
}
