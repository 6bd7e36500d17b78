use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(rename = "readingTimeMinutes")]
    pub reading_time_minutes: u32,
    pub tags: Vec<String>,
    #[serde(rename = "reactionsCount")]
    pub reactions_count: u64,
    #[serde(rename = "commentsCount")]
    pub comments_count: u64,
    pub url: String,
}
