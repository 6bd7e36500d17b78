use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    #[serde(rename = "starsCount")]
    pub stars_count: u64,
    #[serde(rename = "forksCount")]
    pub forks_count: u64,
    pub homepage: Option<String>,
    #[serde(rename = "htmlUrl")]
    pub html_url: String,
    pub fork: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Drops forks and orders the rest newest-created first.
///
/// Whatever order the source returned is discarded here.
pub fn select_showcase(repositories: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    let mut showcase: Vec<RepositorySummary> =
        repositories.into_iter().filter(|repo| !repo.fork).collect();
    showcase.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    showcase
}
