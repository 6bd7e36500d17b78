use super::{parse_timestamp, read_json};
use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::repository::RepositorySummary;
use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
struct GitHubRepositoryResponse {
    name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
    stargazers_count: u64,
    forks_count: u64,
    homepage: Option<String>,
    html_url: String,
    fork: bool,
    created_at: String, // ISO 8601 format, parse during domain model conversion
    updated_at: String,
}

pub struct GitHubApiAdapter {
    client: Client,
    base_url: String,
    github_token: Option<String>,
}

impl GitHubApiAdapter {
    pub fn new(client: Client, base_url: String, github_token: Option<String>) -> Self {
        Self {
            client,
            base_url,
            github_token,
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubApiAdapter {
    #[tracing::instrument(name = "GitHubApiAdapter::fetch_repositories", skip(self))]
    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FeedError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, per_page
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.github_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response_items: Vec<GitHubRepositoryResponse> = read_json(request.send().await?).await?;

        response_items
            .into_iter()
            .map(|repo_res| {
                let created_at = parse_timestamp(&repo_res.name, "created_at", &repo_res.created_at)?;
                let updated_at = parse_timestamp(&repo_res.name, "updated_at", &repo_res.updated_at)?;

                Ok(RepositorySummary {
                    name: repo_res.name,
                    description: repo_res.description.filter(|d| !d.is_empty()),
                    language: repo_res.language,
                    topics: repo_res.topics,
                    stars_count: repo_res.stargazers_count,
                    forks_count: repo_res.forks_count,
                    homepage: repo_res.homepage.filter(|h| !h.is_empty()),
                    html_url: repo_res.html_url,
                    fork: repo_res.fork,
                    created_at,
                    updated_at,
                })
            })
            .collect()
    }
}
