use crate::domain::models::repository::RepositorySummary;
use crate::error::FeedError;
use async_trait::async_trait;

#[async_trait]
pub trait GitHubApi {
    /// Lists a user's public repositories, most recently updated first.
    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, FeedError>;
}
