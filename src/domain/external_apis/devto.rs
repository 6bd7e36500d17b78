use crate::domain::models::article::ArticleSummary;
use crate::error::FeedError;
use async_trait::async_trait;

#[async_trait]
pub trait DevToApi {
    async fn fetch_articles(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<ArticleSummary>, FeedError>;
}
