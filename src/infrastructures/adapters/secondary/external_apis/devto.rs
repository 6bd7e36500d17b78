use super::{parse_timestamp, read_json};
use crate::domain::external_apis::devto::DevToApi;
use crate::domain::models::article::ArticleSummary;
use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
struct DevToArticleResponse {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    cover_image: Option<String>,
    published_at: String,
    reading_time_minutes: u32,
    // The listing endpoint returns tags as an array; single-article
    // endpoints use a comma separated string instead.
    #[serde(default)]
    tag_list: Vec<String>,
    public_reactions_count: u64,
    comments_count: u64,
    url: String,
}

pub struct DevToApiAdapter {
    client: Client,
    base_url: String,
}

impl DevToApiAdapter {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DevToApi for DevToApiAdapter {
    #[tracing::instrument(name = "DevToApiAdapter::fetch_articles", skip(self))]
    async fn fetch_articles(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<ArticleSummary>, FeedError> {
        let url = format!(
            "{}/api/articles?username={}&per_page={}",
            self.base_url, username, per_page
        );

        let response = self.client.get(&url).send().await?;
        let response_items: Vec<DevToArticleResponse> = read_json(response).await?;

        response_items
            .into_iter()
            .map(|article_res| {
                let published_at =
                    parse_timestamp(&article_res.title, "published_at", &article_res.published_at)?;

                Ok(ArticleSummary {
                    title: article_res.title,
                    description: article_res.description,
                    cover_image: article_res.cover_image.filter(|c| !c.is_empty()),
                    published_at,
                    reading_time_minutes: article_res.reading_time_minutes,
                    tags: article_res.tag_list,
                    reactions_count: article_res.public_reactions_count,
                    comments_count: article_res.comments_count,
                    url: article_res.url,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructures::adapters::secondary::external_apis::test_server::{
        Canned, serve,
    };

    const ARTICLES_JSON: &str = r#"[
        {
            "type_of": "article",
            "id": 1,
            "title": "Hosting a static site on S3",
            "description": "CloudFront, ACM and Route 53",
            "cover_image": null,
            "published_at": "2024-05-02T08:15:00Z",
            "reading_time_minutes": 6,
            "tag_list": ["aws", "s3", "cloudfront", "devops"],
            "public_reactions_count": 17,
            "comments_count": 3,
            "url": "https://dev.to/fidelisesq/hosting-a-static-site-on-s3"
        },
        {
            "title": "Untitled draft",
            "published_at": "2024-04-01T00:00:00Z",
            "reading_time_minutes": 1,
            "public_reactions_count": 0,
            "comments_count": 0,
            "url": "https://dev.to/fidelisesq/untitled"
        }
    ]"#;

    #[tokio::test]
    async fn test_fetch_articles_maps_fields() {
        let server = serve(Canned::json(ARTICLES_JSON)).await;
        let articles = DevToApiAdapter::new(Client::new(), server.base_url())
            .fetch_articles("fidelisesq", 12)
            .await
            .unwrap();

        assert_eq!(articles.len(), 2);
        let first = &articles[0];
        assert_eq!(first.title, "Hosting a static site on S3");
        assert_eq!(first.cover_image, None);
        assert_eq!(first.tags.len(), 4);
        assert_eq!(first.reactions_count, 17);
        assert_eq!(first.published_at.to_rfc3339(), "2024-05-02T08:15:00+00:00");

        let second = &articles[1];
        assert_eq!(second.description, None);
        assert!(second.tags.is_empty());

        assert_eq!(
            server.last_request().unwrap().path_and_query,
            "/api/articles?username=fidelisesq&per_page=12"
        );
    }

    #[tokio::test]
    async fn test_html_body_is_malformed() {
        let server = serve(Canned::json("<html>maintenance</html>")).await;
        let err = DevToApiAdapter::new(Client::new(), server.base_url())
            .fetch_articles("fidelisesq", 12)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_malformed() {
        let server = serve(Canned::json(r#"[{"title": "no url"}]"#)).await;
        let err = DevToApiAdapter::new(Client::new(), server.base_url())
            .fetch_articles("fidelisesq", 12)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_transport_failure() {
        let server = serve(Canned::status(503, "[]")).await;
        let err = DevToApiAdapter::new(Client::new(), server.base_url())
            .fetch_articles("fidelisesq", 12)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Transport(_)));
    }
}
