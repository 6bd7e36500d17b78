use crate::domain::cards::article_card::article_card;
use crate::domain::external_apis::devto::DevToApi;
use crate::domain::models::feed::{Card, FeedPanel, Notice};
use crate::error::FeedError;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Dev.to account whose articles are listed
pub const DEVTO_USERNAME: &str = "fidelisesq";

/// Number of articles requested
pub const ARTICLES_PER_PAGE: u8 = 12;

pub const ARTICLES_CONTAINER_ID: &str = "blog-posts";

pub const NO_ARTICLES: Notice = Notice {
    class: "no-articles",
    text: "No articles found.",
};

pub const ARTICLES_ERROR: Notice = Notice {
    class: "error",
    text: "Failed to load articles. Please try again later.",
};

#[derive(Debug, Clone, Default)]
pub struct LoadArticleFeedUseCaseInput {}

#[derive(Serialize, Debug, Clone)]
pub struct LoadArticleFeedUseCaseOutput {
    pub panel: FeedPanel,
}

#[async_trait]
pub trait LoadArticleFeedUseCase {
    async fn execute(&self, input: LoadArticleFeedUseCaseInput) -> LoadArticleFeedUseCaseOutput;
}

pub struct LoadArticleFeedInteractor<D: DevToApi + Send + Sync + 'static> {
    devto_api: Arc<D>,
}

impl<D: DevToApi + Send + Sync + 'static> LoadArticleFeedInteractor<D> {
    pub fn new(devto_api: Arc<D>) -> Self {
        Self { devto_api }
    }

    async fn load_cards(&self) -> Result<Vec<Card>, FeedError> {
        let articles = self
            .devto_api
            .fetch_articles(DEVTO_USERNAME, ARTICLES_PER_PAGE)
            .await?;
        tracing::info!("Fetched {} articles", articles.len());

        // Source order is the display order.
        articles.iter().map(article_card).collect()
    }
}

#[async_trait]
impl<D: DevToApi + Send + Sync + 'static> LoadArticleFeedUseCase for LoadArticleFeedInteractor<D> {
    #[tracing::instrument(name = "LoadArticleFeedInteractor::execute", skip_all)]
    async fn execute(&self, _input: LoadArticleFeedUseCaseInput) -> LoadArticleFeedUseCaseOutput {
        let mut panel = FeedPanel::new(ARTICLES_CONTAINER_ID);
        let result = self.load_cards().await;
        panel.hide_loading();

        match result {
            Ok(cards) if cards.is_empty() => {
                tracing::warn!("No articles found");
                panel.replace_with(NO_ARTICLES);
            }
            Ok(cards) => {
                for card in cards {
                    panel.append(card);
                }
            }
            Err(e) => {
                tracing::error!("Error fetching articles: {:?}", e);
                panel.replace_with(ARTICLES_ERROR);
            }
        }

        LoadArticleFeedUseCaseOutput { panel }
    }
}
