use crate::application::use_cases::load_article_feed::{
    LoadArticleFeedUseCase, LoadArticleFeedUseCaseInput,
};
use crate::application::use_cases::load_repository_feed::{
    LoadRepositoryFeedUseCase, LoadRepositoryFeedUseCaseInput,
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Structure to hold application state (AppState)
#[derive(Clone)]
pub struct AppState {
    pub article_feed: Arc<dyn LoadArticleFeedUseCase + Send + Sync>,
    pub repository_feed: Arc<dyn LoadRepositoryFeedUseCase + Send + Sync>,
}

#[derive(Serialize, Debug)]
pub struct FragmentsResponse {
    pub articles: String,
    pub projects: String,
}

#[axum::debug_handler]
pub async fn articles_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    let output = state
        .article_feed
        .execute(LoadArticleFeedUseCaseInput::default())
        .await;
    Html(output.panel.to_html())
}

#[axum::debug_handler]
pub async fn projects_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    let output = state
        .repository_feed
        .execute(LoadRepositoryFeedUseCaseInput::default())
        .await;
    Html(output.panel.to_html())
}

/// Loads both feeds concurrently; neither waits on the other.
#[axum::debug_handler]
pub async fn all_fragments(State(state): State<Arc<AppState>>) -> Json<FragmentsResponse> {
    let (articles, projects) = tokio::join!(
        state
            .article_feed
            .execute(LoadArticleFeedUseCaseInput::default()),
        state
            .repository_feed
            .execute(LoadRepositoryFeedUseCaseInput::default()),
    );
    Json(FragmentsResponse {
        articles: articles.panel.to_html(),
        projects: projects.panel.to_html(),
    })
}

#[tracing::instrument(name = "health_check")]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fragments", get(all_fragments))
        .route("/fragments/articles", get(articles_fragment))
        .route("/fragments/projects", get(projects_fragment))
        .route("/health", get(health_check))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
