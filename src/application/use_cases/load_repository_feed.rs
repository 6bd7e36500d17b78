use crate::domain::cards::project_card::project_card;
use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::feed::{Card, FeedPanel, Notice};
use crate::domain::models::repository::select_showcase;
use crate::error::FeedError;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// GitHub account whose repositories are listed
pub const GITHUB_USERNAME: &str = "Fidelisesq";

/// Number of repositories requested
pub const REPOSITORIES_PER_PAGE: u8 = 20;

pub const PROJECTS_CONTAINER_ID: &str = "github-projects";

pub const NO_PROJECTS: Notice = Notice {
    class: "no-projects",
    text: "No projects found.",
};

pub const PROJECTS_ERROR: Notice = Notice {
    class: "error",
    text: "Failed to load projects. Please try again later.",
};

#[derive(Debug, Clone, Default)]
pub struct LoadRepositoryFeedUseCaseInput {}

#[derive(Serialize, Debug, Clone)]
pub struct LoadRepositoryFeedUseCaseOutput {
    pub panel: FeedPanel,
}

#[async_trait]
pub trait LoadRepositoryFeedUseCase {
    async fn execute(
        &self,
        input: LoadRepositoryFeedUseCaseInput,
    ) -> LoadRepositoryFeedUseCaseOutput;
}

pub struct LoadRepositoryFeedInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> LoadRepositoryFeedInteractor<G> {
    pub fn new(github_api: Arc<G>) -> Self {
        Self { github_api }
    }

    async fn load_cards(&self) -> Result<Vec<Card>, FeedError> {
        let repositories = self
            .github_api
            .fetch_repositories(GITHUB_USERNAME, REPOSITORIES_PER_PAGE)
            .await?;
        tracing::info!("Fetched {} repositories", repositories.len());

        let showcase = select_showcase(repositories);
        tracing::debug!("{} repositories left after dropping forks", showcase.len());

        showcase.iter().map(project_card).collect()
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> LoadRepositoryFeedUseCase
    for LoadRepositoryFeedInteractor<G>
{
    #[tracing::instrument(name = "LoadRepositoryFeedInteractor::execute", skip_all)]
    async fn execute(
        &self,
        _input: LoadRepositoryFeedUseCaseInput,
    ) -> LoadRepositoryFeedUseCaseOutput {
        let mut panel = FeedPanel::new(PROJECTS_CONTAINER_ID);
        let result = self.load_cards().await;
        panel.hide_loading();

        match result {
            Ok(cards) if cards.is_empty() => {
                tracing::warn!("No projects found");
                panel.replace_with(NO_PROJECTS);
            }
            Ok(cards) => {
                for card in cards {
                    panel.append(card);
                }
            }
            Err(e) => {
                tracing::error!("Error fetching projects: {:?}", e);
                panel.replace_with(PROJECTS_ERROR);
            }
        }

        LoadRepositoryFeedUseCaseOutput { panel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::repository::RepositorySummary;
    use crate::domain::models::repository::fixtures::repository;
    use std::sync::Mutex;
    use std::time::Duration;

    enum Reply {
        Repositories(Vec<RepositorySummary>),
        Unreachable,
        Hang,
    }

    struct FakeGitHubApi {
        reply: Reply,
        calls: Mutex<Vec<(String, u8)>>,
    }

    impl FakeGitHubApi {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl GitHubApi for FakeGitHubApi {
        async fn fetch_repositories(
            &self,
            username: &str,
            per_page: u8,
        ) -> Result<Vec<RepositorySummary>, FeedError> {
            self.calls
                .lock()
                .unwrap()
                .push((username.to_string(), per_page));
            match &self.reply {
                Reply::Repositories(repos) => Ok(repos.clone()),
                Reply::Unreachable => {
                    let err = reqwest::get("not a url").await.unwrap_err();
                    Err(FeedError::Transport(err))
                }
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    async fn run(api: Arc<FakeGitHubApi>) -> FeedPanel {
        LoadRepositoryFeedInteractor::new(api)
            .execute(LoadRepositoryFeedUseCaseInput::default())
            .await
            .panel
    }

    fn keys(panel: &FeedPanel) -> Vec<&str> {
        panel.cards().iter().map(|c| c.key.as_str()).collect()
    }

    #[tokio::test]
    async fn test_requests_fixed_account_and_page_size() {
        let api = FakeGitHubApi::new(Reply::Repositories(vec![]));
        run(api.clone()).await;
        assert_eq!(
            *api.calls.lock().unwrap(),
            vec![("Fidelisesq".to_string(), 20)]
        );
    }

    #[tokio::test]
    async fn test_forks_dropped_and_newest_created_first() {
        let api = FakeGitHubApi::new(Reply::Repositories(vec![
            repository("a", true, (2024, 1, 1)),
            repository("b", false, (2024, 3, 1)),
            repository("c", false, (2024, 2, 1)),
        ]));
        let panel = run(api).await;

        assert!(!panel.loading_visible);
        assert_eq!(keys(&panel), vec!["b", "c"]);
        assert!(!panel.to_html().contains("<h3 class=\"project-title\">a</h3>"));
    }

    #[tokio::test]
    async fn test_only_forks_shows_no_projects() {
        let api = FakeGitHubApi::new(Reply::Repositories(vec![
            repository("a", true, (2024, 1, 1)),
            repository("b", true, (2024, 3, 1)),
        ]));
        let panel = run(api).await;

        assert!(panel.cards().is_empty());
        assert_eq!(panel.notice(), Some(&NO_PROJECTS));
        assert_eq!(panel.to_html().matches("No projects found.").count(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_shows_no_projects() {
        let panel = run(FakeGitHubApi::new(Reply::Repositories(vec![]))).await;
        assert!(!panel.loading_visible);
        assert_eq!(panel.notice(), Some(&NO_PROJECTS));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_single_error() {
        let panel = run(FakeGitHubApi::new(Reply::Unreachable)).await;
        assert!(!panel.loading_visible);
        assert!(panel.cards().is_empty());
        let html = panel.to_html();
        assert_eq!(
            html.matches("Failed to load projects. Please try again later.")
                .count(),
            1
        );
        assert!(!html.contains("github-project-card"));
    }

    #[tokio::test]
    async fn test_render_failure_leaves_no_partial_cards() {
        let mut broken = repository("broken", false, (2023, 1, 1));
        broken.html_url = "not a url".to_string();
        let api = FakeGitHubApi::new(Reply::Repositories(vec![
            repository("fine", false, (2024, 1, 1)),
            broken,
        ]));
        let panel = run(api).await;
        assert!(panel.cards().is_empty());
        assert_eq!(panel.notice(), Some(&PROJECTS_ERROR));
    }

    #[tokio::test]
    async fn test_bare_host_homepage_keeps_every_card() {
        let mut site = repository("site", false, (2024, 3, 1));
        site.homepage = Some("fidelis.fozdigitalz.com".to_string());
        let api = FakeGitHubApi::new(Reply::Repositories(vec![
            site,
            repository("infra", false, (2024, 1, 1)),
        ]));
        let panel = run(api).await;

        assert_eq!(panel.notice(), None);
        assert_eq!(keys(&panel), vec!["site", "infra"]);
        assert!(
            panel.cards()[0]
                .html
                .contains("href=\"https://fidelis.fozdigitalz.com/\"")
        );
    }

    #[tokio::test]
    async fn test_hung_request_never_resolves() {
        let interactor = LoadRepositoryFeedInteractor::new(FakeGitHubApi::new(Reply::Hang));
        let outcome = tokio::time::timeout(
            Duration::from_millis(50),
            interactor.execute(LoadRepositoryFeedUseCaseInput::default()),
        )
        .await;
        // No timeout of its own: the loader is still pending when the outer one fires.
        assert!(outcome.is_err());
    }
}
