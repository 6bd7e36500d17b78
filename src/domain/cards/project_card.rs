use super::format::{html_escape, language_color, outbound_link, short_date};
use crate::domain::models::feed::Card;
use crate::domain::models::repository::RepositorySummary;
use crate::error::FeedError;

pub const FALLBACK_DESCRIPTION: &str = "No description available";

const MAX_TOPICS: usize = 4;

/// The homepage is free text. A bare host is treated as `https://`; anything
/// still unusable drops the demo link but keeps the card.
fn demo_link(repo: &RepositorySummary) -> Option<String> {
    let homepage = repo
        .homepage
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())?;
    let candidate = if homepage.contains("://") {
        homepage.to_string()
    } else {
        format!("https://{homepage}")
    };
    match outbound_link(&repo.name, &candidate) {
        Ok(href) => Some(href),
        Err(e) => {
            tracing::debug!("Skipping demo link: {e}");
            None
        }
    }
}

pub fn project_card(repo: &RepositorySummary) -> Result<Card, FeedError> {
    let code_link = outbound_link(&repo.name, &repo.html_url)?;
    let demo_link = demo_link(repo);

    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(FALLBACK_DESCRIPTION);

    let topics = if repo.topics.is_empty() {
        String::new()
    } else {
        let spans: String = repo
            .topics
            .iter()
            .take(MAX_TOPICS)
            .map(|topic| format!("<span class=\"project-topic\">{}</span>", html_escape(topic)))
            .collect();
        format!("\n        <div class=\"project-topics\">{spans}</div>")
    };

    let language = match repo.language.as_deref() {
        Some(language) => format!(
            "\n            <span class=\"project-language\"><span class=\"language-dot\" style=\"background-color: {}\"></span>{}</span>",
            language_color(Some(language)),
            html_escape(language)
        ),
        None => String::new(),
    };

    let demo = match demo_link {
        Some(href) => format!(
            "\n            <a href=\"{href}\" class=\"project-link live\" target=\"_blank\" rel=\"noopener noreferrer\">Live Demo <i class=\"fas fa-external-link-alt\"></i></a>"
        ),
        None => String::new(),
    };

    let html = format!(
        r#"<article class="github-project-card">
    <div class="project-header">
        <div class="project-icon"><i class="fab fa-github"></i></div>
        <div class="project-meta"><span class="project-updated">Updated {updated}</span></div>
    </div>
    <div class="project-content">
        <h3 class="project-title">{name}</h3>
        <p class="project-description">{description}</p>{topics}
        <div class="project-stats">{language}
            <span class="project-stat"><i class="fas fa-star"></i> {stars}</span>
            <span class="project-stat"><i class="fas fa-code-branch"></i> {forks}</span>
        </div>
        <div class="project-links">{demo}
            <a href="{code_link}" class="project-link" target="_blank" rel="noopener noreferrer">View Code <i class="fab fa-github"></i></a>
        </div>
    </div>
</article>
"#,
        updated = short_date(&repo.updated_at),
        name = html_escape(&repo.name),
        description = html_escape(description),
        stars = repo.stars_count,
        forks = repo.forks_count,
    );

    Ok(Card {
        key: repo.name.clone(),
        html,
    })
}
