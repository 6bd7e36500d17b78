use super::format::{html_escape, long_date, outbound_link};
use crate::domain::models::article::ArticleSummary;
use crate::domain::models::feed::Card;
use crate::error::FeedError;

pub const PLACEHOLDER_COVER_IMAGE: &str = "https://via.placeholder.com/400x200?text=Dev.to+Article";

const MAX_TAGS: usize = 3;

pub fn article_card(article: &ArticleSummary) -> Result<Card, FeedError> {
    let link = outbound_link(&article.title, &article.url)?;
    let cover = article
        .cover_image
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_COVER_IMAGE);
    let title = html_escape(&article.title);
    let description = html_escape(article.description.as_deref().unwrap_or_default());
    let tags: String = article
        .tags
        .iter()
        .take(MAX_TAGS)
        .map(|tag| format!("<span class=\"blog-tag\">#{}</span>", html_escape(tag)))
        .collect();

    let html = format!(
        r#"<article class="blog-post-card">
    <div class="blog-post-image">
        <img src="{cover}" alt="{title}" loading="lazy">
    </div>
    <div class="blog-post-content">
        <div class="blog-post-meta">
            <span class="blog-post-date">{date}</span>
            <span class="blog-post-reading-time">{reading} min read</span>
        </div>
        <h3 class="blog-post-title">{title}</h3>
        <p class="blog-post-description">{description}</p>
        <div class="blog-post-tags">{tags}</div>
        <div class="blog-post-stats">
            <span><i class="fas fa-heart"></i> {reactions}</span>
            <span><i class="fas fa-comment"></i> {comments}</span>
        </div>
        <a href="{link}" class="blog-post-link" target="_blank" rel="noopener noreferrer">
            Read on Dev.to <i class="fas fa-external-link-alt"></i>
        </a>
    </div>
</article>
"#,
        cover = html_escape(cover),
        date = long_date(&article.published_at),
        reading = article.reading_time_minutes,
        reactions = article.reactions_count,
        comments = article.comments_count,
    );

    Ok(Card {
        key: article.title.clone(),
        html,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub fn article(title: &str) -> ArticleSummary {
        ArticleSummary {
            title: title.to_string(),
            description: Some(format!("All about {title}")),
            cover_image: Some("https://media.dev.to/cover.png".to_string()),
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single().unwrap(),
            reading_time_minutes: 7,
            tags: vec![
                "aws".to_string(),
                "devops".to_string(),
                "terraform".to_string(),
                "cloud".to_string(),
            ],
            reactions_count: 42,
            comments_count: 5,
            url: format!("https://dev.to/fidelisesq/{title}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::article;
    use super::*;

    #[test]
    fn test_renders_all_fields() {
        let card = article_card(&article("cloudfront")).unwrap();
        assert_eq!(card.key, "cloudfront");
        assert!(card.html.contains("src=\"https://media.dev.to/cover.png\""));
        assert!(card.html.contains("January 15, 2024"));
        assert!(card.html.contains("7 min read"));
        assert!(card.html.contains("<h3 class=\"blog-post-title\">cloudfront</h3>"));
        assert!(card.html.contains("All about cloudfront"));
        assert!(card.html.contains("<i class=\"fas fa-heart\"></i> 42"));
        assert!(card.html.contains("<i class=\"fas fa-comment\"></i> 5"));
        assert!(card.html.contains("href=\"https://dev.to/fidelisesq/cloudfront\""));
        assert!(card.html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_only_first_three_tags() {
        let card = article_card(&article("tags")).unwrap();
        assert!(card.html.contains("#aws"));
        assert!(card.html.contains("#devops"));
        assert!(card.html.contains("#terraform"));
        assert!(!card.html.contains("#cloud"));
        assert_eq!(card.html.matches("class=\"blog-tag\"").count(), 3);
    }

    #[test]
    fn test_missing_optional_fields() {
        let mut input = article("bare");
        input.cover_image = None;
        input.description = None;
        input.tags.clear();
        let card = article_card(&input).unwrap();
        assert!(card.html.contains(&format!(
            "src=\"{}\"",
            html_escape(PLACEHOLDER_COVER_IMAGE)
        )));
        assert!(card.html.contains("<p class=\"blog-post-description\"></p>"));
        assert!(!card.html.contains("blog-tag\""));

        input.cover_image = Some(String::new());
        let card = article_card(&input).unwrap();
        assert!(card.html.contains("via.placeholder.com"));
    }

    #[test]
    fn test_escapes_markup() {
        let mut input = article("x");
        input.title = "<script>alert(1)</script>".to_string();
        let card = article_card(&input).unwrap();
        assert!(!card.html.contains("<script>"));
        assert!(card.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_rejects_non_http_link() {
        let mut input = article("x");
        input.url = "javascript:void(0)".to_string();
        assert!(matches!(
            article_card(&input),
            Err(FeedError::Render { .. })
        ));
    }
}
