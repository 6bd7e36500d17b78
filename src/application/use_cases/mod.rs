pub mod load_article_feed;
pub mod load_repository_feed;
