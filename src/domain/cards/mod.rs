pub mod article_card;
pub mod format;
pub mod project_card;
