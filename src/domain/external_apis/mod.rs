pub mod devto;
pub mod github;
