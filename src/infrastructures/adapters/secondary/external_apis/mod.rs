pub mod devto;
pub mod github;

use crate::error::FeedError;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "portfolio-feeds-rust-app";

/// Shared HTTP client for both feed adapters.
pub fn build_client() -> Result<Client, FeedError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Rejects non-success statuses, then decodes the body. Decoding is done by
/// hand so a body that is not the expected shape surfaces as `Malformed`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FeedError> {
    let body = response.error_for_status()?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn parse_timestamp(
    record: &str,
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, FeedError> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| FeedError::InvalidField {
            record: record.to_string(),
            field,
            reason: e.to_string(),
        })
}
