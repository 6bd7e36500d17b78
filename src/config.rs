use anyhow::Context;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DEVTO_API_BASE_URL: &str = "https://dev.to";
const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Runtime settings. Account names and page sizes are not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub devto_api_base_url: String,
    pub github_api_base_url: String,
    pub github_token: Option<String>,
    pub otlp_enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = non_empty("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid PORTFOLIO_BIND_ADDR: {bind_addr}"))?;

        Ok(Self {
            bind_addr,
            devto_api_base_url: non_empty("DEVTO_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_DEVTO_API_BASE_URL.to_string()),
            github_api_base_url: non_empty("GITHUB_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string()),
            github_token: non_empty("GITHUB_TOKEN"),
            otlp_enabled: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT").is_some(),
        })
    }
}
