use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use portfolio_feeds::application::use_cases::load_article_feed::LoadArticleFeedInteractor;
use portfolio_feeds::application::use_cases::load_repository_feed::LoadRepositoryFeedInteractor;
use portfolio_feeds::config::Config;
use portfolio_feeds::infrastructures::adapters::primary::web::{AppState, create_router};
use portfolio_feeds::infrastructures::adapters::secondary::external_apis::build_client;
use portfolio_feeds::infrastructures::adapters::secondary::external_apis::devto::DevToApiAdapter;
use portfolio_feeds::infrastructures::adapters::secondary::external_apis::github::GitHubApiAdapter;
use std::sync::Arc;
use tracing::{info, info_span};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; spans are exported only when a collector is configured
    let provider = if config.otlp_enabled {
        let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create OTLP exporter: {}", e))?;
        Some(
            SdkTracerProvider::builder()
                .with_batch_exporter(otlp_exporter)
                .build(),
        )
    } else {
        None
    };
    let telemetry = provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer("portfolio-feeds")));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(telemetry)
        .with(fmt_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let initialize_span = info_span!("initialize");
    let enter = initialize_span.enter();
    info!("Application starting");

    // Build dependencies
    let client = build_client()?;
    let devto_api_adapter = Arc::new(DevToApiAdapter::new(
        client.clone(),
        config.devto_api_base_url.clone(),
    ));
    let github_api_adapter = Arc::new(GitHubApiAdapter::new(
        client,
        config.github_api_base_url.clone(),
        config.github_token.clone(),
    ));
    let app_state = Arc::new(AppState {
        article_feed: Arc::new(LoadArticleFeedInteractor::new(devto_api_adapter)),
        repository_feed: Arc::new(LoadRepositoryFeedInteractor::new(github_api_adapter)),
    });

    // Create router
    let app = create_router(app_state);

    // Start server
    info!("Listening on {}", config.bind_addr);
    drop(enter);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    if let Some(provider) = provider {
        provider
            .shutdown()
            .map_err(|e| anyhow::anyhow!("Failed to shut down tracer provider: {}", e))?;
    }

    Ok(())
}
