use anyhow::Result;
use tracing::info;
use unlisted_search::{api, app_state::AppState, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; LOG_FORMAT=json for structured output
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = Config::from_env()?;
    info!(
        "Listing endpoint: {}, ads-only ceiling: {}s",
        config.listing_base_url(),
        config.ads_max_duration_secs()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let app = api::router(AppState::new(config)?);

    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
