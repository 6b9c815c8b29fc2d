use anyhow::Context;
use catalog_service::config::Config;
use catalog_service::services::auth::SharedSecret;
use catalog_service::state::AppState;
use catalog_service::utils::source::load_catalog;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let (catalog, report) = match load_catalog(&config.data_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load catalog from {}: {}", config.data_path.display(), e);
            return Err(e).context("catalog could not be built");
        }
    };
    info!(
        "Loaded {} books at startup ({} rows skipped)",
        report.loaded, report.skipped
    );

    let gate = Arc::new(SharedSecret::new(&config.api_key));
    let state = AppState::new(catalog, report, gate);
    let app = catalog_service::app(state, config.request_timeout);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Catalog service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
