use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use rk9::config::AppConfig;
use rk9::router;
use rk9::services::availability::webhook::WebhookAvailabilityGateway;
use rk9::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.availability_webhook_url.is_empty() {
        tracing::warn!("AVAILABILITY_WEBHOOK_URL not set, every booking will pass unverified");
    } else {
        tracing::info!(url = %config.availability_webhook_url, "using availability webhook");
    }
    let availability = WebhookAvailabilityGateway::new(
        config.availability_webhook_url.clone(),
        Duration::from_secs(config.webhook_timeout_secs),
    );

    let state = Arc::new(AppState::new(config.clone(), Box::new(availability)));
    let app = router::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
