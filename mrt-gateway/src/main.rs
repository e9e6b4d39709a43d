use mrt_gateway::config::GatewayConfig;
use mrt_gateway::upstream::UpstreamClient;
use mrt_gateway::web::{AppState, create_router};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mrt_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;

    let upstream = UpstreamClient::new(config.upstream())?;
    info!(
        url = upstream.url(),
        timeout_secs = config.timeout_secs,
        "upstream configured"
    );

    let app = create_router(AppState::new(upstream));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("MRT gateway listening on http://{}", config.bind_addr);
    info!("  GET  /health");
    info!("  GET  /v1/api/stations      - All stations");
    info!("  GET  /v1/api/stations/:id  - Upcoming departures from a station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
