use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wasted_starts::{router, AppState, Config, HttpStatsApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let api = HttpStatsApi::new(reqwest::Client::builder().build()?, config.stats_api_url.clone());
    let state = AppState::new(api, config.features);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        stats_api = %config.stats_api_url,
        features = ?config.features,
        "listening on http://{addr}"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
