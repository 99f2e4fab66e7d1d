use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{capital_routes, country_routes, health_routes, statistics_routes};
use atlas_core::Atlas;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub atlas: Atlas,
}

impl AppState {
    pub fn new(atlas: Atlas) -> Self {
        Self { atlas }
    }
}

/// The full router, without a listener attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(country_routes())
        .merge(capital_routes())
        .merge(statistics_routes())
        .with_state(state)
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let paths = config.data_paths();
    let state = AppState::new(Atlas::open(&paths));

    // Warm the cache so the first request does not pay for the read. A
    // failure here is not fatal: requests report it until the files appear.
    match state.atlas.statistics.totals() {
        Ok(totals) => tracing::info!(
            countries = totals.countries,
            capitals = totals.capitals,
            "datasets loaded"
        ),
        Err(e) => tracing::warn!(error = %e, kind = %e.kind(), "datasets not loaded at startup"),
    }

    tracing::info!("Starting atlas server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("atlas server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
