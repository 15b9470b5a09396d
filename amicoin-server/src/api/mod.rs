//! REST API for creating, pairing, voting on and ranking memes

mod handlers;
mod responses;
mod routes;

pub use responses::*;
pub use routes::*;

use crate::config::ApiConfig;
use crate::core::MemeStore;
use crate::domain::{MemeLauncher, MemeRegistry, VoteLedger, WalletProvider};
use anyhow::Result;
use axum::{
    error_handling::HandleErrorLayer,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::Json,
    routing::get,
    BoxError, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared API state
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<MemeRegistry>,
    pub ledger: Arc<VoteLedger>,
    pub launcher: Arc<MemeLauncher>,
    pub wallet: Arc<WalletProvider>,
    pub store: Arc<dyn MemeStore>,
}

/// Build the application router with its middleware stack
pub fn create_router(state: ApiState, config: &ApiConfig) -> Router {
    let router = Router::new()
        .merge(create_meme_routes())
        .merge(create_vote_routes())
        .merge(create_wallet_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    apply_middleware(router, config)
}

fn apply_middleware(router: Router, config: &ApiConfig) -> Router {
    let cors = if config.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    router
        .layer(DefaultBodyLimit::max(config.max_request_size_mb * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs))),
        )
}

/// Render middleware failures with the same `{error}` body as handlers
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        ApiError {
            status: StatusCode::REQUEST_TIMEOUT,
            message: "Request timed out".to_string(),
        }
    } else {
        warn!("Unhandled middleware error: {}", err);
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

/// Serve the API until Ctrl+C or SIGTERM
pub async fn start_server(state: ApiState, config: &ApiConfig) -> Result<()> {
    let app = create_router(state, config);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("API server listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Health check handler
async fn health_handler(State(state): State<ApiState>) -> (StatusCode, Json<Value>) {
    let storage = match state.store.health_check().await {
        Ok(health) => Some(health),
        Err(e) => {
            warn!("Storage health check failed: {}", e);
            None
        }
    };
    let healthy = storage.as_ref().is_some_and(|h| h.is_healthy());

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if healthy { "healthy" } else { "unhealthy" },
            "timestamp": chrono::Utc::now().timestamp(),
            "service": "amicoin-server",
            "storage": storage,
        })),
    )
}
