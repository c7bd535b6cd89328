use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod cache;
pub mod error;
pub mod handlers;
pub mod report;
pub mod state;

pub use cache::AnalysisCache;
pub use report::AnalysisReport;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/config", get(handlers::get_config))
        .route("/api/analysis", get(handlers::get_analysis))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serve the dashboard until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> ns_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("👋 Shutting down dashboard");
        })
        .await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{AppConfig, Error, Result};
    pub use crate::{create_app, serve, AppState};
}
