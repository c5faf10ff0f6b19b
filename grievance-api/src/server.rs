//! API Server setup

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::AdminGate;
use crate::notify::AdminNotifier;
use crate::routes::create_router;
use crate::service::ComplaintService;
use crate::state::AppState;
use grievance_core::config::AppConfig;
use grievance_db::ComplaintStore;

/// Create the API server
pub fn create_server(
    config: &AppConfig,
    store: Arc<dyn ComplaintStore>,
    notifier: Arc<dyn AdminNotifier>,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    // Create app state
    let service = Arc::new(ComplaintService::new(store, notifier));
    let gate = AdminGate::new(config.admin_password.clone());
    let state = AppState::new(service, gate);

    // Create router
    let mut router = create_router(state);

    // Add middleware
    router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    // Parse address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    Ok((router, addr))
}

/// Run the API server
pub async fn run_server(
    config: &AppConfig,
    store: Arc<dyn ComplaintStore>,
    notifier: Arc<dyn AdminNotifier>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, store, notifier)?;

    tracing::info!("Grievance API server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Start server in background (for testing)
pub async fn start_background_server(
    config: &AppConfig,
    store: Arc<dyn ComplaintStore>,
    notifier: Arc<dyn AdminNotifier>,
) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, store, notifier)?;

    // Bind to get actual address (useful when port is 0)
    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    // Spawn server in background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
