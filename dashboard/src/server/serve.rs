//! HTTP server setup

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::DashboardError;
use crate::server::handlers::{
    add_device_handler, add_device_task_handler, add_log_handler, add_task_handler,
    assign_device_task_handler, health_handler, list_logs_handler, list_tasks_handler,
    remove_device_handler, remove_device_task_handler, update_task_status_handler,
    version_handler, view_handler,
};
use crate::server::state::ServerState;

/// Build the dashboard application
pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        // Health and version
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // Device store
        .route("/api/devices", post(add_device_handler))
        .route("/api/devices/{id}", delete(remove_device_handler))
        .route("/api/devices/{id}/tasks", post(add_device_task_handler))
        .route("/api/devices/{id}/tasks/{index}", delete(remove_device_task_handler))
        .route("/api/devices/{id}/assign", post(assign_device_task_handler))
        .route("/api/logs", get(list_logs_handler).post(add_log_handler))
        // Task store
        .route("/api/tasks", get(list_tasks_handler).post(add_task_handler))
        .route("/api/tasks/{id}/status", put(update_task_status_handler))
        // Views, resolved through the route table
        .fallback(view_handler)
        // State and middleware
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), DashboardError>>, DashboardError> {
    let app = app(state);

    let addr = format!("{}:{}", options.host, options.port);
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| DashboardError::ServerError(e.to_string()))?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| DashboardError::ServerError(e.to_string()))
    });

    Ok(handle)
}
