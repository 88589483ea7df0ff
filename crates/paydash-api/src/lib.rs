//! HTTP dashboard server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::transactions: transaction list, view-more pagination
//! - routes::employees: employee directory and selector
//!
//! The server holds one dashboard session in shared state; route handlers
//! run named transitions on it and render from snapshots.

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use paydash_config::Config;
use paydash_core::Dashboard;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::employees::{api_employees, htmx_employee_select};
    use routes::transactions::{
        api_select, api_state, api_transactions, api_view_more, htmx_select,
        htmx_transactions_list, htmx_view_more, page_dashboard,
    };

    Router::new()
        // JSON API endpoints
        .route("/api/health", get(health_check))
        .route("/api/employees", get(api_employees))
        .route("/api/state", get(api_state))
        .route("/api/transactions", get(api_transactions))
        .route("/api/select", post(api_select))
        .route("/api/transactions/more", post(api_view_more))
        // Dashboard page
        .route("/", get(page_dashboard))
        // HTMX partial routes
        .route("/employees/select", get(htmx_employee_select))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/select", post(htmx_select))
        .route("/transactions/more", post(htmx_view_more))
        .layer(tower::ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Bind and serve the dashboard until shutdown
pub async fn start_server(config: Config, dashboard: Arc<RwLock<Dashboard>>) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { dashboard, config };

    let router = create_router(state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    log::info!("Starting paydash server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Paydash</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}
