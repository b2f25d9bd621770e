//! # HTTP Server
//!
//! Main HTTP server combining the book and health routers behind a single
//! error boundary.

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::errors::{route_not_found, ApiError};
use super::health_routes::health_routes;
use crate::registry::BookRegistry;

/// HTTP server for the book registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and seed data
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and seed data
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_registry(config, Arc::new(BookRegistry::seeded()))
    }

    /// Create a new HTTP server over an existing registry
    pub fn with_registry(config: HttpServerConfig, registry: Arc<BookRegistry>) -> Self {
        let router = build_router(registry);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        info!("Server is running on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(registry: Arc<BookRegistry>) -> Router {
    let routes = Router::new()
        .merge(health_routes(Arc::clone(&registry)))
        .merge(book_routes(registry))
        .fallback(route_not_found);

    with_error_boundary(routes)
}

/// Wrap a router so that panics become generic 500 responses and every
/// request is traced.
pub fn with_error_boundary(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "handler panicked");
    ApiError::Internal(detail).into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
