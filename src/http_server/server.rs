//! # HTTP Server
//!
//! Combines the product and health routers, adds CORS and request tracing,
//! and serves them on a TCP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::products::ProductRepository;
use crate::rest_api::{product_routes, ApiError, ApiState, NOT_FOUND_MESSAGE, PRODUCTS_PATH};

use super::config::ServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the products API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build a server around `repository`
    pub fn new(config: ServerConfig, repository: ProductRepository) -> Self {
        let state = Arc::new(ApiState::new(repository, config.run_mode));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints. Unknown paths and
    /// unregistered methods on known paths both get the JSON 404.
    fn build_router(config: &ServerConfig, state: Arc<ApiState>) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(product_routes(state))
            .fallback(not_found_handler)
            .method_not_allowed_fallback(not_found_handler)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors_layer(&config.cors_origins)),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            addr = %addr,
            data_file = %self.config.data_file.display(),
            run_mode = %self.config.run_mode,
            "products API listening on http://{}{}",
            addr,
            PRODUCTS_PATH
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("products API stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// No configured origins means any origin is allowed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %s, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn not_found_handler() -> ApiError {
    ApiError::not_found(NOT_FOUND_MESSAGE)
}
