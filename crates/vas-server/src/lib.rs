#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod echo;
mod extract;
mod health;
mod method;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use vas_config::Config;

pub use echo::{EchoRequest, EchoResponse};
pub use extract::{JsonBody, require_field};
pub use method::unsupported_method_middleware;

/// Assembled server with all routes and middleware
pub struct Server {
    routes: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut routes = Router::new();

        if config.server.health.enabled {
            routes = routes.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        if config.server.echo.enabled {
            routes = routes.route(&config.server.echo.path, axum::routing::post(echo::echo_handler));
        }

        Self { routes, listen_address }
    }

    /// Merge additional routes
    ///
    /// They get the same middleware as the built-in routes, so their
    /// `VasError` responses and method mismatches render identically.
    #[must_use]
    pub fn with_routes(self, routes: Router) -> Self {
        Self {
            routes: self.routes.merge(routes),
            ..self
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the router with middleware applied
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        // Innermost first
        self.routes
            .layer(axum::middleware::from_fn(method::unsupported_method_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
