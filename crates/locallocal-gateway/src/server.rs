// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use axum::{
    routing::{get, post},
    Router,
};
use locallocal_core::LocalLocalError;
use locallocal_router::ChatHandler;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Request handler shared by every route. Cloning is cheap.
    pub chat: ChatHandler,
}

impl GatewayState {
    pub fn new(chat: ChatHandler) -> Self {
        Self { chat }
    }
}

/// Gateway server configuration (mirrors `[server]` from locallocal-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the application router.
///
/// - GET / (chat page)
/// - POST /chat (form submission, re-rendered page)
/// - GET /health
/// - GET /api/models
/// - POST /api/chat (JSON)
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index))
        .route("/chat", post(handlers::post_chat))
        .route("/health", get(handlers::get_health))
        .route("/api/models", get(handlers::get_models))
        .route("/api/chat", post(handlers::post_api_chat))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the chat server and run until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish once shutdown begins.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), LocalLocalError> {
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| LocalLocalError::Server {
            message: format!("failed to bind server to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("chat server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| LocalLocalError::Server {
            message: format!("server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("chat server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use locallocal_router::{FixedChoice, SimulatedModels};

    use super::*;

    fn state() -> GatewayState {
        GatewayState::new(ChatHandler::new(Arc::new(SimulatedModels::instant(
            Arc::new(FixedChoice(0)),
        ))))
    }

    #[test]
    fn server_config_bind_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert!(format!("{config:?}").contains("127.0.0.1"));
    }

    #[test]
    fn gateway_state_is_clone() {
        let state = state();
        let _cloned = state.clone();
    }

    #[tokio::test]
    async fn bind_failure_is_server_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        let err = start_server(&config, state(), CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LocalLocalError::Server { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn cancelled_token_stops_server() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let token = CancellationToken::new();
        token.cancel();
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            start_server(&config, state(), token),
        )
        .await
        .expect("server should stop promptly");
        assert!(result.is_ok());
    }
}
