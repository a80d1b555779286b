//! Top-level router: health check, API routers, and tower-http layers.

use std::sync::Arc;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::SendMessageConfig;
use crate::config::{AppConfig, CorsPolicy, ServerConfig};
use crate::ports::{Clock, ConversationStore};

use super::conversation::{conversation_router, ConversationAppState};
use super::interactions::{interaction_router, InteractionsAppState};

const SERVICE_NAME: &str = "hcp-assistant";

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the complete application router.
///
/// Wires the ports into each API module's state and wraps everything in
/// request tracing, CORS, and the configured request timeout.
pub fn app_router(
    config: &AppConfig,
    store: Arc<dyn ConversationStore>,
    clock: Arc<dyn Clock>,
) -> Router {
    let interactions =
        InteractionsAppState::new(clock.clone(), config.assistant.max_message_length);
    let conversations = ConversationAppState::new(
        store,
        clock,
        SendMessageConfig {
            response_delay: config.assistant.response_delay(),
            max_message_length: config.assistant.max_message_length,
        },
    );

    Router::new()
        .route("/health", get(health))
        .merge(interaction_router().with_state(interactions))
        .merge(conversation_router().with_state(conversations))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    match server.cors_policy() {
        CorsPolicy::AnyOrigin => CorsLayer::permissive(),
        CorsPolicy::SameOriginOnly => CorsLayer::new(),
        CorsPolicy::Origins(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
