//! Axum router configuration for interaction endpoints.

use axum::{routing::post, Router};

use super::handlers::{process_interaction, InteractionsAppState};

/// Create the interaction API router.
///
/// # Routes
///
/// - `POST /api/interactions/process` - Stateless extraction of one note
pub fn interaction_router() -> Router<InteractionsAppState> {
    Router::new().route("/api/interactions/process", post(process_interaction))
}
