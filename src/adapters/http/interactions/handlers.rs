//! HTTP handlers for interaction processing.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::{ProcessInteractionCommand, ProcessInteractionHandler};
use crate::ports::Clock;

use crate::adapters::http::ApiError;
use super::dto::{ProcessInteractionRequest, ProcessInteractionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for interaction endpoints.
#[derive(Clone)]
pub struct InteractionsAppState {
    pub clock: Arc<dyn Clock>,
    pub max_text_length: usize,
}

impl InteractionsAppState {
    pub fn new(clock: Arc<dyn Clock>, max_text_length: usize) -> Self {
        Self {
            clock,
            max_text_length,
        }
    }

    pub fn process_interaction_handler(&self) -> ProcessInteractionHandler {
        ProcessInteractionHandler::new(self.clock.clone(), self.max_text_length)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/interactions/process - Extract fields from a free-text note
pub async fn process_interaction(
    State(state): State<InteractionsAppState>,
    body: Result<Json<ProcessInteractionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = ProcessInteractionCommand {
        text: request.text,
        context: request.context,
    };

    let result = state.process_interaction_handler().handle(cmd)?;

    Ok(Json(ProcessInteractionResponse::from(result)))
}
