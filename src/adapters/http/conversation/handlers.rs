//! HTTP handlers for conversation endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::ApiError;
use crate::application::handlers::{
    ClearMessagesCommand, ClearMessagesHandler, DeleteConversationCommand,
    DeleteConversationHandler, EditFormCommand, EditFormHandler,
    GetConversationHandler, GetConversationQuery, ResetFormCommand, ResetFormHandler,
    SendMessageCommand, SendMessageConfig, SendMessageHandler, StartConversationHandler,
};
use crate::domain::foundation::ConversationId;
use crate::domain::interaction::InteractionUpdate;
use crate::ports::{Clock, ConversationStore};

use super::dto::{ConversationResponse, SendMessageRequest, SendMessageResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for conversation endpoints.
///
/// Cloned per request; handlers are built on demand from the Arc'd ports.
#[derive(Clone)]
pub struct ConversationAppState {
    pub store: Arc<dyn ConversationStore>,
    pub clock: Arc<dyn Clock>,
    pub send_config: SendMessageConfig,
}

impl ConversationAppState {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        clock: Arc<dyn Clock>,
        send_config: SendMessageConfig,
    ) -> Self {
        Self {
            store,
            clock,
            send_config,
        }
    }

    pub fn start_conversation_handler(&self) -> StartConversationHandler {
        StartConversationHandler::new(self.store.clone())
    }

    pub fn get_conversation_handler(&self) -> GetConversationHandler {
        GetConversationHandler::new(self.store.clone())
    }

    pub fn send_message_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.store.clone(), self.clock.clone(), self.send_config)
    }

    pub fn edit_form_handler(&self) -> EditFormHandler {
        EditFormHandler::new(self.store.clone())
    }

    pub fn reset_form_handler(&self) -> ResetFormHandler {
        ResetFormHandler::new(self.store.clone())
    }

    pub fn clear_messages_handler(&self) -> ClearMessagesHandler {
        ClearMessagesHandler::new(self.store.clone())
    }

    pub fn delete_conversation_handler(&self) -> DeleteConversationHandler {
        DeleteConversationHandler::new(self.store.clone())
    }
}

fn parse_id(raw: &str) -> Result<ConversationId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_conversation_id(raw))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations/:id - Transcript, typing state, and form
pub async fn get_conversation(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetConversationQuery {
        conversation_id: parse_id(&id)?,
    };

    let conversation = state.get_conversation_handler().handle(query).await?;

    Ok(Json(ConversationResponse::from(&conversation)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST / PATCH / DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/conversations - Start an empty conversation
pub async fn start_conversation(
    State(state): State<ConversationAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let conversation = state.start_conversation_handler().handle().await?;

    Ok((
        StatusCode::CREATED,
        Json(ConversationResponse::from(&conversation)),
    ))
}

/// POST /api/conversations/:id/messages - Send a message to the assistant
pub async fn send_message(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let conversation_id = parse_id(&id)?;
    let Json(request) = body?;

    let result = state
        .send_message_handler()
        .handle(SendMessageCommand::new(conversation_id, request.content))
        .await?;

    Ok(Json(SendMessageResponse::from(result)))
}

/// PATCH /api/conversations/:id/form - Merge a manual edit into the form
pub async fn edit_form(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
    body: Result<Json<InteractionUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let conversation_id = parse_id(&id)?;
    let Json(update) = body?;

    let conversation = state
        .edit_form_handler()
        .handle(EditFormCommand {
            conversation_id,
            update,
        })
        .await?;

    Ok(Json(ConversationResponse::from(&conversation)))
}

/// DELETE /api/conversations/:id/form - Reset the form
pub async fn reset_form(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ResetFormCommand {
        conversation_id: parse_id(&id)?,
    };

    let conversation = state.reset_form_handler().handle(cmd).await?;

    Ok(Json(ConversationResponse::from(&conversation)))
}

/// DELETE /api/conversations/:id/messages - Clear the transcript
pub async fn clear_messages(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ClearMessagesCommand {
        conversation_id: parse_id(&id)?,
    };

    let conversation = state.clear_messages_handler().handle(cmd).await?;

    Ok(Json(ConversationResponse::from(&conversation)))
}

/// DELETE /api/conversations/:id - Discard the conversation
pub async fn delete_conversation(
    State(state): State<ConversationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteConversationCommand {
        conversation_id: parse_id(&id)?,
    };

    state.delete_conversation_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}
