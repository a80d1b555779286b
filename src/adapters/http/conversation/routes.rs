//! Axum router configuration for conversation endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    clear_messages, delete_conversation, edit_form, get_conversation, reset_form, send_message,
    start_conversation, ConversationAppState,
};

/// Create the conversation API router.
///
/// # Routes
///
/// - `POST /api/conversations` - Start a conversation
/// - `GET /api/conversations/:id` - Conversation view
/// - `DELETE /api/conversations/:id` - Discard a conversation
/// - `POST /api/conversations/:id/messages` - Send a message
/// - `DELETE /api/conversations/:id/messages` - Clear the transcript
/// - `PATCH /api/conversations/:id/form` - Manual form edit
/// - `DELETE /api/conversations/:id/form` - Reset the form
pub fn conversation_router() -> Router<ConversationAppState> {
    Router::new()
        .route("/api/conversations", post(start_conversation))
        .route(
            "/api/conversations/:id",
            get(get_conversation).delete(delete_conversation),
        )
        .route(
            "/api/conversations/:id/messages",
            post(send_message).delete(clear_messages),
        )
        .route(
            "/api/conversations/:id/form",
            patch(edit_form).delete(reset_form),
        )
}
