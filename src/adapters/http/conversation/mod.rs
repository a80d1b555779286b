//! HTTP adapter for assistant conversations.
//!
//! Exposes the conversation transcript and its interaction form:
//! - `POST /api/conversations` - Start a conversation
//! - `GET /api/conversations/:id` - Conversation view
//! - `DELETE /api/conversations/:id` - Discard a conversation
//! - `POST /api/conversations/:id/messages` - Send a message
//! - `DELETE /api/conversations/:id/messages` - Clear the transcript
//! - `PATCH /api/conversations/:id/form` - Manual form edit
//! - `DELETE /api/conversations/:id/form` - Reset the form

mod dto;
mod handlers;
mod routes;

pub use dto::{ConversationResponse, MessageResponse, SendMessageRequest, SendMessageResponse};
pub use handlers::ConversationAppState;
pub use routes::conversation_router;
