//! Data Transfer Objects for conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SendMessageResult;
use crate::domain::conversation::{Conversation, Message, Role};
use crate::domain::interaction::{InteractionForm, InteractionUpdate};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to send a message to the assistant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One transcript entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}

/// Full conversation view: transcript, typing state, and form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: String,
    pub messages: Vec<MessageResponse>,
    pub is_typing: bool,
    pub error: Option<String>,
    pub form: InteractionForm,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id().to_string(),
            messages: conversation
                .messages()
                .iter()
                .filter(|m| m.role().is_user_visible())
                .map(MessageResponse::from)
                .collect(),
            is_typing: conversation.is_typing(),
            error: conversation.error().map(str::to_string),
            form: conversation.form().clone(),
            created_at: conversation.created_at().to_rfc3339(),
            updated_at: conversation.updated_at().to_rfc3339(),
        }
    }
}

/// Result of sending a message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub reply: MessageResponse,
    pub field_updates: InteractionUpdate,
    pub conversation: ConversationResponse,
}

impl From<SendMessageResult> for SendMessageResponse {
    fn from(result: SendMessageResult) -> Self {
        Self {
            reply: MessageResponse::from(&result.reply),
            field_updates: result.field_updates,
            conversation: ConversationResponse::from(&result.conversation),
        }
    }
}
