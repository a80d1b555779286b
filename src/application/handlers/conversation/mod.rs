//! Conversation command and query handlers.
//!
//! Handles the assistant transcript and the form it fills in.

mod clear_messages;
mod delete_conversation;
mod edit_form;
mod get_conversation;
mod reset_form;
mod send_message;
mod start_conversation;

pub use clear_messages::{ClearMessagesCommand, ClearMessagesHandler};
pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};
pub use edit_form::{EditFormCommand, EditFormHandler};
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use reset_form::{ResetFormCommand, ResetFormHandler};
pub use send_message::{
    SendMessageCommand, SendMessageConfig, SendMessageError, SendMessageHandler,
    SendMessageResult,
};
pub use start_conversation::StartConversationHandler;
