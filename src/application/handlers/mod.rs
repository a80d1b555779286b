//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod interaction;

pub use conversation::{
    ClearMessagesCommand, ClearMessagesHandler, DeleteConversationCommand,
    DeleteConversationHandler, EditFormCommand, EditFormHandler,
    GetConversationHandler, GetConversationQuery, ResetFormCommand, ResetFormHandler,
    SendMessageCommand, SendMessageConfig, SendMessageError, SendMessageHandler,
    SendMessageResult, StartConversationHandler,
};
pub use interaction::{
    ProcessInteractionCommand, ProcessInteractionError, ProcessInteractionHandler,
    ProcessInteractionResult,
};
