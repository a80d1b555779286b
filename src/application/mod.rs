//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Conversation handlers
    ClearMessagesCommand, ClearMessagesHandler, DeleteConversationCommand,
    DeleteConversationHandler, EditFormCommand, EditFormHandler,
    GetConversationHandler, GetConversationQuery, ResetFormCommand, ResetFormHandler,
    SendMessageCommand, SendMessageConfig, SendMessageError, SendMessageHandler,
    SendMessageResult, StartConversationHandler,
    // Interaction handlers
    ProcessInteractionCommand, ProcessInteractionError, ProcessInteractionHandler,
    ProcessInteractionResult,
};
