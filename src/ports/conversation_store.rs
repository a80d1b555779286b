//! Conversation store port.
//!
//! Defines the contract for keeping assistant conversations between
//! requests. Conversations live only as long as the process; interaction
//! records are never persisted.
//!
//! # Design
//!
//! - **Atomic edits**: `update_with` applies a mutation under the store's
//!   own lock, so check-then-set sequences (typing flag) cannot interleave
//! - **Snapshots out**: reads return owned clones

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use async_trait::async_trait;

/// A mutation applied to a stored conversation.
///
/// Returning an error leaves the stored conversation unchanged.
pub type ConversationMutation =
    Box<dyn FnOnce(&mut Conversation) -> Result<(), DomainError> + Send>;

/// Store port for Conversation aggregates.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Save a new conversation.
    ///
    /// # Errors
    ///
    /// - `InternalError` if a conversation with the same ID exists
    async fn insert(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Find a conversation by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// Apply `mutation` atomically and return the resulting conversation.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    /// - whatever `mutation` returns; the stored value is then untouched
    async fn update_with(
        &self,
        id: &ConversationId,
        mutation: ConversationMutation,
    ) -> Result<Conversation, DomainError>;

    /// Delete a conversation.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    async fn delete(&self, id: &ConversationId) -> Result<(), DomainError>;
}
