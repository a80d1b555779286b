//! Message entity for assistant conversations.
//!
//! Messages are immutable records of user/assistant exchanges within a conversation.
//! Each message has a role (user/assistant/system), content, and timestamp.

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System notices (typically invisible to user).
    System,
    /// User input.
    User,
    /// Assistant response.
    Assistant,
}

impl Role {
    /// Returns true if this is a user-visible role.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::User | Self::Assistant)
    }
}

/// An immutable message within a conversation.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is non-blank (validated at construction)
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with the given role and content.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: MessageId::new(),
            role,
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::Assistant, content)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod role {
        use super::*;

        #[test]
        fn user_and_assistant_are_visible() {
            assert!(Role::User.is_user_visible());
            assert!(Role::Assistant.is_user_visible());
        }

        #[test]
        fn system_is_not_visible() {
            assert!(!Role::System.is_user_visible());
        }

        #[test]
        fn serializes_lowercase() {
            assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        }
    }

    mod message {
        use super::*;

        #[test]
        fn user_message_keeps_content() {
            let msg = Message::user("Met Dr. Patel").unwrap();
            assert!(msg.is_user());
            assert_eq!(msg.content(), "Met Dr. Patel");
        }

        #[test]
        fn assistant_message_has_assistant_role() {
            let msg = Message::assistant("I've processed your input.").unwrap();
            assert!(msg.is_assistant());
            assert_eq!(msg.role(), Role::Assistant);
        }

        #[test]
        fn rejects_blank_content() {
            assert_eq!(
                Message::user("   \n").unwrap_err(),
                ValidationError::empty_field("content")
            );
        }

        #[test]
        fn messages_get_distinct_ids() {
            let a = Message::user("a").unwrap();
            let b = Message::user("a").unwrap();
            assert_ne!(a.id(), b.id());
        }
    }
}
