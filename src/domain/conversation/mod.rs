//! Conversation module - The assistant transcript beside the interaction form.

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, Role};
