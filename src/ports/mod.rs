//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Today's date, for completing partial dates
//! - `ConversationStore` - Conversation persistence with atomic edits

mod clock;
mod conversation_store;

pub use clock::Clock;
pub use conversation_store::{ConversationMutation, ConversationStore};
