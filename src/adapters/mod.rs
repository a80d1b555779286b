//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - System and fixed clocks
//! - `storage` - In-memory conversation store
//! - `http` - axum REST API

pub mod clock;
pub mod http;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::InMemoryConversationStore;
