//! Interaction handlers.
//!
//! Stateless processing of free-text interaction notes.

mod process_interaction;

pub use process_interaction::{
    ProcessInteractionCommand, ProcessInteractionError, ProcessInteractionHandler,
    ProcessInteractionResult,
};
