//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Key
//! bindings live here, outside the core, so the core only ever sees actions.

pub mod map;

pub use block_drop_types as types;

pub use map::{handle_key_event, should_quit};
