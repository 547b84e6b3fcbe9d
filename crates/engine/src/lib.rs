//! Game loop: clock, update queue, configuration and journal.
//!
//! The core only reacts to "tick now" and input commands. This crate supplies
//! the timing ([`DropClock`], [`run`]) and funnels both event sources through
//! one [`GameLoop`] so every mutation is serialized.

pub mod clock;
pub mod config;
pub mod game_loop;
pub mod journal;
pub mod runner;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use clock::DropClock;
pub use config::LoopConfig;
pub use game_loop::{BoxedJournal, GameEvent, GameLoop};
pub use journal::{Journal, JournalRecord, LockRecord};
pub use runner::run;
