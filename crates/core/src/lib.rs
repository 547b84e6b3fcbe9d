//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole falling-block simulation: board, shapes,
//! collision, rotation, line clearing, scoring, and the session phase machine.
//! It has **no dependencies** on UI, clocks, or I/O. The host delivers "tick"
//! and input events; the core only mutates state and exposes it for rendering.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, the `fits` collision predicate, merging and line clearing
//! - [`game_state`]: active/next pieces, transitions, score, and phase
//! - [`shapes`]: the five-entry shape catalog and clockwise rotation
//! - [`rng`]: seeded uniform random source
//! - [`scoring`]: points per lock event
//! - [`snapshot`]: by-value state for renderers
//!
//! # Game Rules
//!
//! - **Catalog**: I, O, T, L, J, each drawn uniformly and independently (no bag)
//! - **Rotation**: clockwise quarter turn in place, rejected if it does not fit (no kicks)
//! - **Locking**: a piece that cannot move down is merged immediately (no lock delay)
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 rows cleared by one lock
//! - **Game over**: blocked at the top row, or the next piece cannot spawn
//!
//! # Example
//!
//! ```
//! use block_drop_core::GameState;
//! use block_drop_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! game.apply_action(GameAction::TogglePause);
//! assert_eq!(game.phase(), Phase::Paused);
//! assert!(!game.tick());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use block_drop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{ActivePiece, GameState, LockEvent, NextPiece};
pub use rng::SimpleRng;
pub use scoring::calculate_line_score;
pub use shapes::{get_shape, random_shape, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
