//! Terminal rendering for the falling-block game.
//!
//! A small framebuffer-based renderer: [`GameView`] paints a `GameSnapshot`
//! into a [`FrameBuffer`] (pure, unit-testable) and [`TerminalRenderer`]
//! flushes only the changed runs to the terminal through crossterm.
//! Board cells are drawn 2 columns wide to offset the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
