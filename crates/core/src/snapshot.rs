use crate::game_state::{ActivePiece, NextPiece};
use crate::shapes::{get_shape, Shape};
use crate::types::{Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_POSITION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: ShapeKind,
    pub shape: Shape,
}

impl From<NextPiece> for NextSnapshot {
    fn from(value: NextPiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
        }
    }
}

/// Everything a renderer needs after a mutation, by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color ids per cell, 0 = empty (see `ShapeKind::id`)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Cell kind at (x, y) on the locked board
    pub fn cell(&self, x: usize, y: usize) -> Option<ShapeKind> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&id| ShapeKind::from_id(id))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: ShapeKind::I,
                shape: get_shape(ShapeKind::I),
                x: SPAWN_POSITION.0,
                y: SPAWN_POSITION.1,
            },
            next: NextSnapshot {
                kind: ShapeKind::I,
                shape: get_shape(ShapeKind::I),
            },
            score: 0,
            lines: 0,
            phase: Phase::Playing,
            episode_id: 0,
            seed: 0,
        }
    }
}
