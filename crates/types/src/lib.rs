//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, shared by the simulation
//! core, the game loop, and the terminal front-end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0) for every shape
//!
//! # Examples
//!
//! ```
//! use block_drop_types::{GameAction, Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(ShapeKind::from_id(kind.id()), Some(kind));
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert!(Phase::Playing.is_playing());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor of a freshly spawned piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Default cadence of the timed "move down" driver (milliseconds per row)
pub const DROP_INTERVAL_MS: u32 = 500;

/// Largest shape dimension in the catalog (the I piece is 4 long)
pub const MAX_SHAPE_DIM: usize = 4;

/// Points awarded per lock event, indexed by rows cleared (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Display color of a shape (24-bit RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Shape kinds in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Every catalog entry, in catalog order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Display color of the shape
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::new(80, 220, 220),
            ShapeKind::O => Color::new(240, 220, 80),
            ShapeKind::T => Color::new(200, 120, 220),
            ShapeKind::L => Color::new(255, 165, 0),
            ShapeKind::J => Color::new(79, 70, 229),
        }
    }

    /// Stable cell id used by snapshots (0 is reserved for empty)
    pub fn id(&self) -> u8 {
        match self {
            ShapeKind::I => 1,
            ShapeKind::O => 2,
            ShapeKind::T => 3,
            ShapeKind::L => 4,
            ShapeKind::J => 5,
        }
    }

    /// Inverse of [`ShapeKind::id`]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(ShapeKind::I),
            2 => Some(ShapeKind::O),
            3 => Some(ShapeKind::T),
            4 => Some(ShapeKind::L),
            5 => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// Session phase gating which operations are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "togglepause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with the kind's color)
pub type Cell = Option<ShapeKind>;
