//! Game state module - manages the complete game state
//!
//! Ties together board, shapes, RNG and scoring. Owns the active and next
//! pieces, applies moves/rotations/drops, locks pieces, clears lines, and runs
//! the Playing / Paused / GameOver session machine.
//!
//! Every public mutation is a single atomic step: it either fully applies or
//! leaves the state untouched. Illegal moves and actions outside `Playing` are
//! silent no-ops reported by a `false` return.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::scoring::calculate_line_score;
use crate::shapes::{get_shape, random_shape, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{GameAction, Phase, ShapeKind, SPAWN_POSITION};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece in catalog orientation at the spawn anchor
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Create a piece in catalog orientation at (x, y)
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Check if the piece fits the board at its current anchor
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }

}

/// Lookahead piece, always in catalog orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: ShapeKind,
    pub shape: Shape,
}

impl NextPiece {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
        }
    }
}

/// Outcome of the last lock attempt (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: NextPiece,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a prepared board.
    ///
    /// Current and next pieces are drawn from the seed. If the spawn anchor is
    /// already blocked the game starts in `GameOver`.
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut rng = SimpleRng::new(seed);
        let (kind, _) = random_shape(&mut rng);
        let (next_kind, _) = random_shape(&mut rng);
        Self::with_setup(board, ActivePiece::spawn(kind), next_kind, rng, seed)
    }

    /// Create a game with an explicit board, active piece and next piece.
    ///
    /// Used for scripted scenarios and fixtures. Starts in `GameOver` when the
    /// active piece does not fit.
    pub fn with_pieces(seed: u32, board: Board, active: ActivePiece, next: ShapeKind) -> Self {
        Self::with_setup(board, active, next, SimpleRng::new(seed), seed)
    }

    fn with_setup(
        board: Board,
        active: ActivePiece,
        next: ShapeKind,
        rng: SimpleRng,
        seed: u32,
    ) -> Self {
        let phase = if active.fits(&board) {
            Phase::Playing
        } else {
            Phase::GameOver
        };
        Self {
            board,
            active,
            next: NextPiece::new(next),
            rng,
            seed,
            episode_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &NextPiece {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = NextSnapshot::from(self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Move the active piece sideways by `dx` columns if it fits
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        let Some(x) = self.active.x.checked_add(dx) else {
            return false;
        };
        if !self.board.fits(&self.active.shape, x, self.active.y) {
            return false;
        }
        self.active.x = x;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// No kicks: the rotated grid must fit at the current anchor or the piece
    /// keeps its orientation.
    pub fn rotate(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        let rotated = self.active.shape.rotated_cw();
        if !self.board.fits(&rotated, self.active.x, self.active.y) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Timer-driven "move down"
    pub fn tick(&mut self) -> bool {
        self.step_down()
    }

    /// Player-driven "move down" (same rules as a tick)
    pub fn soft_drop(&mut self) -> bool {
        self.step_down()
    }

    /// Move down one row, or lock when blocked.
    ///
    /// A blocked piece still at the top row ends the session instead of
    /// locking.
    fn step_down(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }

        let active = self.active;
        if self.board.fits(&active.shape, active.x, active.y + 1) {
            self.active.y += 1;
            return true;
        }

        if active.y == 0 {
            self.phase = Phase::GameOver;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                points: 0,
                game_over: true,
            });
            return true;
        }

        self.lock_piece();
        true
    }

    /// Lock the active piece onto the board, clear lines, score, and spawn next
    fn lock_piece(&mut self) {
        let active = self.active;
        self.board
            .merge(&active.shape, active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len();
        let points = calculate_line_score(lines_cleared);

        self.lines = self.lines.saturating_add(lines_cleared as u32);
        self.score = self.score.saturating_add(points);

        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            points,
            game_over: !spawned,
        });
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// Returns false (and ends the session) when the new piece does not fit at
    /// the spawn anchor. The board is left as it is.
    fn spawn_next(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next.kind);
        let (kind, _) = random_shape(&mut self.rng);
        self.next = NextPiece::new(kind);

        if !self.active.fits(&self.board) {
            self.phase = Phase::GameOver;
            return false;
        }
        true
    }

    /// Playing <-> Paused. No effect in GameOver.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => return false,
        };
        true
    }

    /// Discard the session and start over from an empty board.
    ///
    /// Pieces keep coming from the same random stream, so a restart does not
    /// replay the previous sequence.
    pub fn restart(&mut self) {
        let (kind, _) = random_shape(&mut self.rng);
        let (next_kind, _) = random_shape(&mut self.rng);

        self.board = Board::new();
        self.active = ActivePiece::spawn(kind);
        self.next = NextPiece::new(next_kind);
        self.score = 0;
        self.lines = 0;
        self.last_event = None;
        self.phase = Phase::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn game_with(kind: ShapeKind, x: i8, y: i8) -> GameState {
        GameState::with_pieces(7, Board::new(), ActivePiece::at(kind, x, y), ShapeKind::O)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!((state.active.x, state.active.y), SPAWN_POSITION);
        assert_eq!(state.active.shape, get_shape(state.active.kind));
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.active, b.active);
        assert_eq!(a.next, b.next);
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut state = game_with(ShapeKind::O, 3, 5);

        for _ in 0..3 {
            assert!(state.move_left());
        }
        assert_eq!(state.active.x, 0);

        for _ in 0..5 {
            assert!(!state.move_left());
            assert_eq!(state.active.x, 0);
        }
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut state = game_with(ShapeKind::I, 3, 5);

        let mut moved = 0;
        while state.move_right() {
            moved += 1;
        }
        assert_eq!(moved, 3);
        assert_eq!(state.active.x, BOARD_WIDTH as i8 - 4);
    }

    #[test]
    fn test_move_blocked_by_stack() {
        let mut state = game_with(ShapeKind::O, 3, 5);
        state.board_mut().set(2, 6, Some(ShapeKind::J));

        assert!(!state.move_left());
        assert_eq!(state.active.x, 3);
        assert!(state.move_right());
    }

    #[test]
    fn test_rotate_applies_clockwise_turn() {
        let mut state = game_with(ShapeKind::T, 3, 5);
        assert!(state.rotate());
        assert_eq!(state.active.shape, get_shape(ShapeKind::T).rotated_cw());
        assert_eq!((state.active.x, state.active.y), (3, 5));
    }

    #[test]
    fn test_rotate_rejected_at_right_wall() {
        // Vertical I at the last column would become 4 wide.
        let vertical = get_shape(ShapeKind::I).rotated_cw();
        let active = ActivePiece {
            shape: vertical,
            ..ActivePiece::at(ShapeKind::I, BOARD_WIDTH as i8 - 1, 5)
        };
        let mut state = GameState::with_pieces(7, Board::new(), active, ShapeKind::O);
        assert_eq!(state.phase, Phase::Playing);

        assert!(!state.rotate());
        assert_eq!(state.active.shape, vertical);
        assert_eq!(state.active.x, BOARD_WIDTH as i8 - 1);
    }

    #[test]
    fn test_rotate_rejected_on_overlap() {
        let mut state = game_with(ShapeKind::L, 3, 5);
        // L rotated: [11][10][10]; its bottom-left lands on (3, 7).
        state.board_mut().set(3, 7, Some(ShapeKind::O));
        let before = state.active.shape;

        assert!(!state.rotate());
        assert_eq!(state.active.shape, before);
    }

    #[test]
    fn test_rotate_near_top_may_use_rows_above_board() {
        // Vertical I with its top above the board is still legal.
        let mut state = game_with(ShapeKind::I, 3, -2);
        assert!(state.rotate());
        assert_eq!(state.active.shape.rows(), 4);
    }

    #[test]
    fn test_tick_moves_down() {
        let mut state = game_with(ShapeKind::O, 3, 5);
        assert!(state.tick());
        assert_eq!(state.active.y, 6);
        assert!(state.soft_drop());
        assert_eq!(state.active.y, 7);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_lock_on_floor_spawns_next() {
        let floor_y = BOARD_HEIGHT as i8 - 2;
        let mut state = game_with(ShapeKind::O, 0, floor_y);

        assert!(state.tick());

        assert!(state.board.is_occupied(0, floor_y));
        assert!(state.board.is_occupied(1, floor_y + 1));
        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(state.active.kind, ShapeKind::O);
        assert_eq!((state.active.x, state.active.y), SPAWN_POSITION);
        assert_eq!(
            state.take_last_event(),
            Some(LockEvent {
                lines_cleared: 0,
                points: 0,
                game_over: false
            })
        );
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_next_piece_resets_to_catalog_orientation() {
        let floor_y = BOARD_HEIGHT as i8 - 1;
        let mut state = GameState::with_pieces(
            5,
            Board::new(),
            ActivePiece::at(ShapeKind::I, 0, floor_y),
            ShapeKind::L,
        );
        assert!(state.tick());
        assert_eq!(state.active.kind, ShapeKind::L);
        assert_eq!(state.active.shape, get_shape(ShapeKind::L));
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let bottom = BOARD_HEIGHT as i8 - 1;
        let mut board = Board::new();
        for x in 4..BOARD_WIDTH as i8 {
            board.set(x, bottom, Some(ShapeKind::J));
        }
        // A single marker above the gap-filling row.
        board.set(9, bottom - 1, Some(ShapeKind::T));

        let mut state = GameState::with_pieces(
            1,
            board,
            ActivePiece::at(ShapeKind::I, 0, bottom),
            ShapeKind::O,
        );
        assert!(state.tick());

        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        // Marker shifted down into the cleared row.
        assert_eq!(state.board.get(9, bottom), Some(Some(ShapeKind::T)));
        assert_eq!(state.board.filled_count(), 1);
    }

    #[test]
    fn test_line_counter_saturates() {
        let mut board = Board::new();
        board.fill_row(BOARD_HEIGHT as i8 - 1, ShapeKind::J);
        board.set(0, BOARD_HEIGHT as i8 - 1, None);
        let vertical_i = ActivePiece {
            shape: get_shape(ShapeKind::I).rotated_cw(),
            ..ActivePiece::at(ShapeKind::I, 0, BOARD_HEIGHT as i8 - 4)
        };
        let mut state = GameState::with_pieces(1, board, vertical_i, ShapeKind::T);
        state.lines = u32::MAX;

        assert!(state.tick());
        assert_eq!(state.lines, u32::MAX);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_game_over_when_blocked_at_top_row() {
        let mut state = game_with(ShapeKind::O, 3, 0);
        state.board_mut().set(3, 2, Some(ShapeKind::I));
        let board_before = state.board.clone();

        assert!(state.tick());

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.board, board_before);
        assert_eq!(state.take_last_event().map(|e| e.game_over), Some(true));
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut board = Board::new();
        for x in 3..7 {
            board.set(x, 0, Some(ShapeKind::J));
            board.set(x, 1, Some(ShapeKind::J));
        }
        let bottom = BOARD_HEIGHT as i8 - 2;
        let mut state = GameState::with_pieces(
            1,
            board,
            ActivePiece::at(ShapeKind::O, 0, bottom),
            ShapeKind::T,
        );

        assert!(state.tick());

        assert_eq!(state.phase, Phase::GameOver);
        // Only the locked piece was added.
        assert_eq!(state.board.filled_count(), 8 + 4);
        assert_eq!(state.active.kind, ShapeKind::T);
        assert!(state.take_last_event().unwrap().game_over);
    }

    #[test]
    fn test_game_over_rejects_everything_but_restart() {
        let mut state = game_with(ShapeKind::O, 3, 0);
        state.board_mut().set(3, 2, Some(ShapeKind::I));
        state.tick();
        assert!(state.game_over());

        let before = state.snapshot();
        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.rotate());
        assert!(!state.tick());
        assert!(!state.soft_drop());
        assert!(!state.toggle_pause());
        assert_eq!(state.snapshot(), before);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_pause_gates_mutations() {
        let mut state = game_with(ShapeKind::T, 3, 5);
        assert!(state.toggle_pause());
        assert!(state.paused());

        let before = state.snapshot();
        for _ in 0..10 {
            assert!(!state.tick());
            assert!(!state.move_left());
            assert!(!state.move_right());
            assert!(!state.rotate());
            assert!(!state.soft_drop());
        }
        assert_eq!(state.snapshot(), before);

        assert!(state.toggle_pause());
        assert_eq!(state.phase, Phase::Playing);
        let mut resumed = state.snapshot();
        resumed.phase = Phase::Paused;
        assert_eq!(resumed, before);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(12345);
        state.board_mut().fill_row(19, ShapeKind::I);
        state.score = 900;
        state.lines = 3;
        state.phase = Phase::GameOver;

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.episode_id, 1);
        assert_eq!((state.active.x, state.active.y), SPAWN_POSITION);
        assert_eq!(state.active.shape, get_shape(state.active.kind));
        assert_eq!(state.next.shape, get_shape(state.next.kind));
    }

    #[test]
    fn test_restart_from_paused() {
        let mut state = GameState::new(3);
        state.toggle_pause();
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_with_board_blocked_spawn_starts_game_over() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 0, Some(ShapeKind::L));
            board.set(x, 1, Some(ShapeKind::L));
        }
        let state = GameState::with_board(1, board);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = game_with(ShapeKind::T, 3, 5);
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.x, 4);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.x, 3);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.y, 6);
        assert!(state.apply_action(GameAction::Rotate));
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused());
    }
}
