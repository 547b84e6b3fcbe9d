//! The single authoritative update queue.
//!
//! Clock ticks and input actions are pushed as [`GameEvent`]s and applied to
//! the owned [`GameState`] strictly in arrival order, one complete step at a
//! time. Nothing else holds a mutable reference to the state.

use std::collections::VecDeque;
use std::io::Write;

use anyhow::Result;

use crate::config::LoopConfig;
use crate::core::{GameSnapshot, GameState};
use crate::journal::{Journal, JournalRecord, LockRecord};
use crate::types::GameAction;

/// Journal type held by the loop
pub type BoxedJournal = Journal<Box<dyn Write + Send>>;

/// One externally delivered event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Action(GameAction),
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Tick => "tick",
            GameEvent::Action(action) => action.as_str(),
        }
    }
}

impl From<GameAction> for GameEvent {
    fn from(action: GameAction) -> Self {
        GameEvent::Action(action)
    }
}

pub struct GameLoop {
    state: GameState,
    queue: VecDeque<GameEvent>,
    seq: u64,
    journal: Option<BoxedJournal>,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            queue: VecDeque::with_capacity(16),
            seq: 0,
            journal: None,
        }
    }

    /// Build a fresh game from config, opening the journal if one is configured
    pub fn from_config(config: &LoopConfig) -> Result<Self> {
        let mut game = Self::new(GameState::new(config.seed));
        if let Some(path) = &config.log_path {
            game = game.with_journal(Journal::open(path)?.boxed());
        }
        Ok(game)
    }

    pub fn with_journal(mut self, journal: BoxedJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Number of events waiting to be applied
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Enqueue an event; nothing is applied until [`GameLoop::drain`]
    pub fn push(&mut self, event: impl Into<GameEvent>) {
        self.queue.push_back(event.into());
    }

    /// Apply every queued event in FIFO order.
    ///
    /// Returns how many of them changed the state.
    pub fn drain(&mut self) -> usize {
        let mut changed = 0;
        while let Some(event) = self.queue.pop_front() {
            if self.step(event) {
                changed += 1;
            }
        }
        changed
    }

    /// Apply one event immediately (bypassing anything still queued)
    pub fn step(&mut self, event: GameEvent) -> bool {
        let changed = match event {
            GameEvent::Tick => self.state.tick(),
            GameEvent::Action(action) => self.state.apply_action(action),
        };
        let lock = self.state.take_last_event();
        self.seq += 1;

        if let Some(journal) = self.journal.as_mut() {
            journal.record(&JournalRecord {
                seq: self.seq,
                episode_id: self.state.episode_id(),
                event: event.as_str(),
                changed,
                phase: self.state.phase().as_str(),
                score: self.state.score(),
                lines: self.state.lines(),
                lock: lock.map(LockRecord::from),
            });
        }

        changed
    }

    pub fn flush_journal(&mut self) {
        if let Some(journal) = self.journal.as_mut() {
            journal.flush();
        }
    }
}
