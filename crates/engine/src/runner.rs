//! Async host loop.
//!
//! Bridges a timer and an action channel into one [`GameLoop`]. Both sources
//! are consumed by a single `select!` on one task, so a tick and an action can
//! never interleave mid-update. Dropping every action sender tears the loop
//! down and stops the timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::GameSnapshot;
use crate::game_loop::{GameEvent, GameLoop};
use crate::types::GameAction;

/// Drive `game` until the action channel closes.
///
/// A tick fires every `drop_ms` milliseconds, first one a full period after
/// start. `on_frame` sees the state after every event that changed it. Returns
/// the final state.
pub async fn run<F>(
    mut game: GameLoop,
    drop_ms: u32,
    mut actions: mpsc::Receiver<GameAction>,
    mut on_frame: F,
) -> GameSnapshot
where
    F: FnMut(&GameSnapshot),
{
    let period = Duration::from_millis(drop_ms.max(1) as u64);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            action = actions.recv() => match action {
                Some(action) => game.push(GameEvent::Action(action)),
                None => break,
            },
            _ = ticker.tick() => game.push(GameEvent::Tick),
        }

        if game.drain() > 0 {
            on_frame(&game.snapshot());
        }
    }

    game.flush_journal();
    game.snapshot()
}
