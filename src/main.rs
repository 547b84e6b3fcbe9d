//! Terminal runner (default binary).
//!
//! Keys and the drop clock both feed one `GameLoop`; the frame is redrawn
//! after every batch that changed the state.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use block_drop::engine::{DropClock, GameEvent, GameLoop, LoopConfig};
use block_drop::input::{handle_key_event, should_quit};
use block_drop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_drop::types::GameAction;

fn main() -> Result<()> {
    let mut config = LoopConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    let game = GameLoop::from_config(&config)?;
    eprintln!(
        "[Game] seed={} drop_ms={} journal={}",
        config.seed,
        config.drop_ms,
        config.log_path.as_deref().unwrap_or("off")
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, config.drop_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Ok(score) = &result {
        eprintln!("[Game] final score {}", score);
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, mut game: GameLoop, drop_ms: u32) -> Result<u32> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = DropClock::new(drop_ms);
    let mut last = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = Duration::from_millis(clock.remaining_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Restart {
                            clock.reset();
                            last = Instant::now();
                        }
                        game.push(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        for _ in 0..clock.advance(elapsed) {
            game.push(GameEvent::Tick);
        }

        if game.drain() > 0 {
            dirty = true;
        }
    }

    game.flush_journal();
    Ok(game.state().score())
}
