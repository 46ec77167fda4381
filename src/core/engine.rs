use std::io;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use tracing::{info, warn};

use crate::core::clock::GameClock;
use crate::core::game::{Flow, Game};

/// Runs a [`Game`] against a terminal, an input event stream and a [`GameClock`].
pub struct Engine<G: Game> {
    game: G,
    clock: GameClock,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, clock: GameClock) -> Self {
        Self { game, clock }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Loop until the player quits or the event stream ends.
    pub async fn run<B, S>(&mut self, terminal: &mut Terminal<B>, mut events: S) -> Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.clock.start();
        info!("game started");

        loop {
            terminal.draw(|frame| {
                self.game.set_area(frame.area());
                self.game.render(frame);
            })?;

            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if is_quit(&key) {
                                break;
                            }
                            match self.game.handle_input(key) {
                                Flow::Continue => {}
                                Flow::Restart => {
                                    self.game.restart();
                                    self.clock.restart();
                                    info!("game restarted");
                                }
                                Flow::Quit => break,
                            }
                        }
                        // resizes and everything else just trigger a redraw
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!(error = ?e, "input stream failed");
                            self.clock.stop();
                            return Err(e.into());
                        }
                        None => break,
                    }
                }

                event = self.clock.next_event() => {
                    self.game.on_clock(event);
                }
            }

            if self.game.is_finished() && self.clock.is_running() {
                self.clock.stop();
                info!("clock stopped after game over");
            }
        }

        self.clock.stop();
        info!("game loop exited");
        Ok(())
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
