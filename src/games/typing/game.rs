use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::config::GameConfig;
use crate::core::catalog::WordCatalog;
use crate::core::clock::ClockEvent;
use crate::core::game::{Flow, Game};
use crate::core::input;
use crate::core::state::GameState;
use crate::games::typing::renderer::TypingRenderer;

/// The falling-words typing game: a [`GameState`] plus the player's input line
pub struct TypingGame {
    state: GameState,
    input: String,
}

impl TypingGame {
    pub fn new(config: GameConfig, catalog: WordCatalog) -> Self {
        Self {
            state: GameState::new(config, catalog),
            input: String::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Game for TypingGame {
    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        if self.state.is_game_over() {
            // only `r` restarts; Enter is a submit key and does nothing here
            return match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => Flow::Restart,
                _ => Flow::Continue,
            };
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                // the line is cleared whether or not anything matched
                input::submit(&mut self.state, &self.input);
                self.input.clear();
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_clock(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::Spawn => {
                self.state.spawn();
            }
            ClockEvent::Motion { dt } => {
                self.state.tick(dt.as_secs_f32());
            }
        }
    }

    fn set_area(&mut self, area: Rect) {
        let play = TypingRenderer::layout(area).play;
        self.state.set_viewport(TypingRenderer::viewport_for(play));
    }

    fn render(&self, frame: &mut Frame) {
        TypingRenderer::render(frame, &self.state.snapshot(), &self.input);
    }

    fn is_finished(&self) -> bool {
        self.state.is_game_over()
    }

    fn restart(&mut self) {
        self.state.reset();
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Viewport;
    use std::time::Duration;

    fn game() -> TypingGame {
        let config = GameConfig { seed: Some(11), ..Default::default() };
        let mut game = TypingGame::new(config, WordCatalog::japanese());
        game.state_mut().set_viewport(Viewport::new(640.0, 320.0));
        game
    }

    fn press(game: &mut TypingGame, code: KeyCode) -> Flow {
        game.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(game: &mut TypingGame, text: &str) {
        for c in text.chars() {
            press(game, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_enter_clears_a_word() {
        let mut game = game();
        game.state_mut().spawn_word("日本語", 100.0, 100.0);
        type_text(&mut game, "日本語");
        assert_eq!(game.input(), "日本語");

        assert_eq!(press(&mut game, KeyCode::Enter), Flow::Continue);
        assert!(game.state().words().is_empty());
        assert_eq!(game.input(), "");
    }

    #[test]
    fn wrong_submission_still_clears_the_line() {
        let mut game = game();
        game.state_mut().spawn_word("勉強", 100.0, 100.0);
        type_text(&mut game, "勉");
        press(&mut game, KeyCode::Enter);
        assert_eq!(game.input(), "");
        assert_eq!(game.state().words().len(), 1);
        assert_eq!(game.state().lives(), 3);
    }

    #[test]
    fn backspace_edits_the_line() {
        let mut game = game();
        type_text(&mut game, "ごはんx");
        press(&mut game, KeyCode::Backspace);
        assert_eq!(game.input(), "ごはん");
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut game = game();
        game.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(game.input(), "");
    }

    #[test]
    fn clock_events_drive_the_state() {
        let mut game = game();
        game.on_clock(ClockEvent::Spawn);
        assert_eq!(game.state().words().len(), 1);
        let y = game.state().words()[0].y();
        game.on_clock(ClockEvent::Motion { dt: Duration::from_millis(100) });
        assert!(game.state().words()[0].y() > y);
    }

    #[test]
    fn restart_keys_only_work_after_game_over() {
        let mut game = game();
        assert_eq!(press(&mut game, KeyCode::Char('r')), Flow::Continue);
        assert_eq!(game.input(), "r");

        game.state_mut().lose_lives(3);
        assert!(game.is_finished());
        assert_eq!(press(&mut game, KeyCode::Char('x')), Flow::Continue);
        assert_eq!(press(&mut game, KeyCode::Char('r')), Flow::Restart);
        assert_eq!(press(&mut game, KeyCode::Char('R')), Flow::Restart);

        game.restart();
        assert!(!game.is_finished());
        assert_eq!(game.state().lives(), 3);
        assert_eq!(game.input(), "");
    }

    #[test]
    fn enter_after_game_over_keeps_the_overlay() {
        let mut game = game();
        game.state_mut().spawn_word("猫", 100.0, 100.0);
        type_text(&mut game, "猫");
        game.state_mut().lose_lives(3);

        assert_eq!(press(&mut game, KeyCode::Enter), Flow::Continue);
        assert!(game.is_finished());
        assert_eq!(game.state().words().len(), 1);
    }

    #[test]
    fn area_sets_the_viewport() {
        let mut game = game();
        game.set_area(Rect::new(0, 0, 80, 24));
        let viewport = game.state().viewport();
        assert!(viewport.is_playable());
        assert_eq!(viewport.width, 80.0 * 8.0);
    }
}
