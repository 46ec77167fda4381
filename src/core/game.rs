/// Interface between a game and the engine loop that drives it
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::core::clock::ClockEvent;

/// What the engine should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Reset the game and restart the clock
    Restart,
    Quit,
}

/// Main game trait the engine drives.
///
/// All methods run on the engine's single loop, one at a time, so each call is
/// a complete transition as far as anything else can observe.
pub trait Game {
    /// A key press the engine did not consume itself
    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    /// A spawn or motion trigger from the clock
    fn on_clock(&mut self, event: ClockEvent);

    /// The terminal area available this frame
    fn set_area(&mut self, area: Rect);

    fn render(&self, frame: &mut Frame);

    /// Once true, the engine stops the clock until the next restart
    fn is_finished(&self) -> bool;

    fn restart(&mut self);
}
