/// Resolves submitted text against the active words
use tracing::trace;

use crate::core::state::GameState;

/// Submit what the player typed. Returns `true` if a word was destroyed.
///
/// Input is trimmed and compared for exact equality. When several active words
/// share the text, the oldest one goes first. A wrong guess changes nothing.
pub fn submit(state: &mut GameState, raw: &str) -> bool {
    if state.is_game_over() {
        return false;
    }

    let text = raw.trim();
    if text.is_empty() {
        return false;
    }

    match state.remove_oldest_match(text) {
        Some(_) => true,
        None => {
            trace!(text, "no active word matches");
            false
        }
    }
}
