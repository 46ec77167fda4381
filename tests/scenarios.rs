// End-to-end scenarios on the simulation core, without a terminal.

use kotoba_rain::config::GameConfig;
use kotoba_rain::core::catalog::WordCatalog;
use kotoba_rain::core::input::submit;
use kotoba_rain::core::state::{GameState, Phase, Viewport};

fn game(lives: u32) -> GameState {
    let config = GameConfig { seed: Some(2024), starting_lives: lives, ..Default::default() };
    let mut state = GameState::new(config, WordCatalog::japanese());
    state.set_viewport(Viewport::new(400.0, 600.0));
    state
}

#[test]
fn missed_word_costs_one_life() {
    let mut state = game(3);
    state.spawn_word("猫", 200.0, 120.0);

    // -20 + 120 * 4.6 lands past 521, beyond the baseline at 520
    assert_eq!(state.tick(4.6), 1);
    assert!(state.words().is_empty());
    assert_eq!(state.lives(), 2);
    assert!(!state.is_game_over());
}

#[test]
fn last_life_ends_the_game() {
    let mut state = game(1);
    state.spawn_word("犬", 200.0, 120.0);
    state.spawn_word("水", 100.0, 1.0);

    state.tick(5.0);
    assert_eq!(state.lives(), 0);
    assert_eq!(state.phase(), Phase::GameOver);

    let remaining = state.words().len();
    assert!(!submit(&mut state, "水"));
    assert!(!submit(&mut state, "犬"));
    assert_eq!(state.words().len(), remaining);
    assert_eq!(state.lives(), 0);
}

#[test]
fn matching_before_the_baseline_saves_the_life() {
    let mut state = game(3);
    state.spawn_word("ありがとう", 200.0, 120.0);
    state.tick(2.0);
    assert!(submit(&mut state, "ありがとう"));
    state.tick(10.0);
    assert_eq!(state.lives(), 3);
    assert_eq!(state.cleared(), 1);
}

#[test]
fn spawning_pauses_until_the_viewport_is_known() {
    let config = GameConfig { seed: Some(1), ..Default::default() };
    let mut state = GameState::new(config, WordCatalog::japanese());
    assert!(state.spawn().is_none());
    assert_eq!(state.tick(1.0), 0);

    state.set_viewport(Viewport::new(400.0, 600.0));
    assert!(state.spawn().is_some());
}

#[test]
fn restart_after_game_over() {
    let mut state = game(3);
    for x in [60.0, 160.0, 260.0] {
        state.spawn_word("空", x, 150.0);
    }
    state.tick(5.0);
    assert!(state.is_game_over());

    state.reset();
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.lives(), 3);
    assert!(state.words().is_empty());
    assert!(state.spawn().is_some());
}
