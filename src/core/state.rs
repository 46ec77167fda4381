/// Game state and its transitions: spawn, tick, miss, match, reset
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::catalog::WordCatalog;
use crate::core::word::{FallingWord, IdGenerator, WordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Size of the visible play area in world units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Spawn and tick only act on a viewport with positive extent
    pub fn is_playable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Read-only view of one word for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordView<'a> {
    pub id: WordId,
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot<'a> {
    pub words: Vec<WordView<'a>>,
    pub lives: u32,
    pub max_lives: u32,
    pub game_over: bool,
    pub cleared: u32,
    pub missed: u32,
    pub baseline_y: f32,
    pub viewport: Viewport,
}

pub struct GameState {
    config: GameConfig,
    catalog: WordCatalog,
    rng: StdRng,
    ids: IdGenerator,
    words: Vec<FallingWord>,
    lives: u32,
    phase: Phase,
    viewport: Viewport,
    cleared: u32,
    missed: u32,
}

impl GameState {
    pub fn new(config: GameConfig, catalog: WordCatalog) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, catalog, rng)
    }

    pub fn with_rng(config: GameConfig, catalog: WordCatalog, rng: StdRng) -> Self {
        let lives = config.starting_lives;
        Self {
            config,
            catalog,
            rng,
            ids: IdGenerator::new(),
            words: Vec::new(),
            lives,
            phase: Phase::Playing,
            viewport: Viewport::default(),
            cleared: 0,
            missed: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(width = viewport.width, height = viewport.height, "viewport changed");
            self.viewport = viewport;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active words, oldest first
    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Words destroyed by a correct submission this session
    pub fn cleared(&self) -> u32 {
        self.cleared
    }

    /// Words that crossed the baseline this session
    pub fn missed(&self) -> u32 {
        self.missed
    }

    pub fn baseline_y(&self) -> f32 {
        self.viewport.height - self.config.bottom_padding
    }

    /// Spawn a random word from the catalog at a random `x` and speed.
    pub fn spawn(&mut self) -> Option<WordId> {
        if !self.accepts_spawns() {
            return None;
        }

        let margin = self.config.margin;
        let max_x = (self.viewport.width - margin).max(margin);
        let x = self.rng.random_range(margin..=max_x);
        let speed = self
            .rng
            .random_range(self.config.min_speed..=self.config.max_speed);
        let text = self.catalog.pick_random(&mut self.rng).to_string();

        self.spawn_word(text, x, speed)
    }

    /// Place a specific word at `x` falling with `speed`. Same guards as [`GameState::spawn`].
    pub fn spawn_word(&mut self, text: impl Into<String>, x: f32, speed: f32) -> Option<WordId> {
        if !self.accepts_spawns() {
            return None;
        }

        let id = self.ids.next_id();
        debug_assert!(self.words.iter().all(|w| w.id() != id), "duplicate word id {id}");

        let word = FallingWord::new(id, text.into(), x, self.config.spawn_y, speed);
        debug!(%id, text = word.text(), x, speed, "spawned word");
        self.words.push(word);
        Some(id)
    }

    fn accepts_spawns(&self) -> bool {
        !self.is_game_over() && self.viewport.is_playable()
    }

    /// Advance every word by `speed * dt` and drop the ones that reached the
    /// baseline. Returns how many were missed in this tick.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.is_game_over() || !self.viewport.is_playable() {
            return 0;
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        for word in &mut self.words {
            word.advance(dt);
        }

        let baseline = self.baseline_y();
        let before = self.words.len();
        self.words.retain(|w| w.y() < baseline);
        let missed = (before - self.words.len()) as u32;

        if missed > 0 {
            self.missed += missed;
            debug!(missed, baseline, "words reached the baseline");
            self.lose_lives(missed);
        }
        missed
    }

    pub fn lose_lives(&mut self, count: u32) {
        self.lives = self.lives.saturating_sub(count);
        if self.lives == 0 && !self.is_game_over() {
            self.phase = Phase::GameOver;
            info!(cleared = self.cleared, missed = self.missed, "game over");
        }
    }

    /// Remove the oldest active word whose text equals `text` exactly.
    pub fn remove_oldest_match(&mut self, text: &str) -> Option<WordId> {
        if self.is_game_over() {
            return None;
        }
        let idx = self.words.iter().position(|w| w.text() == text)?;
        let word = self.words.remove(idx);
        self.cleared += 1;
        debug!(id = %word.id(), text, "word cleared");
        Some(word.id())
    }

    /// Back to a fresh `Playing` session. Ids keep counting up.
    pub fn reset(&mut self) {
        self.words.clear();
        self.lives = self.config.starting_lives;
        self.phase = Phase::Playing;
        self.cleared = 0;
        self.missed = 0;
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            words: self
                .words
                .iter()
                .map(|w| WordView { id: w.id(), text: w.text(), x: w.x(), y: w.y() })
                .collect(),
            lives: self.lives,
            max_lives: self.config.starting_lives,
            game_over: self.is_game_over(),
            cleared: self.cleared,
            missed: self.missed,
            baseline_y: self.baseline_y(),
            viewport: self.viewport,
        }
    }
}
