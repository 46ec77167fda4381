/// Tunables for one game session
use std::time::Duration;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Period between two spawned words
    pub spawn_interval_ms: u64,
    /// Motion ticks per second
    pub tick_hz: u32,
    /// Horizontal gap kept free on both sides when picking `x`
    pub margin: f32,
    /// Where new words start; negative means just above the top edge
    pub spawn_y: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Distance between the bottom of the play area and the baseline
    pub bottom_padding: f32,
    pub starting_lives: u32,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1500,
            tick_hz: 60,
            margin: 40.0,
            spawn_y: -20.0,
            min_speed: 80.0,
            max_speed: 160.0,
            bottom_padding: 80.0,
            starting_lives: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_hz.max(1)))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.spawn_interval_ms > 0, "spawn interval must be positive");
        ensure!(self.tick_hz > 0, "tick rate must be positive");
        ensure!(
            self.margin.is_finite() && self.margin >= 0.0,
            "margin must be a non-negative number, got {}",
            self.margin
        );
        ensure!(self.spawn_y.is_finite(), "spawn offset must be finite");
        ensure!(
            self.min_speed.is_finite() && self.max_speed.is_finite(),
            "speed range must be finite"
        );
        ensure!(
            0.0 <= self.min_speed && self.min_speed <= self.max_speed,
            "invalid speed range {}..={}",
            self.min_speed,
            self.max_speed
        );
        ensure!(
            self.bottom_padding.is_finite() && self.bottom_padding >= 0.0,
            "bottom padding must be a non-negative number, got {}",
            self.bottom_padding
        );
        ensure!(self.starting_lives > 0, "a game needs at least one life");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.spawn_interval(), Duration::from_millis(1500));
        assert_eq!(config.starting_lives, 3);
    }

    #[test]
    fn tick_interval_follows_rate() {
        let config = GameConfig { tick_hz: 50, ..Default::default() };
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let config = GameConfig { min_speed: 200.0, max_speed: 100.0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("speed range"));
    }

    #[test]
    fn rejects_zero_lives_and_zero_intervals() {
        assert!(GameConfig { starting_lives: 0, ..Default::default() }.validate().is_err());
        assert!(GameConfig { spawn_interval_ms: 0, ..Default::default() }.validate().is_err());
        assert!(GameConfig { tick_hz: 0, ..Default::default() }.validate().is_err());
        assert!(GameConfig { margin: f32::NAN, ..Default::default() }.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"starting_lives": 5, "seed": 9}"#).unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tick_hz, 60);
    }
}
