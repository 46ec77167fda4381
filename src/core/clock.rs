/// Spawn and motion timers, independent of the render rate
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Time to add a new word
    Spawn,
    /// Time to advance the words; `dt` is the wall-clock time since the previous motion event
    Motion { dt: Duration },
}

struct Timers {
    spawn: Interval,
    motion: Interval,
    last_motion: Instant,
}

/// Two periodic triggers polled from the engine loop.
///
/// Late periods are skipped rather than replayed, so a slow consumer sees one
/// motion event with a larger `dt` instead of a burst.
pub struct GameClock {
    spawn_period: Duration,
    motion_period: Duration,
    timers: Option<Timers>,
}

impl GameClock {
    pub fn new(spawn_period: Duration, motion_period: Duration) -> Self {
        Self { spawn_period, motion_period, timers: None }
    }

    pub fn spawn_period(&self) -> Duration {
        self.spawn_period
    }

    pub fn motion_period(&self) -> Duration {
        self.motion_period
    }

    pub fn is_running(&self) -> bool {
        self.timers.is_some()
    }

    /// Start both triggers. The first spawn comes one spawn period from now.
    pub fn start(&mut self) {
        let now = Instant::now();

        let mut spawn = interval_at(now + self.spawn_period, self.spawn_period);
        spawn.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut motion = interval_at(now + self.motion_period, self.motion_period);
        motion.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.timers = Some(Timers { spawn, motion, last_motion: now });
        debug!(spawn = ?self.spawn_period, motion = ?self.motion_period, "clock started");
    }

    /// Drop both triggers. Idempotent.
    pub fn stop(&mut self) {
        if self.timers.take().is_some() {
            debug!("clock stopped");
        }
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Wait for the next trigger. Never resolves while the clock is stopped.
    pub async fn next_event(&mut self) -> ClockEvent {
        let Some(timers) = self.timers.as_mut() else {
            return std::future::pending().await;
        };

        tokio::select! {
            // spawn is the rare trigger; polling it first keeps a busy motion
            // timer from starving it
            biased;

            _ = timers.spawn.tick() => ClockEvent::Spawn,
            _ = timers.motion.tick() => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(timers.last_motion);
                timers.last_motion = now;
                ClockEvent::Motion { dt }
            }
        }
    }
}
