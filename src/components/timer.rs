//! Scheduled tasks.
//!
//! A [`Timer`] is a task descriptor living on its own entity: how long to wait,
//! whether to repeat, and which [`TimerAction`] to apply when it fires. The
//! entity id doubles as the task id.
//!
//! 1. [`update_timers`](crate::systems::timer::update_timers) accumulates the
//!    frame delta into `elapsed`.
//! 2. When `elapsed >= duration` it triggers a
//!    [`TimerEvent`](crate::events::timer::TimerEvent) carrying the action.
//! 3. Repeating timers keep the overshoot and draw a new duration; one-shot
//!    timers are despawned.
//!
//! Tasks are never cancelled.
use bevy_ecs::prelude::{Component, Entity};

/// How the wait before each firing is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerDelay {
    /// Always the same number of seconds.
    Fixed(f32),
    /// Whole milliseconds drawn uniformly from `min_ms..=max_ms`, redrawn
    /// before every firing.
    RandomBetween { min_ms: u32, max_ms: u32 },
}

impl TimerDelay {
    /// Produce a concrete duration in seconds.
    pub fn draw(&self, rng: &mut fastrand::Rng) -> f32 {
        match *self {
            TimerDelay::Fixed(seconds) => seconds,
            TimerDelay::RandomBetween { min_ms, max_ms } => {
                let (lo, hi) = if min_ms <= max_ms {
                    (min_ms, max_ms)
                } else {
                    (max_ms, min_ms)
                };
                rng.u32(lo..=hi) as f32 / 1000.0
            }
        }
    }
}

/// The state change a timer applies when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Draw a new box at the pencil's current position.
    SpawnBox,
    /// Move the pencil to a random x position.
    MovePencil,
    /// Play a one-shot sound effect.
    PlayFx { id: String },
    /// Destroy a box and drop it from the session's box collection.
    DestroyBox { target: Entity },
}

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub delay: TimerDelay,
    pub repeat: bool,
    pub action: TimerAction,
    /// Seconds until the next firing, as drawn from `delay`.
    pub duration: f32,
    /// Seconds accumulated since the last firing.
    pub elapsed: f32,
}

impl Timer {
    /// One-shot task firing once after `seconds`.
    pub fn once(seconds: f32, action: TimerAction) -> Self {
        Self {
            delay: TimerDelay::Fixed(seconds),
            repeat: false,
            action,
            duration: seconds,
            elapsed: 0.0,
        }
    }

    /// Repeating task. The first duration is drawn immediately.
    pub fn repeating(delay: TimerDelay, action: TimerAction, rng: &mut fastrand::Rng) -> Self {
        Self {
            delay,
            repeat: true,
            action,
            duration: delay.draw(rng),
            elapsed: 0.0,
        }
    }

    /// Advance by `delta` seconds. Returns true if the timer fired.
    ///
    /// A repeating timer subtracts the spent duration (keeping the overshoot)
    /// and draws its next duration.
    pub fn tick(&mut self, delta: f32, rng: &mut fastrand::Rng) -> bool {
        self.elapsed += delta;
        if self.elapsed < self.duration {
            return false;
        }
        if self.repeat {
            self.elapsed -= self.duration;
            self.duration = self.delay.draw(rng);
        }
        true
    }
}
