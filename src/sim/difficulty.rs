//! Spawn cadence and difficulty ramp
//!
//! Every spawn makes the next formation faster and the one after that come
//! sooner, until both hit their limits.

use crate::settings::DifficultyTuning;

/// Formation spawn timer
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Ticks since the last spawn
    pub frames: u32,
    /// Ticks between spawns
    pub spawn_interval: u32,
    /// Speed given to the next formation
    pub grid_speed: f32,
    tuning: DifficultyTuning,
}

impl Spawner {
    pub fn new(tuning: &DifficultyTuning) -> Self {
        Self {
            frames: 0,
            spawn_interval: tuning
                .initial_spawn_interval
                .max(tuning.min_spawn_interval)
                .max(1),
            grid_speed: tuning.initial_grid_speed,
            tuning: tuning.clone(),
        }
    }

    pub fn tuning(&self) -> &DifficultyTuning {
        &self.tuning
    }

    /// Count one tick. Returns the speed for a new formation when one is due.
    pub fn advance(&mut self) -> Option<f32> {
        let due = self.frames % self.spawn_interval == 0;
        let spawn = if due {
            self.grid_speed =
                (self.grid_speed + self.tuning.grid_speed_step).min(self.tuning.max_grid_speed);
            self.frames = 0;
            self.spawn_interval = self.next_interval();
            log::debug!(
                "Difficulty ramp: grid speed {:.2}, next spawn in {} ticks",
                self.grid_speed,
                self.spawn_interval
            );
            Some(self.grid_speed)
        } else {
            None
        };
        self.frames += 1;
        spawn
    }

    fn next_interval(&self) -> u32 {
        let step = if self.spawn_interval > self.tuning.spawn_interval_threshold {
            self.tuning.spawn_interval_step_large
        } else {
            self.tuning.spawn_interval_step_small
        };
        self.spawn_interval
            .saturating_sub(step)
            .max(self.tuning.min_spawn_interval)
            .max(1)
    }
}
