//! Space Invaders - a formation shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formations, collisions, game state)
//! - `renderer`: Drawing boundary and the per-frame draw pass
//! - `platform`: Input, clock and score-display boundaries
//! - `settings`: Data-driven configuration and difficulty tuning
//! - `game`: Host driver wiring the boundaries to the simulation

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::{DifficultyTuning, Settings};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Player horizontal speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Ship tilt while strafing (radians)
    pub const PLAYER_TILT: f32 = 0.15;
    /// Player sprite scale applied to the loaded image
    pub const PLAYER_SPRITE_SCALE: f32 = 0.15;
    /// Gap between the ship and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Player projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Invader projectile defaults
    pub const INVADER_PROJECTILE_WIDTH: f32 = 3.0;
    pub const INVADER_PROJECTILE_HEIGHT: f32 = 10.0;
    pub const INVADER_PROJECTILE_SPEED: f32 = 5.0;

    /// Invader sprite scale applied to the loaded image
    pub const INVADER_SPRITE_SCALE: f32 = 1.0;
    /// Formation cell size (invaders are laid out on this grid)
    pub const INVADER_SPACING: f32 = 40.0;
    /// Column count range (inclusive)
    pub const GRID_MIN_COLUMNS: u32 = 5;
    pub const GRID_MAX_COLUMNS: u32 = 14;
    /// Row count range (inclusive)
    pub const GRID_MIN_ROWS: u32 = 2;
    pub const GRID_MAX_ROWS: u32 = 6;
    /// One-shot downward step applied when a formation bounces off an edge
    pub const GRID_DESCEND_STEP: f32 = 30.0;
    /// Ticks between invader volleys
    pub const INVADER_SHOOT_INTERVAL: u32 = 100;

    /// Score per invader destroyed
    pub const INVADER_KILL_SCORE: u64 = 100;
    /// Bonus for wiping out a whole formation
    pub const FORMATION_CLEAR_BONUS: u64 = 1000;

    /// Particles per explosion
    pub const EXPLOSION_PARTICLES: usize = 15;
    /// Max explosion particle radius
    pub const EXPLOSION_MAX_RADIUS: f32 = 3.0;
    /// Opacity lost per tick by fading particles
    pub const PARTICLE_FADE_STEP: f32 = 0.01;
    /// Background star drift (pixels per tick)
    pub const STAR_SPEED: f32 = 0.3;
    /// Max background star radius
    pub const STAR_MAX_RADIUS: f32 = 2.0;

    /// Default fire-rate limit
    pub const FIRE_COOLDOWN: Duration = Duration::from_millis(100);
    /// Default delay between the lethal hit and the loop halting
    pub const GAME_OVER_DELAY: Duration = Duration::from_millis(2000);
}
