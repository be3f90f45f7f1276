//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Wall-clock time only enters through `tick`'s `now` argument
//! - Stable iteration order (insertion order, preserved on removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entities;
pub mod grid;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use collision::{
    InvaderHit, explosion, invader_projectile_hits_player, projectile_hits_invader,
    resolve_grid_hits,
};
pub use difficulty::Spawner;
pub use entities::{
    Invader, InvaderProjectile, Particle, Player, Projectile, SpriteInfo, SpriteKind, Tint,
};
pub use grid::Grid;
pub use kinematics::{Body, Rect};
pub use state::{GameEvent, GamePhase, GameSession, Sprites};
pub use tick::{TickInput, tick};
