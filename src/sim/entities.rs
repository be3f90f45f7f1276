//! Player, projectiles, particles and invaders
//!
//! Entities only hold state and their own per-tick rule. Anything that needs
//! two collections at once (collisions, spawning) lives in `collision`/`tick`.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::kinematics::{Body, Rect};
use super::tick::TickInput;
use crate::consts::*;

/// Sprites whose dimensions are only known once the host has loaded them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Invader,
}

/// Loaded image dimensions (before entity scaling)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub width: f32,
    pub height: f32,
}

impl SpriteInfo {
    #[inline]
    pub fn scaled(&self, scale: f32) -> Vec2 {
        Vec2::new(self.width, self.height) * scale
    }
}

/// Particle colour, resolved to RGBA by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Stars and player debris
    White,
    /// Invader debris
    InvaderDebris,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Tilt while strafing (radians)
    pub rotation: f32,
    /// 1.0 alive, 0.0 destroyed
    pub opacity: f32,
    /// Unknown until the player sprite is ready
    pub size: Option<Vec2>,
    /// Wall-clock time of the last shot
    pub last_shot: Option<Duration>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            body: Body::default(),
            rotation: 0.0,
            opacity: 1.0,
            size: None,
            last_shot: None,
        }
    }

    /// Second construction phase: size the ship and park it bottom-centre
    pub fn resolve_sprite(&mut self, sprite: SpriteInfo, canvas: Vec2) {
        let size = sprite.scaled(PLAYER_SPRITE_SCALE);
        self.size = Some(size);
        self.body.position = Vec2::new(
            canvas.x / 2.0 - size.x / 2.0,
            canvas.y - size.y - PLAYER_BOTTOM_MARGIN,
        );
    }

    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.size.map(|size| Rect::new(self.body.position, size))
    }

    /// Pick velocity and tilt from held input.
    ///
    /// A move is only issued while the ship is still inside the canvas on
    /// that side; `update` clamps whatever overshoot remains.
    pub fn steer(&mut self, input: &TickInput, canvas_width: f32) {
        self.body.velocity.x = 0.0;
        self.rotation = 0.0;

        let Some(size) = self.size else { return };
        let x = self.body.position.x;

        if input.left && x >= 0.0 {
            self.body.velocity.x = -PLAYER_SPEED;
            self.rotation = -PLAYER_TILT;
        } else if input.right && x + size.x <= canvas_width {
            self.body.velocity.x = PLAYER_SPEED;
            self.rotation = PLAYER_TILT;
        }
    }

    /// Stop moving and level out (used once the game is over)
    pub fn halt(&mut self) {
        self.body.velocity = Vec2::ZERO;
        self.rotation = 0.0;
    }

    pub fn update(&mut self, canvas_width: f32) {
        let Some(size) = self.size else { return };
        self.body.advance();
        let max_x = (canvas_width - size.x).max(0.0);
        self.body.position.x = self.body.position.x.clamp(0.0, max_x);
    }

    /// Fire if the wall-clock cooldown has elapsed
    pub fn try_fire(&mut self, now: Duration, cooldown: Duration) -> Option<Projectile> {
        let size = self.size?;
        if self
            .last_shot
            .is_some_and(|last| now.saturating_sub(last) < cooldown)
        {
            return None;
        }
        self.last_shot = Some(now);
        Some(Projectile::new(
            Vec2::new(self.body.position.x + size.x / 2.0, self.body.position.y),
            Vec2::new(0.0, -PROJECTILE_SPEED),
        ))
    }

    /// Lethal hit: the ship stays in the world but becomes invisible
    pub fn destroy(&mut self) {
        self.opacity = 0.0;
        self.halt();
    }
}

/// Player-fired round (circle)
#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Body,
    pub radius: f32,
    /// Consumed by a hit or gone off-screen; removed at end of tick
    pub spent: bool,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            body: Body::new(position, velocity),
            radius: PROJECTILE_RADIUS,
            spent: false,
        }
    }

    /// Fully above the top edge
    pub fn is_off_screen(&self) -> bool {
        self.body.position.y + self.radius <= 0.0
    }

    pub fn update(&mut self) {
        self.body.advance();
    }
}

/// Invader-fired round (rectangle)
#[derive(Debug, Clone)]
pub struct InvaderProjectile {
    pub body: Body,
    pub size: Vec2,
    pub spent: bool,
}

impl InvaderProjectile {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            body: Body::new(position, velocity),
            size: Vec2::new(INVADER_PROJECTILE_WIDTH, INVADER_PROJECTILE_HEIGHT),
            spent: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.body.position, self.size)
    }

    /// Bottom edge reached the bottom of the canvas
    pub fn is_off_screen(&self, canvas_height: f32) -> bool {
        self.body.position.y + self.size.y >= canvas_height
    }

    pub fn update(&mut self) {
        self.body.advance();
    }
}

/// Explosion debris (`fades`) or background star
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub radius: f32,
    pub tint: Tint,
    pub opacity: f32,
    pub fades: bool,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, tint: Tint, fades: bool) -> Self {
        Self {
            body: Body::new(position, velocity),
            radius,
            tint,
            opacity: 1.0,
            fades,
        }
    }

    /// A background star somewhere on the canvas
    pub fn star<R: Rng>(rng: &mut R, canvas: Vec2) -> Self {
        Self::new(
            Vec2::new(rng.random::<f32>() * canvas.x, rng.random::<f32>() * canvas.y),
            Vec2::new(0.0, STAR_SPEED),
            rng.random::<f32>() * STAR_MAX_RADIUS,
            Tint::White,
            false,
        )
    }

    /// Fading debris that has run out of opacity
    pub fn is_expired(&self) -> bool {
        self.fades && self.opacity <= 0.0
    }

    pub fn update(&mut self) {
        self.body.advance();
        if self.fades {
            self.opacity = (self.opacity - PARTICLE_FADE_STEP).max(0.0);
        }
    }

    /// Stars that drifted past the bottom re-enter from the top
    pub fn wrap<R: Rng>(&mut self, rng: &mut R, canvas: Vec2) {
        if !self.fades && self.body.position.y - self.radius >= canvas.y {
            self.body.position.x = rng.random::<f32>() * canvas.x;
            self.body.position.y = -self.radius;
        }
    }
}

/// A single formation member. Moves with its grid's velocity.
#[derive(Debug, Clone)]
pub struct Invader {
    pub id: u32,
    pub position: Vec2,
    /// Unknown until the invader sprite is ready
    pub size: Option<Vec2>,
    pub alive: bool,
}

impl Invader {
    pub fn new(id: u32, position: Vec2) -> Self {
        Self {
            id,
            position,
            size: None,
            alive: true,
        }
    }

    pub fn resolve_sprite(&mut self, sprite: SpriteInfo) {
        self.size = Some(sprite.scaled(INVADER_SPRITE_SCALE));
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.size.map(|size| Rect::new(self.position, size))
    }

    /// Advance by the owning grid's velocity
    #[inline]
    pub fn update(&mut self, grid_velocity: Vec2) {
        self.position += grid_velocity;
    }

    /// Drop a round from the invader's bottom-centre
    pub fn shoot(&self) -> Option<InvaderProjectile> {
        let size = self.size?;
        Some(InvaderProjectile::new(
            Vec2::new(self.position.x + size.x / 2.0, self.position.y + size.y),
            Vec2::new(0.0, INVADER_PROJECTILE_SPEED),
        ))
    }
}
