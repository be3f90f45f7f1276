//! Game session and core simulation types
//!
//! Everything a tick reads or writes lives in one owned `GameSession`.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Spawner;
use super::entities::{InvaderProjectile, Particle, Player, Projectile, SpriteInfo, SpriteKind};
use super::grid::Grid;
use crate::error::{ConfigError, ensure_positive};
use crate::settings::Settings;

/// Current phase of the session.
///
/// `Playing` is `{active, !over}`, `Dying` is `{active, over}` (the explosion
/// is still animating) and `GameOver` is `{!active, over}` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Player destroyed at wall-clock time `since`
    Dying { since: Duration },
    GameOver,
}

impl GamePhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, GamePhase::GameOver)
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged { total: u64 },
    GridSpawned { grid_id: u32, invaders: usize, speed: f32 },
    InvaderDestroyed { grid_id: u32, invader_id: u32 },
    FormationCleared { grid_id: u32 },
    PlayerHit,
    GameOver { score: u64 },
}

/// Sprite dimensions reported by the host so far
#[derive(Debug, Clone, Default)]
pub struct Sprites {
    pub player: Option<SpriteInfo>,
    pub invader: Option<SpriteInfo>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub canvas: Vec2,
    pub fire_cooldown: Duration,
    pub game_over_delay: Duration,

    /// Score (never decreases)
    score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub spawner: Spawner,
    pub sprites: Sprites,

    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub invader_projectiles: Vec<InvaderProjectile>,
    pub grids: Vec<Grid>,
    /// Background stars and explosion debris
    pub particles: Vec<Particle>,

    /// Events produced by the ticks since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameSession {
    /// Create a session; `settings.seed` must be set by the caller or a
    /// fixed default seed is used.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or(0);
        let canvas = Vec2::new(settings.canvas_width, settings.canvas_height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..settings.star_count)
            .map(|_| Particle::star(&mut rng, canvas))
            .collect();

        log::info!(
            "New session: seed {}, canvas {}x{}",
            seed,
            canvas.x,
            canvas.y
        );

        Ok(Self {
            seed,
            rng,
            canvas,
            fire_cooldown: settings.fire_cooldown(),
            game_over_delay: settings.game_over_delay(),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            spawner: Spawner::new(&settings.difficulty),
            sprites: Sprites::default(),
            player: Player::new(),
            projectiles: Vec::new(),
            invader_projectiles: Vec::new(),
            grids: Vec::new(),
            particles,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add points and announce the new total
    pub fn add_score(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.events.push(GameEvent::ScoreChanged { total: self.score });
    }

    /// Resource-ready callback from the host.
    ///
    /// Entities pick the size up at the start of the next tick.
    pub fn sprite_loaded(
        &mut self,
        kind: SpriteKind,
        width: f32,
        height: f32,
    ) -> Result<(), ConfigError> {
        ensure_positive("sprite width", width as f64)?;
        ensure_positive("sprite height", height as f64)?;
        let info = SpriteInfo { width, height };
        log::debug!("Sprite {:?} ready: {}x{}", kind, width, height);
        match kind {
            SpriteKind::Player => self.sprites.player = Some(info),
            SpriteKind::Invader => self.sprites.invader = Some(info),
        }
        Ok(())
    }

    /// Spawn a random formation moving at `speed`
    pub fn spawn_grid(&mut self, speed: f32) -> u32 {
        let id = self.next_entity_id();
        let first_invader_id = self.next_id;
        let grid = Grid::spawn(id, &mut self.rng, speed, first_invader_id);
        self.next_id += grid.invaders.len() as u32;
        log::info!(
            "Grid {} spawned: {} invaders, width {}, speed {:.2}",
            id,
            grid.invaders.len(),
            grid.width,
            speed
        );
        self.events.push(GameEvent::GridSpawned {
            grid_id: id,
            invaders: grid.invaders.len(),
            speed,
        });
        self.grids.push(grid);
        id
    }

    /// Place a fixed `columns x rows` formation
    pub fn add_grid(
        &mut self,
        position: Vec2,
        columns: u32,
        rows: u32,
        velocity: Vec2,
    ) -> Result<u32, ConfigError> {
        let id = self.next_entity_id();
        let first_invader_id = self.next_id;
        let grid = Grid::with_layout(id, position, columns, rows, velocity, first_invader_id)?;
        self.next_id += grid.invaders.len() as u32;
        self.grids.push(grid);
        Ok(id)
    }

    pub fn invader_count(&self) -> usize {
        self.grids.iter().map(|g| g.live_count()).sum()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
