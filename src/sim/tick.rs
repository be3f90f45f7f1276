//! Per-frame simulation tick
//!
//! Advances the session by one frame. Entities are only marked dead while
//! the collections are walked; the compaction pass at the end of the tick
//! removes them all at once.

use std::time::Duration;

use super::collision::{explosion, invader_projectile_hits_player, resolve_grid_hits};
use super::entities::Tint;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;

/// Input state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Strafe left held
    pub left: bool,
    /// Strafe right held
    pub right: bool,
    /// Fire held (auto-fire, rate limited)
    pub fire_held: bool,
    /// Fire pressed since the last tick
    pub fire_pressed: bool,
}

impl TickInput {
    pub fn wants_fire(&self) -> bool {
        self.fire_held || self.fire_pressed
    }
}

/// Advance the session by one frame.
///
/// `now` is the host's wall-clock time; it drives the fire cooldown and the
/// game-over delay so both are independent of the frame rate.
pub fn tick(state: &mut GameSession, input: &TickInput, now: Duration) {
    if let GamePhase::Dying { since } = state.phase {
        if now.saturating_sub(since) >= state.game_over_delay {
            state.phase = GamePhase::GameOver;
            log::info!("Game over, final score {}", state.score());
            state.events.push(GameEvent::GameOver {
                score: state.score(),
            });
        }
    }

    // Terminal: nothing moves any more
    if !state.phase.is_active() {
        return;
    }

    state.time_ticks += 1;

    resolve_sprites(state);
    update_player(state, input, now);
    update_particles(state);
    update_invader_projectiles(state, now);
    update_projectiles(state);
    update_grids(state);
    compact(state);

    if let Some(speed) = state.spawner.advance() {
        state.spawn_grid(speed);
    }
}

/// Hand sprite sizes to entities still waiting on them
fn resolve_sprites(state: &mut GameSession) {
    if let Some(sprite) = state.sprites.player {
        if !state.player.is_ready() {
            state.player.resolve_sprite(sprite, state.canvas);
            log::debug!("Player sized at {:?}", state.player.size);
        }
    }

    if let Some(sprite) = state.sprites.invader {
        for grid in state.grids.iter_mut().filter(|g| !g.is_ready()) {
            grid.resolve_sprites(sprite);
        }
    }
}

fn update_player(state: &mut GameSession, input: &TickInput, now: Duration) {
    let canvas_width = state.canvas.x;

    if state.phase.is_over() {
        state.player.halt();
    } else {
        state.player.steer(input, canvas_width);
    }
    state.player.update(canvas_width);

    if state.phase.is_over() || !input.wants_fire() {
        return;
    }
    if let Some(projectile) = state.player.try_fire(now, state.fire_cooldown) {
        state.projectiles.push(projectile);
    }
}

fn update_particles(state: &mut GameSession) {
    let canvas = state.canvas;
    for particle in state.particles.iter_mut() {
        particle.wrap(&mut state.rng, canvas);
        particle.update();
    }
}

fn update_invader_projectiles(state: &mut GameSession, now: Duration) {
    let canvas_height = state.canvas.y;
    for projectile in state.invader_projectiles.iter_mut() {
        if projectile.is_off_screen(canvas_height) {
            projectile.spent = true;
        } else {
            projectile.update();
        }
    }

    if state.phase.is_over() {
        return;
    }

    let player = &state.player;
    let lethal = state
        .invader_projectiles
        .iter_mut()
        .filter(|p| !p.spent)
        .find(|p| invader_projectile_hits_player(p, player));

    if let Some(projectile) = lethal {
        projectile.spent = true;
        destroy_player(state, now);
    }
}

/// Lethal hit: hide the ship, start the game-over countdown, blow it up
fn destroy_player(state: &mut GameSession, now: Duration) {
    let center = state.player.bounds().map(|b| b.center());
    state.player.destroy();
    state.phase = GamePhase::Dying { since: now };
    state.events.push(GameEvent::PlayerHit);
    log::info!(
        "Player hit at score {}, halting in {:?}",
        state.score(),
        state.game_over_delay
    );

    if let Some(center) = center {
        let burst = explosion(&mut state.rng, center, Tint::White);
        state.particles.extend(burst);
    }
}

fn update_projectiles(state: &mut GameSession) {
    for projectile in state.projectiles.iter_mut() {
        if projectile.is_off_screen() {
            projectile.spent = true;
        } else {
            projectile.update();
        }
    }
}

fn update_grids(state: &mut GameSession) {
    let canvas_width = state.canvas.x;
    let volley = state.spawner.frames % INVADER_SHOOT_INTERVAL == 0;
    let mut hits = Vec::new();

    for grid in state.grids.iter_mut() {
        // Members without a size cannot move in step or be hit; retry next tick
        if !grid.is_ready() {
            continue;
        }

        grid.move_members();
        hits.extend(resolve_grid_hits(grid, &mut state.projectiles));
        // Members and box have both moved by now; shrink the box last
        grid.step(canvas_width);
        grid.compact();

        if volley {
            if let Some(shot) = grid.shoot(&mut state.rng) {
                state.invader_projectiles.push(shot);
            }
        }
    }

    for hit in hits {
        state.add_score(INVADER_KILL_SCORE);
        state.events.push(GameEvent::InvaderDestroyed {
            grid_id: hit.grid_id,
            invader_id: hit.invader_id,
        });
        let burst = explosion(&mut state.rng, hit.center, Tint::InvaderDebris);
        state.particles.extend(burst);
    }
}

/// End-of-tick removal of everything marked dead this tick
fn compact(state: &mut GameSession) {
    state.particles.retain(|p| !p.is_expired());
    state.projectiles.retain(|p| !p.spent);
    state.invader_projectiles.retain(|p| !p.spent);

    let mut cleared = Vec::new();
    state.grids.retain(|grid| {
        if grid.is_empty() {
            cleared.push(grid.id);
            false
        } else {
            true
        }
    });

    for grid_id in cleared {
        log::info!("Grid {} cleared", grid_id);
        state.add_score(FORMATION_CLEAR_BONUS);
        state.events.push(GameEvent::FormationCleared { grid_id });
    }
}
