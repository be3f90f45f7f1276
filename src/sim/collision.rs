//! Collision detection between rounds and ships
//!
//! Player rounds are circles, invaders and the player are boxes. Hits only
//! mark entities (`spent` / `alive = false`); removal happens in a later
//! compaction pass so no collection is mutated while it is being walked.

use glam::Vec2;
use rand::Rng;

use super::entities::{Invader, InvaderProjectile, Particle, Player, Projectile, Tint};
use super::grid::Grid;
use super::kinematics::Rect;
use crate::consts::{EXPLOSION_MAX_RADIUS, EXPLOSION_PARTICLES};

/// An invader destroyed by a player round this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvaderHit {
    pub grid_id: u32,
    pub invader_id: u32,
    /// Centre of the invader (explosion origin)
    pub center: Vec2,
}

/// Circle vs box: the circle's bounding square must overlap the box on all
/// four sides
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.y - radius <= rect.bottom()
        && center.x + radius >= rect.left()
        && center.x - radius <= rect.right()
        && center.y + radius >= rect.top()
}

/// Player round vs invader. Unsized invaders cannot be hit.
pub fn projectile_hits_invader(projectile: &Projectile, invader: &Invader) -> bool {
    invader.bounds().is_some_and(|rect| {
        circle_overlaps_rect(projectile.body.position, projectile.radius, &rect)
    })
}

/// Invader round vs player ship.
///
/// Only the round's bottom edge is tested vertically: anything at or below
/// the ship's top line within its horizontal span counts.
pub fn invader_projectile_hits_player(projectile: &InvaderProjectile, player: &Player) -> bool {
    let Some(ship) = player.bounds() else {
        return false;
    };
    let round = projectile.bounds();
    round.bottom() >= ship.top() && round.right() >= ship.left() && round.left() <= ship.right()
}

/// Test every live member of `grid` against every unspent round.
///
/// The first overlapping round kills the invader and is spent; neither can
/// take part in another hit this tick.
pub fn resolve_grid_hits(grid: &mut Grid, projectiles: &mut [Projectile]) -> Vec<InvaderHit> {
    let mut hits = Vec::new();

    for invader in grid.invaders.iter_mut().filter(|i| i.alive) {
        let Some(rect) = invader.bounds() else {
            continue;
        };

        let hit = projectiles
            .iter_mut()
            .filter(|p| !p.spent)
            .find(|p| circle_overlaps_rect(p.body.position, p.radius, &rect));

        if let Some(projectile) = hit {
            projectile.spent = true;
            invader.alive = false;
            hits.push(InvaderHit {
                grid_id: grid.id,
                invader_id: invader.id,
                center: rect.center(),
            });
            log::trace!("Invader {} hit in grid {}", invader.id, grid.id);
        }
    }

    hits
}

/// Burst of fading debris
pub fn explosion<R: Rng>(rng: &mut R, center: Vec2, tint: Tint) -> Vec<Particle> {
    (0..EXPLOSION_PARTICLES)
        .map(|_| {
            let velocity = Vec2::new(
                (rng.random::<f32>() - 0.5) * 2.0,
                (rng.random::<f32>() - 0.5) * 2.0,
            );
            let radius = rng.random::<f32>() * EXPLOSION_MAX_RADIUS;
            Particle::new(center, velocity, radius, tint, true)
        })
        .collect()
}
