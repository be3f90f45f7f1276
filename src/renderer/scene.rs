//! Per-frame draw pass

use super::{RED, Renderer, WHITE, tint_color};
use crate::sim::{GameSession, SpriteKind};

/// Draw the current session state.
///
/// Back to front: background and debris, ship, rounds, formations. Entities
/// whose sprite size is still unknown are skipped.
pub fn draw(session: &GameSession, renderer: &mut dyn Renderer) {
    renderer.clear();

    for particle in &session.particles {
        renderer.draw_circle(
            particle.body.position,
            particle.radius,
            tint_color(particle.tint),
            particle.opacity,
        );
    }

    let player = &session.player;
    if let Some(size) = player.size {
        renderer.draw_sprite(
            SpriteKind::Player,
            player.body.position,
            size.x,
            size.y,
            player.rotation,
            player.opacity,
        );
    }

    for projectile in &session.projectiles {
        renderer.draw_circle(projectile.body.position, projectile.radius, RED, 1.0);
    }

    for projectile in &session.invader_projectiles {
        renderer.draw_rect(
            projectile.body.position,
            projectile.size.x,
            projectile.size.y,
            WHITE,
        );
    }

    for invader in session.grids.iter().flat_map(|g| g.invaders.iter()) {
        if let Some(size) = invader.size {
            renderer.draw_sprite(SpriteKind::Invader, invader.position, size.x, size.y, 0.0, 1.0);
        }
    }
}
