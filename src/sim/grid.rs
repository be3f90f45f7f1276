//! Invader formations
//!
//! A grid moves as one rigid body: every member is advanced by the grid's
//! velocity, the grid bounces off the side edges and drops by a single-tick
//! descend impulse on every bounce.

use glam::Vec2;
use rand::Rng;

use super::entities::{Invader, InvaderProjectile, SpriteInfo};
use crate::consts::*;
use crate::error::ConfigError;

/// A formation of invaders
#[derive(Debug, Clone)]
pub struct Grid {
    pub id: u32,
    pub position: Vec2,
    /// x: horizontal sweep, y: one-shot descend step
    pub velocity: Vec2,
    /// Horizontal extent of the surviving members
    pub width: f32,
    /// Column-major; order is preserved across removals
    pub invaders: Vec<Invader>,
}

impl Grid {
    /// Lay out `columns x rows` invaders on the formation cell grid.
    ///
    /// Invader ids are `first_invader_id..first_invader_id + columns * rows`.
    pub fn with_layout(
        id: u32,
        position: Vec2,
        columns: u32,
        rows: u32,
        velocity: Vec2,
        first_invader_id: u32,
    ) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyFormation { columns, rows });
        }
        Ok(Self::build(id, position, columns, rows, velocity, first_invader_id))
    }

    /// Random formation in the top-left corner moving right at `speed`
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, speed: f32, first_invader_id: u32) -> Self {
        let columns = rng.random_range(GRID_MIN_COLUMNS..=GRID_MAX_COLUMNS);
        let rows = rng.random_range(GRID_MIN_ROWS..=GRID_MAX_ROWS);
        Self::build(
            id,
            Vec2::ZERO,
            columns,
            rows,
            Vec2::new(speed, 0.0),
            first_invader_id,
        )
    }

    fn build(
        id: u32,
        position: Vec2,
        columns: u32,
        rows: u32,
        velocity: Vec2,
        first_invader_id: u32,
    ) -> Self {
        let mut invaders = Vec::with_capacity((columns * rows) as usize);
        let mut next_id = first_invader_id;
        for col in 0..columns {
            for row in 0..rows {
                let offset = Vec2::new(col as f32, row as f32) * INVADER_SPACING;
                invaders.push(Invader::new(next_id, position + offset));
                next_id += 1;
            }
        }

        Self {
            id,
            position,
            velocity,
            width: columns as f32 * INVADER_SPACING,
            invaders,
        }
    }

    pub fn live_count(&self) -> usize {
        self.invaders.iter().filter(|i| i.alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    /// True once every member has its size
    pub fn is_ready(&self) -> bool {
        self.invaders.iter().all(|i| i.size.is_some())
    }

    /// Size members that are still waiting on the invader sprite
    pub fn resolve_sprites(&mut self, sprite: SpriteInfo) {
        for invader in self.invaders.iter_mut().filter(|i| i.size.is_none()) {
            invader.resolve_sprite(sprite);
        }
    }

    /// Advance every live member by the grid's velocity
    pub fn move_members(&mut self) {
        let velocity = self.velocity;
        for invader in self.invaders.iter_mut().filter(|i| i.alive) {
            invader.update(velocity);
        }
    }

    /// Drop dead members and shrink the bounding box to the survivors.
    ///
    /// The box is taken from where the members are now, so within a tick
    /// this runs after `step`. Returns the number of members removed.
    pub fn compact(&mut self) -> usize {
        let before = self.invaders.len();
        self.invaders.retain(|i| i.alive);
        let removed = before - self.invaders.len();
        if removed > 0 {
            self.recompute_bounds();
        }
        removed
    }

    fn recompute_bounds(&mut self) {
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        for invader in &self.invaders {
            let width = invader.size.map_or(INVADER_SPACING, |s| s.x);
            left = left.min(invader.position.x);
            right = right.max(invader.position.x + width);
        }
        if left.is_finite() && right.is_finite() {
            self.position.x = left;
            self.width = right - left;
        } else {
            self.width = 0.0;
        }
    }

    /// Move the grid itself and bounce off the side edges.
    ///
    /// The descend impulse is cleared every tick before the edge check, so
    /// it applies to exactly one subsequent tick.
    pub fn step(&mut self, canvas_width: f32) {
        self.position += self.velocity;
        self.velocity.y = 0.0;

        if self.position.x + self.width >= canvas_width || self.position.x <= 0.0 {
            self.velocity.x = -self.velocity.x;
            self.velocity.y = GRID_DESCEND_STEP;
        }
    }

    /// A uniformly random live member fires
    pub fn shoot<R: Rng>(&self, rng: &mut R) -> Option<InvaderProjectile> {
        let live: Vec<&Invader> = self.invaders.iter().filter(|i| i.alive).collect();
        if live.is_empty() {
            return None;
        }
        let index = rng.random_range(0..live.len());
        live[index].shoot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SPRITE: SpriteInfo = SpriteInfo {
        width: 30.0,
        height: 30.0,
    };

    fn grid(columns: u32, rows: u32) -> Grid {
        let mut grid =
            Grid::with_layout(1, Vec2::new(100.0, 50.0), columns, rows, Vec2::new(3.0, 0.0), 1)
                .unwrap();
        grid.resolve_sprites(SPRITE);
        grid
    }

    #[test]
    fn test_spawn_dimensions_in_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..200 {
            let grid = Grid::spawn(id, &mut rng, 3.0, 1);
            let count = grid.invaders.len() as u32;
            let columns = (grid.width / INVADER_SPACING) as u32;
            assert!((GRID_MIN_COLUMNS..=GRID_MAX_COLUMNS).contains(&columns));
            let rows = count / columns;
            assert_eq!(rows * columns, count);
            assert!((GRID_MIN_ROWS..=GRID_MAX_ROWS).contains(&rows));
            assert_eq!(grid.velocity, Vec2::new(3.0, 0.0));
            assert_eq!(grid.position, Vec2::ZERO);
        }
    }

    #[test]
    fn test_layout_is_column_major() {
        let grid = grid(3, 2);
        let positions: Vec<Vec2> = grid.invaders.iter().map(|i| i.position).collect();
        assert_eq!(positions[0], Vec2::new(100.0, 50.0));
        assert_eq!(positions[1], Vec2::new(100.0, 90.0));
        assert_eq!(positions[2], Vec2::new(140.0, 50.0));
        assert_eq!(positions[5], Vec2::new(180.0, 90.0));
        assert_eq!(grid.width, 120.0);
    }

    #[test]
    fn test_empty_layout_rejected() {
        let err = Grid::with_layout(1, Vec2::ZERO, 0, 3, Vec2::ZERO, 1).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFormation { columns: 0, rows: 3 }));
    }

    #[test]
    fn test_bounce_is_single_tick_descend() {
        let mut grid = grid(2, 1);
        grid.position.x = 700.0 - grid.width - 2.0;
        grid.step(700.0);
        assert_eq!(grid.velocity, Vec2::new(-3.0, GRID_DESCEND_STEP));

        let y = grid.position.y;
        grid.step(700.0);
        assert_eq!(grid.position.y, y + GRID_DESCEND_STEP);
        assert_eq!(grid.velocity.y, 0.0);

        grid.step(700.0);
        assert_eq!(grid.position.y, y + GRID_DESCEND_STEP);
    }

    #[test]
    fn test_members_follow_grid_velocity() {
        let mut grid = grid(2, 2);
        grid.velocity = Vec2::new(-3.0, 30.0);
        grid.move_members();
        assert_eq!(grid.invaders[0].position, Vec2::new(97.0, 80.0));
        assert_eq!(grid.invaders[3].position, Vec2::new(137.0, 120.0));
    }

    #[test]
    fn test_compact_recomputes_bounds() {
        let mut grid = grid(3, 1);
        // Kill the leftmost column
        grid.invaders[0].alive = false;
        assert_eq!(grid.compact(), 1);
        assert_eq!(grid.position.x, 140.0);
        assert_eq!(grid.width, 40.0 + SPRITE.width);

        // Kill the rightmost, leaving the middle one
        grid.invaders[1].alive = false;
        grid.compact();
        assert_eq!(grid.invaders.len(), 1);
        assert_eq!(grid.position.x, 140.0);
        assert_eq!(grid.width, SPRITE.width);
    }

    #[test]
    fn test_compact_preserves_order() {
        let mut grid = grid(2, 3);
        grid.invaders[1].alive = false;
        grid.invaders[4].alive = false;
        grid.compact();
        let ids: Vec<u32> = grid.invaders.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_shooter_can_be_last_member() {
        let grid = grid(3, 1);
        let mut rng = Pcg32::seed_from_u64(3);
        let last_x = grid.invaders[2].position.x + SPRITE.width / 2.0;
        let hit_last = (0..500)
            .filter_map(|_| grid.shoot(&mut rng))
            .any(|p| (p.body.position.x - last_x).abs() < 1e-3);
        assert!(hit_last);
    }

    #[test]
    fn test_dead_members_never_shoot() {
        let mut grid = grid(3, 1);
        grid.invaders[0].alive = false;
        grid.invaders[1].alive = false;
        let mut rng = Pcg32::seed_from_u64(9);
        let only_x = grid.invaders[2].position.x + SPRITE.width / 2.0;
        for _ in 0..50 {
            let shot = grid.shoot(&mut rng).unwrap();
            assert_eq!(shot.body.position.x, only_x);
        }
    }
}
