//! Rendering boundary
//!
//! The game never touches a graphics API. It describes each frame through the
//! `Renderer` trait; hosts implement it on top of whatever surface they have.

pub mod recorder;
pub mod scene;

pub use recorder::{DrawCommand, FrameRecorder};
pub use scene::draw;

use glam::Vec2;

use crate::sim::{SpriteKind, Tint};

/// Linear RGBA, 0-1
pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
/// #BAA0DE
pub const INVADER_DEBRIS: Color = rgb(0xBA, 0xA0, 0xDE);

/// Opaque colour from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Resolve a particle tint
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::White => WHITE,
        Tint::InvaderDebris => INVADER_DEBRIS,
    }
}

/// 2D drawing surface
pub trait Renderer {
    /// Fill the whole surface with the background
    fn clear(&mut self);

    fn draw_circle(&mut self, pos: Vec2, radius: f32, color: Color, opacity: f32);

    /// Axis-aligned rectangle, `pos` is the top-left corner
    fn draw_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color);

    /// Sprite at top-left `pos`, rotated about its centre
    fn draw_sprite(
        &mut self,
        sprite: SpriteKind,
        pos: Vec2,
        width: f32,
        height: f32,
        rotation: f32,
        opacity: f32,
    );
}
