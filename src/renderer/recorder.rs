//! A renderer that records draw calls instead of drawing

use glam::Vec2;

use super::{Color, Renderer};
use crate::sim::SpriteKind;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        pos: Vec2,
        radius: f32,
        color: Color,
        opacity: f32,
    },
    Rect {
        pos: Vec2,
        width: f32,
        height: f32,
        color: Color,
    },
    Sprite {
        sprite: SpriteKind,
        pos: Vec2,
        width: f32,
        height: f32,
        rotation: f32,
        opacity: f32,
    },
}

/// Keeps the draw calls of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
    /// Frames started (one per `clear`)
    pub frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self, kind: SpriteKind) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite, .. } if *sprite == kind))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn rects(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_circle(&mut self, pos: Vec2, radius: f32, color: Color, opacity: f32) {
        self.commands.push(DrawCommand::Circle {
            pos,
            radius,
            color,
            opacity,
        });
    }

    fn draw_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            pos,
            width,
            height,
            color,
        });
    }

    fn draw_sprite(
        &mut self,
        sprite: SpriteKind,
        pos: Vec2,
        width: f32,
        height: f32,
        rotation: f32,
        opacity: f32,
    ) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            width,
            height,
            rotation,
            opacity,
        });
    }
}
