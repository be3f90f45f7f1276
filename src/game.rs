//! Host-facing game driver
//!
//! Owns a session together with the four host boundaries and runs one
//! frame at a time: read the clock, poll input, tick, publish the score,
//! draw.

use crate::error::ConfigError;
use crate::platform::{Clock, Input, ScoreSink, poll};
use crate::renderer::{Renderer, draw};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameSession, SpriteKind, tick};

pub struct Game<R, I, S, C> {
    session: GameSession,
    renderer: R,
    input: I,
    score_sink: S,
    clock: C,
}

impl<R, I, S, C> Game<R, I, S, C>
where
    R: Renderer,
    I: Input,
    S: ScoreSink,
    C: Clock,
{
    pub fn new(
        settings: &Settings,
        renderer: R,
        input: I,
        score_sink: S,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            session: GameSession::new(settings)?,
            renderer,
            input,
            score_sink,
            clock,
        })
    }

    /// Run one frame. Returns false once the session is over for good.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now();
        let input = poll(&mut self.input);
        tick(&mut self.session, &input, now);

        for event in self.session.drain_events() {
            match event {
                GameEvent::ScoreChanged { total } => self.score_sink.on_score_changed(total),
                GameEvent::GameOver { score } => log::info!("Session ended with {}", score),
                other => log::trace!("{:?}", other),
            }
        }

        draw(&self.session, &mut self.renderer);
        self.session.phase.is_active()
    }

    /// Forward a sprite-ready notification from the host
    pub fn sprite_loaded(
        &mut self,
        kind: SpriteKind,
        width: f32,
        height: f32,
    ) -> Result<(), ConfigError> {
        self.session.sprite_loaded(kind, width, height)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn score_sink(&self) -> &S {
        &self.score_sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
