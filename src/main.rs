//! Space Invaders headless runner
//!
//! Plays a session on autopilot with a simulated 60 Hz clock and logs the
//! outcome. Usage: `space-invaders [settings.json]`

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use space_invaders::platform::{Action, Input, LogScoreSink, ManualClock};
use space_invaders::renderer::FrameRecorder;
use space_invaders::sim::SpriteKind;
use space_invaders::{ConfigError, Game, Settings};

const FRAME: Duration = Duration::from_nanos(16_666_667);
/// Five minutes of play
const MAX_FRAMES: u64 = 60 * 60 * 5;
/// Frames before the sprite images "finish loading"
const SPRITE_LOAD_FRAMES: u64 = 3;

/// Sweeps the ship across the screen while holding fire
#[derive(Debug, Default)]
struct Autopilot {
    frame: u64,
}

impl Input for Autopilot {
    fn is_held(&self, action: Action) -> bool {
        let sweep_right = (self.frame / 90) % 2 == 0;
        match action {
            Action::StrafeLeft => !sweep_right,
            Action::StrafeRight => sweep_right,
            Action::Fire => true,
        }
    }

    fn take_fire_press(&mut self) -> bool {
        self.frame += 1;
        false
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if settings.seed.is_none() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        settings.seed = Some(seed);
    }

    let mut game = Game::new(
        &settings,
        FrameRecorder::new(),
        Autopilot::default(),
        LogScoreSink::default(),
        ManualClock::new(),
    )?;

    let mut frames = 0;
    while frames < MAX_FRAMES {
        if frames == SPRITE_LOAD_FRAMES {
            game.sprite_loaded(SpriteKind::Player, 400.0, 200.0)?;
            game.sprite_loaded(SpriteKind::Invader, 30.0, 30.0)?;
        }
        game.clock().advance(FRAME);
        frames += 1;
        if !game.frame() {
            break;
        }
    }

    let session = game.session();
    log::info!(
        "Finished after {} frames ({} ticks): score {}, {} invaders on screen, last frame {} draw calls",
        frames,
        session.time_ticks,
        session.score(),
        session.invader_count(),
        game.renderer().commands.len()
    );
    Ok(())
}
