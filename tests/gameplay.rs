//! End-to-end scenarios driven through the public API

use std::time::Duration;

use glam::Vec2;
use space_invaders::platform::{Action, Keyboard, ManualClock};
use space_invaders::renderer::{DrawCommand, FrameRecorder, INVADER_DEBRIS};
use space_invaders::sim::{
    GameEvent, GamePhase, GameSession, InvaderProjectile, Projectile, SpriteKind, TickInput, tick,
};
use space_invaders::{Game, Settings};

const FRAME: Duration = Duration::from_millis(16);

fn settings() -> Settings {
    Settings {
        seed: Some(2024),
        canvas_width: 800.0,
        canvas_height: 600.0,
        star_count: 10,
        ..Default::default()
    }
}

/// One stationary 1x1 formation and a round flying straight at it
fn lone_invader() -> GameSession {
    let mut session = GameSession::new(&settings()).unwrap();
    session.sprite_loaded(SpriteKind::Invader, 30.0, 30.0).unwrap();
    session.spawner.frames = 1;
    session
        .add_grid(Vec2::new(200.0, 100.0), 1, 1, Vec2::ZERO)
        .unwrap();
    session
        .projectiles
        .push(Projectile::new(Vec2::new(215.0, 400.0), Vec2::new(0.0, -10.0)));
    session
}

fn run(session: &mut GameSession, input: &TickInput, ticks: u32, now: &mut Duration) {
    for _ in 0..ticks {
        *now += FRAME;
        tick(session, input, *now);
    }
}

#[test]
fn test_round_travels_and_clears_formation() {
    let mut session = lone_invader();
    let mut now = Duration::ZERO;
    let idle = TickInput::default();

    run(&mut session, &idle, 26, &mut now);
    assert_eq!(session.score(), 0);
    assert_eq!(session.invader_count(), 1);

    run(&mut session, &idle, 1, &mut now);
    assert_eq!(session.score(), 1100);
    assert!(session.grids.is_empty());
    assert_eq!(session.invader_count(), 0);
    assert!(session.projectiles.is_empty());

    let debris = session.particles.iter().filter(|p| p.fades).count();
    assert_eq!(debris, 15);

    let events = session.drain_events();
    assert!(events.contains(&GameEvent::FormationCleared { grid_id: 1 }));
    assert!(events.contains(&GameEvent::ScoreChanged { total: 1100 }));
}

#[test]
fn test_debris_fades_out() {
    let mut session = lone_invader();
    let mut now = Duration::ZERO;
    run(&mut session, &TickInput::default(), 27, &mut now);
    assert!(session.particles.iter().any(|p| p.fades));

    // Opacity drops by 0.01 per tick
    run(&mut session, &TickInput::default(), 110, &mut now);
    assert!(session.particles.iter().all(|p| !p.fades));
    assert_eq!(session.particles.len(), 10);
}

#[test]
fn test_game_over_freezes_world() {
    let mut session = GameSession::new(&settings()).unwrap();
    session.sprite_loaded(SpriteKind::Player, 400.0, 200.0).unwrap();
    session.spawner.frames = 1;
    let mut now = Duration::ZERO;
    run(&mut session, &TickInput::default(), 1, &mut now);

    // Ship top at y 550, spanning x 370..430
    session
        .invader_projectiles
        .push(InvaderProjectile::new(Vec2::new(400.0, 545.0), Vec2::ZERO));
    run(&mut session, &TickInput::default(), 1, &mut now);
    assert!(matches!(session.phase, GamePhase::Dying { .. }));
    assert_eq!(session.player.opacity, 0.0);

    // Steering is ignored while dying
    let x = session.player.body.position.x;
    let left = TickInput {
        left: true,
        fire_held: true,
        ..Default::default()
    };
    run(&mut session, &left, 10, &mut now);
    assert_eq!(session.player.body.position.x, x);
    assert!(session.projectiles.is_empty());

    now += Duration::from_secs(2);
    tick(&mut session, &left, now);
    assert_eq!(session.phase, GamePhase::GameOver);
    let ticks = session.time_ticks;
    let score = session.score();

    run(&mut session, &left, 50, &mut now);
    assert_eq!(session.time_ticks, ticks);
    assert_eq!(session.score(), score);
}

#[test]
fn test_game_driver_session() {
    let mut game = Game::new(
        &settings(),
        FrameRecorder::new(),
        Keyboard::new(),
        Vec::<u64>::new(),
        ManualClock::new(),
    )
    .unwrap();

    // Nothing is drawn for entities without a sprite yet
    game.clock().advance(FRAME);
    assert!(game.frame());
    assert_eq!(game.renderer().sprites(SpriteKind::Invader), 0);
    assert_eq!(game.renderer().sprites(SpriteKind::Player), 0);

    game.sprite_loaded(SpriteKind::Player, 400.0, 200.0).unwrap();
    game.sprite_loaded(SpriteKind::Invader, 30.0, 30.0).unwrap();
    game.clock().advance(FRAME);
    game.frame();
    let invaders = game.session().invader_count();
    assert!(invaders >= 10);
    assert_eq!(game.renderer().sprites(SpriteKind::Invader), invaders);
    assert_eq!(game.renderer().sprites(SpriteKind::Player), 1);

    // Held fire is rate limited by wall-clock time, not frames
    game.input_mut().press(Action::Fire);
    for _ in 0..10 {
        game.clock().advance(FRAME);
        game.frame();
    }
    assert_eq!(game.session().projectiles.len(), 2);
    assert!(game.renderer().commands.iter().all(|c| !matches!(
        c,
        DrawCommand::Circle { color, .. } if *color == INVADER_DEBRIS
    )));
    assert!(game.score_sink().is_empty());
}
