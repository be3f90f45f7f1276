//! Property tests over random input sequences

use std::time::Duration;

use proptest::prelude::*;
use space_invaders::sim::{GameSession, Spawner, SpriteKind, TickInput, tick};
use space_invaders::{DifficultyTuning, Settings};

fn session(seed: u64) -> GameSession {
    let settings = Settings {
        seed: Some(seed),
        canvas_width: 800.0,
        canvas_height: 600.0,
        star_count: 20,
        ..Default::default()
    };
    let mut session = GameSession::new(&settings).unwrap();
    session.sprite_loaded(SpriteKind::Player, 400.0, 200.0).unwrap();
    session.sprite_loaded(SpriteKind::Invader, 30.0, 30.0).unwrap();
    session
}

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, fire_held, fire_pressed)| TickInput {
            left,
            right,
            fire_held,
            fire_pressed,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_score_never_decreases(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut session = session(seed);
        let mut now = Duration::ZERO;
        let mut last = 0;
        for input in &inputs {
            now += Duration::from_millis(16);
            tick(&mut session, input, now);
            prop_assert!(session.score() >= last);
            prop_assert_eq!(session.score() % 100, 0);
            last = session.score();
        }
    }

    #[test]
    fn prop_player_stays_on_canvas(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut session = session(seed);
        let mut now = Duration::ZERO;
        for input in &inputs {
            now += Duration::from_millis(16);
            tick(&mut session, input, now);
            let size = session.player.size.unwrap();
            let x = session.player.body.position.x;
            prop_assert!(x >= 0.0);
            prop_assert!(x + size.x <= session.canvas.x + 1e-3);
        }
    }

    #[test]
    fn prop_same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut a = session(seed);
        let mut b = session(seed);
        let mut now = Duration::ZERO;
        for input in &inputs {
            now += Duration::from_millis(16);
            tick(&mut a, input, now);
            tick(&mut b, input, now);
        }
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a.phase, b.phase);
        prop_assert_eq!(a.player.body.position, b.player.body.position);
        let positions = |s: &GameSession| -> Vec<_> {
            s.grids
                .iter()
                .flat_map(|g| g.invaders.iter().map(|i| i.position))
                .collect()
        };
        prop_assert_eq!(positions(&a), positions(&b));
        prop_assert_eq!(a.invader_projectiles.len(), b.invader_projectiles.len());
    }

    #[test]
    fn prop_ramp_respects_limits(
        initial in 200u32..2000,
        min in 1u32..200,
        step in 0.0f32..1.0,
        ticks in 1u32..20_000,
    ) {
        let tuning = DifficultyTuning {
            initial_spawn_interval: initial,
            min_spawn_interval: min,
            grid_speed_step: step,
            ..Default::default()
        };
        let mut spawner = Spawner::new(&tuning);
        let mut speed = spawner.grid_speed;
        for _ in 0..ticks {
            if let Some(next) = spawner.advance() {
                prop_assert!(next >= speed);
                speed = next;
            }
            prop_assert!(spawner.spawn_interval >= min);
            prop_assert!(spawner.grid_speed <= tuning.max_grid_speed);
        }
    }
}
