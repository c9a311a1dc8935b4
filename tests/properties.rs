//! Property tests for the simulation invariants

use glam::Vec2;
use heart_flap::Tuning;
use heart_flap::sim::{
    GamePhase, GameSession, LossCause, Player, SeededRandom, TickInput, integrate_fall,
    spawn_pair, tick,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_monotone_and_bounded(
        seed in any::<u64>(),
        presses in prop::collection::vec(prop::bool::weighted(0.08), 1..1500),
    ) {
        let mut session = GameSession::new(Tuning::default());
        let mut rng = SeededRandom::new(seed);
        let mut last_score = 0;

        for press in presses {
            tick(&mut session, &TickInput { activate: press }, 1.0 / 120.0, &mut rng);
            let score = session.score();
            prop_assert!(score >= last_score);
            prop_assert!(score <= session.pairs_spawned);
            prop_assert_eq!(session.check_invariants(), Ok(()));
            last_score = score;
        }
    }

    #[test]
    fn flap_sets_impulse_exactly(prior in -5000.0f32..5000.0, impulse in -900.0f32..-1.0) {
        let mut player = Player::new(Vec2::new(100.0, 300.0), Vec2::splat(20.0));
        player.vel_y = prior;
        player.flap(impulse);
        prop_assert_eq!(player.vel_y, impulse);
        player.flap(impulse);
        prop_assert_eq!(player.vel_y, impulse);
    }

    #[test]
    fn free_fall_follows_closed_form(
        y0 in 50.0f32..550.0,
        gravity in 100.0f32..2000.0,
        steps in 1usize..240,
        hz in prop::sample::select(vec![30.0f32, 60.0, 120.0, 144.0]),
    ) {
        let dt = 1.0 / hz;
        let (mut y, mut v) = (y0, 0.0f32);
        for _ in 0..steps {
            (y, v) = integrate_fall(y, v, gravity, dt);
        }
        let t = steps as f32 * dt;
        let expected = y0 + 0.5 * gravity * t * t;
        prop_assert!((y - expected).abs() <= 1e-3 * expected.abs().max(1.0));
        prop_assert!((v - gravity * t).abs() <= 1e-3 * (gravity * t).max(1.0));
    }

    #[test]
    fn gaps_keep_fixed_height_and_clear_edges(seed in any::<u64>()) {
        let tuning = Tuning::default();
        let mut session = GameSession::new(tuning.clone());
        let mut rng = SeededRandom::new(seed);
        for _ in 0..50 {
            spawn_pair(&mut session, &mut rng);
        }
        for pair in &session.pairs {
            let gap = pair.bottom.bounds.top() - pair.top.bounds.bottom();
            prop_assert_eq!(gap, tuning.gap_height);
            prop_assert!(pair.top.bounds.bottom() > 0.0);
            prop_assert!(pair.bottom.bounds.top() < tuning.playfield_height);
        }
    }

    #[test]
    fn game_over_is_terminal(
        seed in any::<u64>(),
        presses in prop::collection::vec(any::<bool>(), 1..300),
    ) {
        let mut session = GameSession::new(Tuning::default());
        let mut rng = SeededRandom::new(seed);
        tick(&mut session, &TickInput::activate(), 1.0 / 120.0, &mut rng);
        session.end(LossCause::OutOfBounds);
        session.drain_events();

        for press in presses {
            tick(&mut session, &TickInput { activate: press }, 1.0 / 60.0, &mut rng);
        }

        prop_assert_eq!(session.phase, GamePhase::GameOver);
        prop_assert!(session.player.is_none());
        prop_assert!(session.pairs.is_empty());
        prop_assert_eq!(session.pairs_spawned, 0);
        prop_assert_eq!(session.score(), 0);
        prop_assert!(session.drain_events().is_empty());
    }
}
