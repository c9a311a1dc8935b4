//! End-to-end scenarios driven through `tick`

use approx::assert_relative_eq;
use heart_flap::Tuning;
use heart_flap::sim::{
    GameEvent, GamePhase, GameSession, LossCause, ObstaclePair, ObstacleSide, ScriptedRandom,
    TickInput, spawn_pair, tick,
};

const DT: f32 = 1.0 / 60.0;

fn started(tuning: Tuning, rng: &mut ScriptedRandom) -> GameSession {
    let mut session = GameSession::new(tuning);
    tick(&mut session, &TickInput::activate(), DT, rng);
    assert_eq!(session.phase, GamePhase::Playing);
    session.drain_events();
    session
}

/// Slide a pair horizontally so its zone is centered on `x`
fn center_zone_on(pair: &mut ObstaclePair, x: f32) {
    let dx = x - pair.zone.bounds.center().x;
    pair.top.bounds.translate_x(dx);
    pair.bottom.bounds.translate_x(dx);
    pair.zone.bounds.translate_x(dx);
}

#[test]
fn free_fall_matches_projectile_motion() {
    // Tall playfield so the player is still inside after a full second
    let tuning = Tuning {
        playfield_height: 2000.0,
        ..Tuning::default()
    };
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(tuning, &mut rng);

    for _ in 0..60 {
        tick(&mut session, &TickInput::default(), DT, &mut rng);
    }

    let player = session.player.as_ref().expect("still playing");
    assert_relative_eq!(player.pos.y, 300.0 + 0.5 * 900.0 * 1.0, epsilon = 0.05);
    assert_relative_eq!(player.vel_y, 900.0, epsilon = 0.05);
    assert_eq!(player.pos.x, 100.0);
}

#[test]
fn spawner_emits_two_pairs_in_three_seconds() {
    // Barely any gravity keeps the player hovering in the scripted gaps
    let tuning = Tuning {
        gravity: 1.0,
        ..Tuning::default()
    };
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(tuning, &mut rng);

    let mut spawn_events = 0;
    for _ in 0..180 {
        tick(&mut session, &TickInput::default(), DT, &mut rng);
        spawn_events += session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PairSpawned { .. }))
            .count();
    }

    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.pairs_spawned, 2);
    assert_eq!(spawn_events, 2);
    assert_eq!(session.pairs.len(), 2);
    // Each spawn brings exactly one zone
    assert!(session.pairs.iter().all(|p| !p.zone.scored));
}

#[test]
fn overlapping_obstacle_ends_game() {
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(Tuning::default(), &mut rng);
    let id = spawn_pair(&mut session, &mut rng);
    session.drain_events();

    let pair = &mut session.pairs[0];
    pair.bottom.bounds = heart_flap::sim::Aabb::new(80.0, 280.0, 60.0, 600.0);
    assert_eq!(
        session.player.as_ref().unwrap().bounds(),
        heart_flap::sim::Aabb::new(90.0, 290.0, 20.0, 20.0)
    );

    tick(&mut session, &TickInput::default(), 0.0, &mut rng);

    assert_eq!(session.phase, GamePhase::GameOver);
    assert!(session.player.is_none());
    assert!(session.pairs.is_empty());
    let events = session.drain_events();
    assert!(events.contains(&GameEvent::Lost {
        cause: LossCause::Collision {
            pair_id: id,
            side: ObstacleSide::Bottom
        },
        at: glam::Vec2::new(100.0, 300.0),
        final_score: 0,
    }));
}

#[test]
fn zone_scores_only_once() {
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(Tuning::default(), &mut rng);
    spawn_pair(&mut session, &mut rng);
    spawn_pair(&mut session, &mut rng);
    let idle = TickInput::default();

    // Zone 1 under the player, zone 2 off to the right
    center_zone_on(&mut session.pairs[0], 100.0);
    tick(&mut session, &idle, 0.0, &mut rng);
    assert_eq!(session.score(), 1);

    // Zone 2 under the player, zone 1 moved away
    center_zone_on(&mut session.pairs[0], 300.0);
    center_zone_on(&mut session.pairs[1], 100.0);
    tick(&mut session, &idle, 0.0, &mut rng);
    assert_eq!(session.score(), 2);

    // Back over zone 1
    center_zone_on(&mut session.pairs[1], 300.0);
    center_zone_on(&mut session.pairs[0], 100.0);
    tick(&mut session, &idle, 0.0, &mut rng);
    tick(&mut session, &idle, 0.0, &mut rng);

    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.score(), 2);
    assert_eq!(session.zones_latched, 2);
    let scored: Vec<u32> = session
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Scored { score, .. } => Some(score),
            _ => None,
        })
        .collect();
    assert_eq!(scored, vec![1, 2]);
}

#[test]
fn scrolling_pair_scores_and_despawns() {
    let tuning = Tuning {
        gravity: 1.0,
        ..Tuning::default()
    };
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(tuning, &mut rng);

    // First pair spawns at 1.5s, reaches the player ~1.5s later and
    // leaves the screen after 2.3s of travel
    for _ in 0..(60 * 4) {
        tick(&mut session, &TickInput::default(), DT, &mut rng);
    }

    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.score(), 1);
    assert!(session.pairs.iter().all(|p| p.id != 1));
}

#[test]
fn game_over_absorbs_further_ticks() {
    let mut rng = ScriptedRandom::new(vec![300]);
    let mut session = started(Tuning::default(), &mut rng);
    while session.phase == GamePhase::Playing {
        tick(&mut session, &TickInput::default(), DT, &mut rng);
    }
    let final_score = session.ledger.final_value();
    let spawned = session.pairs_spawned;

    for i in 0..300 {
        let input = TickInput {
            activate: i % 3 == 0,
        };
        tick(&mut session, &input, DT, &mut rng);
    }

    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.pairs_spawned, spawned);
    assert_eq!(session.ledger.final_value(), final_score);
    assert!(session.player.is_none());
}
