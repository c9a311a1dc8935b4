//! Simulation tick
//!
//! Core game loop step. The phase gates everything: Title only listens for
//! the start press, GameOver ignores everything, Playing runs the full step.

use crate::consts::MAX_FRAME_DT;

use super::collision::detect;
use super::machine::Activation;
use super::motion::{integrate_player, scroll_pair};
use super::random::RandomSource;
use super::spawner::{despawn_offscreen, spawn_pair};
use super::state::{GameEvent, GamePhase, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start or flap (click/tap/space)
    pub activate: bool,
}

impl TickInput {
    pub fn activate() -> Self {
        Self { activate: true }
    }
}

/// Advance the session by `dt` seconds
///
/// Order within a playing tick:
/// 1. activation (flap)
/// 2. motion of the player and of every pair that existed at tick start
/// 3. spawning (new pairs start moving next tick)
/// 4. despawn of pairs fully past the left edge
/// 5. loss checks, then scoring if the run is still alive
///
/// A non-finite `dt` is ignored and a finite one is clamped to
/// `[0, MAX_FRAME_DT]`.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32, rng: &mut impl RandomSource) {
    if input.activate && session.activate() == Activation::Started {
        // The start press only sets the stage
        return;
    }

    if session.phase != GamePhase::Playing {
        return;
    }

    if !dt.is_finite() {
        log::warn!("Ignoring non-finite tick dt {}", dt);
        return;
    }
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    session.time_ticks += 1;
    session.elapsed += f64::from(dt);

    let gravity = session.tuning.gravity;
    let max_fall_speed = session.tuning.max_fall_speed;
    if let Some(player) = session.player.as_mut() {
        integrate_player(player, gravity, max_fall_speed, dt);
    }
    for pair in &mut session.pairs {
        scroll_pair(pair, dt);
    }

    let due = session.spawner.advance(dt);
    for _ in 0..due {
        spawn_pair(session, rng);
    }

    despawn_offscreen(session);

    let playfield_height = session.tuning.playfield_height;
    let Some(player) = session.player.as_ref() else {
        return;
    };
    let at = player.pos;
    let detection = detect(player, &mut session.pairs, playfield_height);

    if let Some(cause) = detection.loss {
        session.end(cause);
    } else {
        for pair_id in detection.scored {
            session.zones_latched += 1;
            let score = session.ledger.record();
            session.emit(GameEvent::Scored { pair_id, score, at });
            log::debug!("Scored through pair {}, score {}", pair_id, score);
        }
    }

    debug_assert_eq!(session.check_invariants(), Ok(()));
}
