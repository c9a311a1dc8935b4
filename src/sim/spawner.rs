//! Obstacle spawner
//!
//! On a fixed interval, creates a top/bottom obstacle pair plus its scoring
//! zone at the right edge of the playfield. Gap placement is random within a
//! range that keeps the gap clear of the playfield edges.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::clock::RecurringTimer;
use super::random::RandomSource;
use super::state::{GameEvent, GameSession, Obstacle, ObstaclePair, ObstacleSide, ScoringZone};
use crate::tuning::Tuning;

/// Recurring spawn schedule for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    timer: RecurringTimer,
}

impl ObstacleSpawner {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            timer: RecurringTimer::new(interval_secs),
        }
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn stop(&mut self) {
        self.timer.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Advance the schedule; returns the number of pairs due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.timer.advance(f64::from(dt))
    }
}

/// Build the three entities of one pair, entering at the right edge
pub fn build_pair(id: u32, gap_center: f32, tuning: &Tuning) -> ObstaclePair {
    let x = tuning.playfield_width;
    let width = tuning.obstacle_width;
    let height = tuning.playfield_height;
    let half_gap = tuning.gap_height / 2.0;
    let vel_x = tuning.scroll_speed;

    // Bottom edge of the top obstacle sits on the gap top
    let top = Obstacle {
        pair_id: id,
        side: ObstacleSide::Top,
        bounds: Aabb::new(x, gap_center - half_gap - height, width, height),
        vel_x,
    };
    let bottom = Obstacle {
        pair_id: id,
        side: ObstacleSide::Bottom,
        bounds: Aabb::new(x, gap_center + half_gap, width, height),
        vel_x,
    };
    let zone = ScoringZone {
        pair_id: id,
        bounds: Aabb::new(
            x + width / 2.0 - tuning.zone_width / 2.0,
            0.0,
            tuning.zone_width,
            height,
        ),
        vel_x,
        scored: false,
    };

    ObstaclePair {
        id,
        gap_center,
        top,
        bottom,
        zone,
    }
}

/// Spawn one pair into the session at a random gap position
pub fn spawn_pair(session: &mut GameSession, rng: &mut impl RandomSource) -> u32 {
    let gap_center = rng.between(
        session.tuning.gap_center_min,
        session.tuning.gap_center_max,
    ) as f32;
    let id = session.next_entity_id();
    let pair = build_pair(id, gap_center, &session.tuning);

    session.pairs.push(pair);
    session.pairs_spawned += 1;
    session.emit(GameEvent::PairSpawned {
        pair_id: id,
        gap_center,
    });
    log::debug!("Spawned pair {} with gap at y={}", id, gap_center);
    id
}

/// Drop pairs that have scrolled fully past the left edge
pub fn despawn_offscreen(session: &mut GameSession) -> usize {
    let before = session.pairs.len();
    session.pairs.retain(|p| !p.is_offscreen());
    let removed = before - session.pairs.len();
    if removed > 0 {
        log::trace!("Despawned {} pair(s)", removed);
    }
    removed
}
