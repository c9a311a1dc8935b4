//! Runtime invariant checks
//!
//! Cheap enough to run after every tick in debug builds and tests.

use super::state::{GamePhase, GameSession};
use crate::error::InvariantViolation;

impl GameSession {
    /// Verify the structural invariants of the session
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        match (self.phase, self.player.is_some()) {
            (GamePhase::Playing, false) => return Err(InvariantViolation::MissingPlayer),
            (GamePhase::Title | GamePhase::GameOver, true) => {
                return Err(InvariantViolation::PlayerOutsidePlaying { phase: self.phase });
            }
            _ => {}
        }

        if self.phase == GamePhase::GameOver && !self.pairs.is_empty() {
            return Err(InvariantViolation::EntitiesAfterGameOver {
                count: self.pairs.len(),
            });
        }

        let score = self.score();
        if score > self.pairs_spawned {
            return Err(InvariantViolation::ScoreExceedsZones {
                score,
                spawned: self.pairs_spawned,
            });
        }
        if score != self.zones_latched {
            return Err(InvariantViolation::ScoreLatchMismatch {
                score,
                latched: self.zones_latched,
            });
        }

        let mut last_id = 0;
        for pair in &self.pairs {
            if pair.id <= last_id {
                return Err(InvariantViolation::PairOrder { pair_id: pair.id });
            }
            last_id = pair.id;

            let members_match = pair.top.pair_id == pair.id
                && pair.bottom.pair_id == pair.id
                && pair.zone.pair_id == pair.id;
            if !members_match {
                return Err(InvariantViolation::MismatchedPair { pair_id: pair.id });
            }
        }

        Ok(())
    }
}
