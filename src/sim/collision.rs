//! Collision and overlap detection
//!
//! The player is tested against every active obstacle (loss) and every
//! active scoring zone (points). All tests are plain AABB overlap.

use super::aabb::Aabb;
use super::state::{LossCause, ObstaclePair, ObstacleSide, Player};

/// Outcome of one detection pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    /// Set when the run must end this tick
    pub loss: Option<LossCause>,
    /// Pairs whose zone latched this tick, in pair order
    pub scored: Vec<u32>,
}

/// Player center has left the playfield vertically
#[inline]
pub fn out_of_bounds(player: &Player, playfield_height: f32) -> bool {
    player.pos.y <= 0.0 || player.pos.y >= playfield_height
}

/// First obstacle the player overlaps, if any
///
/// Stops at the first hit.
pub fn first_obstacle_hit(player: &Aabb, pairs: &[ObstaclePair]) -> Option<(u32, ObstacleSide)> {
    pairs
        .iter()
        .flat_map(|p| p.obstacles())
        .find(|o| player.overlaps(&o.bounds))
        .map(|o| (o.pair_id, o.side))
}

/// Latch every unscored zone the player overlaps
///
/// Zones that already scored are skipped, so each zone yields at most one
/// point over its lifetime.
pub fn latch_scoring_zones(player: &Aabb, pairs: &mut [ObstaclePair]) -> Vec<u32> {
    pairs
        .iter_mut()
        .filter(|p| !p.zone.scored && player.overlaps(&p.zone.bounds))
        .filter_map(|p| p.zone.mark_scored().then_some(p.id))
        .collect()
}

/// Run the full detection pass for one tick
///
/// Loss conditions are checked first; when one fires, no zone is latched.
pub fn detect(player: &Player, pairs: &mut [ObstaclePair], playfield_height: f32) -> Detection {
    if out_of_bounds(player, playfield_height) {
        return Detection {
            loss: Some(LossCause::OutOfBounds),
            scored: Vec::new(),
        };
    }

    let bounds = player.bounds();
    if let Some((pair_id, side)) = first_obstacle_hit(&bounds, pairs) {
        return Detection {
            loss: Some(LossCause::Collision { pair_id, side }),
            scored: Vec::new(),
        };
    }

    Detection {
        loss: None,
        scored: latch_scoring_zones(&bounds, pairs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::build_pair;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Vec2::splat(20.0))
    }

    #[test]
    fn test_bounds_inclusive_edges() {
        assert!(out_of_bounds(&player_at(100.0, 0.0), 600.0));
        assert!(out_of_bounds(&player_at(100.0, 600.0), 600.0));
        assert!(out_of_bounds(&player_at(100.0, -5.0), 600.0));
        assert!(!out_of_bounds(&player_at(100.0, 0.5), 600.0));
        assert!(!out_of_bounds(&player_at(100.0, 599.5), 600.0));
    }

    #[test]
    fn test_hit_top_obstacle() {
        let tuning = Tuning::default();
        let mut pair = build_pair(4, 300.0, &tuning);
        // Slide the pair over the player
        let dx = 90.0 - pair.top.bounds.left();
        pair.top.bounds.translate_x(dx);
        pair.bottom.bounds.translate_x(dx);
        pair.zone.bounds.translate_x(dx);

        let player = player_at(100.0, 215.0);
        let mut pairs = vec![pair];
        let detection = detect(&player, &mut pairs, 600.0);
        assert_eq!(
            detection.loss,
            Some(LossCause::Collision {
                pair_id: 4,
                side: ObstacleSide::Top
            })
        );
        assert!(detection.scored.is_empty());
        // Loss short-circuits scoring: zone stays unlatched
        assert!(!pairs[0].zone.scored);
    }

    #[test]
    fn test_pass_through_gap_scores_once() {
        let tuning = Tuning::default();
        let mut pair = build_pair(2, 300.0, &tuning);
        let dx = 95.0 - pair.zone.bounds.left();
        pair.top.bounds.translate_x(dx);
        pair.bottom.bounds.translate_x(dx);
        pair.zone.bounds.translate_x(dx);
        let mut pairs = vec![pair];

        let player = player_at(100.0, 300.0);
        assert_eq!(detect(&player, &mut pairs, 600.0).scored, vec![2]);
        assert!(pairs[0].zone.scored);
        assert!(detect(&player, &mut pairs, 600.0).scored.is_empty());
    }

    #[test]
    fn test_far_pairs_are_clear() {
        let tuning = Tuning::default();
        let mut pairs = vec![build_pair(1, 300.0, &tuning)];
        let detection = detect(&player_at(100.0, 300.0), &mut pairs, 600.0);
        assert_eq!(detection, Detection::default());
    }
}
