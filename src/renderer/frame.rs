//! Per-tick snapshot handed to sinks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, GamePhase, GameSession, ObstacleSide};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub bounds: Aabb,
    pub vel_y: f32,
    /// Cosmetic rotation (radians)
    pub tilt: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub pair_id: u32,
    pub side: ObstacleSide,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneView {
    pub pair_id: u32,
    pub bounds: Aabb,
    pub scored: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub playfield: Vec2,
    pub player: Option<PlayerView>,
    pub obstacles: Vec<ObstacleView>,
    pub zones: Vec<ZoneView>,
}

impl RenderFrame {
    pub fn capture(session: &GameSession) -> Self {
        let player = session.player.as_ref().map(|p| PlayerView {
            bounds: p.bounds(),
            vel_y: p.vel_y,
            tilt: p.tilt(),
        });

        let obstacles = session
            .pairs
            .iter()
            .flat_map(|p| p.obstacles())
            .map(|o| ObstacleView {
                pair_id: o.pair_id,
                side: o.side,
                bounds: o.bounds,
            })
            .collect();

        let zones = session
            .pairs
            .iter()
            .map(|p| ZoneView {
                pair_id: p.id,
                bounds: p.zone.bounds,
                scored: p.zone.scored,
            })
            .collect();

        Self {
            tick: session.time_ticks,
            phase: session.phase,
            score: session.score(),
            playfield: Vec2::new(
                session.tuning.playfield_width,
                session.tuning.playfield_height,
            ),
            player,
            obstacles,
            zones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScriptedRandom, spawn_pair};
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_title() {
        let session = GameSession::new(Tuning::default());
        let frame = RenderFrame::capture(&session);
        assert_eq!(frame.phase, GamePhase::Title);
        assert!(frame.player.is_none());
        assert!(frame.obstacles.is_empty());
        assert_eq!(frame.playfield, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_capture_playing() {
        let mut session = GameSession::new(Tuning::default());
        session.start();
        session.flap();
        spawn_pair(&mut session, &mut ScriptedRandom::new(vec![250]));

        let frame = RenderFrame::capture(&session);
        let player = frame.player.unwrap();
        assert_eq!(player.bounds, Aabb::new(90.0, 290.0, 20.0, 20.0));
        assert_eq!(player.tilt, -0.4);
        assert_eq!(frame.obstacles.len(), 2);
        assert_eq!(frame.zones.len(), 1);
        assert!(!frame.zones[0].scored);
    }
}
