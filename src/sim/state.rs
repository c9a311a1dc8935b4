//! Game state and core simulation types
//!
//! A `GameSession` owns everything one run of the game needs. Nothing here
//! is global: drivers create a fresh session per run and pass it explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::score::ScoreLedger;
use super::spawner::ObstacleSpawner;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first press
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run ended. Terminal for the session.
    GameOver,
}

/// The player-controlled entity
///
/// `pos` is the center of the bounding box. The horizontal coordinate never
/// changes after spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    pub size: Vec2,
}

impl Player {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            vel_y: 0.0,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Replace vertical velocity with the impulse (never additive)
    #[inline]
    pub fn flap(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }

    /// Cosmetic tilt for renderers
    pub fn tilt(&self) -> f32 {
        crate::tilt_for_velocity(self.vel_y)
    }
}

/// Which member of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleSide {
    Top,
    Bottom,
}

/// One solid member of an obstacle pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pair_id: u32,
    pub side: ObstacleSide,
    pub bounds: Aabb,
    /// Horizontal velocity (pixels/s)
    pub vel_x: f32,
}

/// Invisible strip that awards one point when the player first touches it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringZone {
    pub pair_id: u32,
    pub bounds: Aabb,
    pub vel_x: f32,
    /// Latched once the zone has awarded its point
    pub scored: bool,
}

impl ScoringZone {
    /// Latch the zone. Returns true only on the false -> true transition.
    pub fn mark_scored(&mut self) -> bool {
        if self.scored {
            return false;
        }
        self.scored = true;
        true
    }
}

/// Top obstacle, bottom obstacle and scoring zone from one spawn event
///
/// Stored together so the three are always created and removed as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Vertical center of the gap
    pub gap_center: f32,
    pub top: Obstacle,
    pub bottom: Obstacle,
    pub zone: ScoringZone,
}

impl ObstaclePair {
    /// Rightmost edge of any member
    pub fn right_edge(&self) -> f32 {
        self.top
            .bounds
            .right()
            .max(self.bottom.bounds.right())
            .max(self.zone.bounds.right())
    }

    /// Every member has scrolled fully past the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn obstacles(&self) -> [&Obstacle; 2] {
        [&self.top, &self.bottom]
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Player left the playfield vertically
    OutOfBounds,
    /// Player touched an obstacle
    Collision { pair_id: u32, side: ObstacleSide },
}

/// Events emitted by the core for render-side reactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    PairSpawned { pair_id: u32, gap_center: f32 },
    Scored { pair_id: u32, score: u32, at: Vec2 },
    Lost { cause: LossCause, at: Vec2, final_score: u32 },
}

/// Complete state of one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Present only while playing
    pub player: Option<Player>,
    /// Active obstacle pairs (sorted by id)
    pub pairs: Vec<ObstaclePair>,
    pub ledger: ScoreLedger,
    pub spawner: ObstacleSpawner,
    /// Simulation ticks spent playing
    pub time_ticks: u64,
    /// Seconds spent playing
    pub elapsed: f64,
    /// Pairs (and therefore scoring zones) created this run
    pub pairs_spawned: u32,
    /// Zones whose `scored` latch has flipped this run
    pub zones_latched: u32,
    /// Events since the last drain (not part of the snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameSession {
    /// Fresh session sitting on the title screen
    pub fn new(tuning: Tuning) -> Self {
        let spawner = ObstacleSpawner::new(tuning.spawn_interval_secs());
        Self {
            tuning,
            phase: GamePhase::Title,
            player: None,
            pairs: Vec::new(),
            ledger: ScoreLedger::default(),
            spawner,
            time_ticks: 0,
            elapsed: 0.0,
            pairs_spawned: 0,
            zones_latched: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u32 {
        self.ledger.value()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
