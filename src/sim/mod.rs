//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Randomness only through a `RandomSource`
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod clock;
pub mod collision;
pub mod invariants;
pub mod machine;
pub mod motion;
pub mod random;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use clock::{FixedTimestep, RecurringTimer};
pub use collision::{Detection, detect, first_obstacle_hit, latch_scoring_zones, out_of_bounds};
pub use machine::Activation;
pub use motion::{integrate_fall, integrate_player, scroll_pair};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use score::ScoreLedger;
pub use spawner::{ObstacleSpawner, build_pair, despawn_offscreen, spawn_pair};
pub use state::{
    GameEvent, GamePhase, GameSession, LossCause, Obstacle, ObstaclePair, ObstacleSide, Player,
    ScoringZone,
};
pub use tick::{TickInput, tick};
