//! Data-driven game balance
//!
//! Every number the simulation reads comes from a `Tuning`. Defaults mirror
//! [`crate::consts`]; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Player physics ===
    /// Downward acceleration (pixels/s², positive)
    pub gravity: f32,
    /// Vertical velocity a flap sets (pixels/s, negative = up)
    pub flap_impulse: f32,
    /// Optional cap on downward speed. `None` keeps free fall uncapped.
    pub max_fall_speed: Option<f32>,
    pub player_start: Vec2,
    pub player_size: Vec2,

    // === Obstacles ===
    /// Horizontal scroll velocity (pixels/s, negative = leftward)
    pub scroll_speed: f32,
    pub spawn_interval_ms: u32,
    pub gap_height: f32,
    /// Inclusive range for the randomized gap center
    pub gap_center_min: i32,
    pub gap_center_max: i32,
    pub obstacle_width: f32,
    pub zone_width: f32,

    // === Timing ===
    /// Fixed step used by the driver
    pub sim_dt: f32,
    pub max_substeps: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            max_fall_speed: None,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),

            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gap_height: GAP_HEIGHT,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
            obstacle_width: OBSTACLE_WIDTH,
            zone_width: ZONE_WIDTH,

            sim_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Top edge of the highest possible gap
    pub fn min_gap_top(&self) -> f32 {
        self.gap_center_min as f32 - self.gap_height / 2.0
    }

    /// Bottom edge of the lowest possible gap
    pub fn max_gap_bottom(&self) -> f32 {
        self.gap_center_max as f32 + self.gap_height / 2.0
    }

    pub fn spawn_interval_secs(&self) -> f64 {
        crate::ms_to_secs(self.spawn_interval_ms)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(TuningError::invalid(
                "playfield",
                "dimensions must be positive",
            ));
        }
        if !(self.gravity > 0.0) {
            return Err(TuningError::invalid("gravity", "must be positive"));
        }
        if !(self.flap_impulse < 0.0) {
            return Err(TuningError::invalid("flap_impulse", "must point upward"));
        }
        if let Some(cap) = self.max_fall_speed {
            if !(cap > 0.0) {
                return Err(TuningError::invalid("max_fall_speed", "must be positive"));
            }
        }
        if !(self.scroll_speed < 0.0) {
            return Err(TuningError::invalid("scroll_speed", "must point leftward"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(TuningError::invalid("spawn_interval_ms", "must be non-zero"));
        }
        if !(self.gap_height > 0.0) {
            return Err(TuningError::invalid("gap_height", "must be positive"));
        }
        if self.gap_center_min > self.gap_center_max {
            return Err(TuningError::invalid(
                "gap_center_min",
                format!(
                    "{} is above gap_center_max {}",
                    self.gap_center_min, self.gap_center_max
                ),
            ));
        }
        // The gap may never touch the playfield edges
        if !(self.min_gap_top() > 0.0) {
            return Err(TuningError::invalid(
                "gap_center_min",
                "gap would touch the playfield top",
            ));
        }
        if !(self.max_gap_bottom() < self.playfield_height) {
            return Err(TuningError::invalid(
                "gap_center_max",
                "gap would touch the playfield bottom",
            ));
        }
        if !(self.obstacle_width > 0.0 && self.zone_width > 0.0) {
            return Err(TuningError::invalid(
                "obstacle_width",
                "obstacle and zone widths must be positive",
            ));
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0) {
            return Err(TuningError::invalid("player_size", "must be positive"));
        }
        let start_y = self.player_start.y;
        if !(start_y > 0.0 && start_y < self.playfield_height) {
            return Err(TuningError::invalid(
                "player_start",
                "must lie inside the playfield",
            ));
        }
        if !(self.sim_dt > 0.0) || self.max_substeps == 0 {
            return Err(TuningError::invalid(
                "sim_dt",
                "timestep and substep budget must be positive",
            ));
        }
        Ok(())
    }
}
