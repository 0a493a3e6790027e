//! Data-driven physics balance
//!
//! Every world constant and settling threshold the solver consults lives
//! here, so a tuning pass edits JSON instead of code. Defaults reproduce
//! the shipped feel; partial overrides are fine (missing fields fall back
//! to defaults).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Thresholds for the resting-contact classification
///
/// Three solver sites suppress micro-bounce jitter (floor rebound damping,
/// the per-body hard stop, and resting-pair zeroing). They all read this
/// one set of thresholds so the classification cannot drift between sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestingTuning {
    /// Impact speeds below this are candidates for rest (px/s)
    pub approach_speed: f32,
    /// Post-bounce speeds below this trigger extra damping (px/s)
    pub rebound_speed: f32,
    /// Extra velocity multiplier applied when nearly resting
    pub damp: f32,
    /// Velocity components below this snap to exactly zero (px/s)
    pub snap_speed: f32,
    /// Combined-velocity threshold for the floor hard stop (px/s)
    pub stop_speed: f32,
}

impl Default for RestingTuning {
    fn default() -> Self {
        Self {
            approach_speed: 120.0,
            rebound_speed: 6.0,
            damp: 0.80,
            snap_speed: 2.0,
            stop_speed: 2.5,
        }
    }
}

/// World and solver tuning consumed by [`sim::step`](crate::sim::step)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Gravity, px/s^2, downward-positive
    pub gravity: f32,
    /// Floor line (balls rest at floor_y - radius)
    pub floor_y: f32,
    /// Left wall position
    pub wall_left: f32,
    /// Right wall position
    pub wall_right: f32,
    /// Penetration tolerated before positional correction kicks in (px)
    pub collision_slop: f32,
    /// Fraction of remaining overlap corrected per pass
    pub position_correct_pct: f32,
    /// Pairwise impulse passes per step. One pass is enough for shallow
    /// piles of up to 16 balls; raise it if deeper stacking is wanted.
    pub solver_iterations: u32,
    pub resting: RestingTuning,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            floor_y: FLOOR_Y,
            wall_left: 0.0,
            wall_right: SCREEN_W,
            collision_slop: COLLISION_SLOP,
            position_correct_pct: POSITION_CORRECT_PCT,
            solver_iterations: 1,
            resting: RestingTuning::default(),
        }
    }
}

impl PhysicsTuning {
    /// Parse tuning from JSON; unspecified fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
