//! Ball Pit - a bouncing-ball physics showcase
//!
//! Core modules:
//! - `sim`: Deterministic physics (integration, collisions, body pool)
//! - `scene`: Scene lifecycle, spawn triggers, material cycling
//! - `tuning`: Data-driven physics balance

pub mod scene;
pub mod sim;
pub mod tuning;

pub use scene::{Scene, SceneInput};
pub use tuning::PhysicsTuning;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz reference cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// World extents (screen pixels, y grows downward)
    pub const SCREEN_W: f32 = 640.0;
    pub const SCREEN_H: f32 = 480.0;
    pub const FLOOR_Y: f32 = 420.0;

    /// Gravity, pixels/s^2 (downward-positive)
    pub const GRAVITY: f32 = 980.0;

    /// Body pool capacity
    pub const MAX_BODIES: usize = 16;

    /// Collision tuning (stability / stack settling)
    pub const COLLISION_SLOP: f32 = 0.5;
    pub const POSITION_CORRECT_PCT: f32 = 0.60;
}
