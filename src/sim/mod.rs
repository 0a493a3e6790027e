//! Deterministic physics module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No RNG (spawn randomness lives in the scene driver)
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod material;
pub mod state;
pub mod step;
pub mod visual;

pub use material::{Material, MaterialProps};
pub use state::{Body, BodyHandle, BodyPool, ContactEvent, SimState};
pub use step::step;
