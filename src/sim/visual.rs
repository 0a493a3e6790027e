//! Visual feedback mapping
//!
//! Turns collision events into squash/stretch targets and impact glow.
//! These values are write-only from the solver's perspective; the renderer
//! reads them and never feeds them back into the physics.

use glam::Vec2;

use super::state::Body;

/// Squash interpolation rate per step
const SQUASH_LERP: f32 = 0.2;
/// Rate the squash target relaxes back toward a sphere per step
const TARGET_RELAX: f32 = 0.1;
/// Glow decay per step
const GLOW_DECAY: f32 = 0.95;

/// Set deformation and glow targets from a floor impact
pub fn apply_floor_impact(body: &mut Body, impact_speed: f32) {
    let base = (impact_speed / 500.0).clamp(0.0, 0.5);
    let amount = base * body.material.squash_factor();
    // Flatten vertically, bulge horizontally
    body.squash_target = Vec2::new(1.0 + amount, 1.0 - amount * 0.7);
    body.glow_intensity = (impact_speed / 300.0).clamp(0.0, 1.0);
}

/// Stretch along the motion axis while clearly airborne (inverse of the
/// impact squash)
pub fn apply_flight_stretch(body: &mut Body) {
    let amount = (body.vel.y.abs() / 800.0).clamp(0.0, 0.3);
    body.squash_target = Vec2::new(1.0 - amount * 0.5, 1.0 + amount);
}

/// Per-step exponential smoothing: squash chases its target, the target
/// relaxes toward a sphere, glow fades
pub fn relax(body: &mut Body) {
    body.squash += (body.squash_target - body.squash) * SQUASH_LERP;
    body.squash_target += (Vec2::ONE - body.squash_target) * TARGET_RELAX;
    body.glow_intensity *= GLOW_DECAY;
}
