//! Fixed timestep physics step
//!
//! Advances the whole pool by one step: integrate under gravity, resolve
//! floor and wall contacts, then resolve ball-ball contacts with a
//! sequential impulse pass plus positional correction.

use glam::Vec2;

use super::state::{Body, BodyHandle, ContactEvent, SimState};
use super::visual;
use crate::tuning::PhysicsTuning;

/// Advance the simulation by one fixed timestep.
///
/// `dt` is nominally 1/60 s; other values are accepted but the resting
/// thresholds in [`PhysicsTuning`] are tuned for that cadence.
pub fn step(state: &mut SimState, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    let tuning = state.tuning;

    // Integrate, boundaries, visual relaxation
    for (handle, body) in state.pool.iter_active_mut() {
        integrate(body, &tuning, dt);

        if let Some(speed) = resolve_floor(body, &tuning) {
            visual::apply_floor_impact(body, speed);
            state
                .events
                .push(ContactEvent::FloorImpact { body: handle, speed });
        }
        if let Some(speed) = resolve_walls(body, &tuning) {
            state
                .events
                .push(ContactEvent::WallImpact { body: handle, speed });
        }

        // Clearly airborne: stretch along the fall axis
        if body.pos.y + body.radius < tuning.floor_y - 5.0 {
            visual::apply_flight_stretch(body);
        }
        visual::relax(body);

        // Hard stop for balls crawling on the floor
        if body.on_floor(tuning.floor_y)
            && body.vel.x.abs() < tuning.resting.stop_speed
            && body.vel.y.abs() < tuning.resting.stop_speed
        {
            body.vel = Vec2::ZERO;
        }
    }

    // Ball-ball contacts, all pairs in slot order
    for _ in 0..tuning.solver_iterations.max(1) {
        let n = state.pool.slot_count();
        for i in 0..n {
            for j in (i + 1)..n {
                if !state.pool.slot(i).active || !state.pool.slot(j).active {
                    continue;
                }
                let (a, b) = state.pool.pair_mut(i, j);
                if let Some(speed) = resolve_pair(a, b, &tuning) {
                    state.events.push(ContactEvent::BodyImpact {
                        a: BodyHandle(i as u32),
                        b: BodyHandle(j as u32),
                        speed,
                    });
                }
            }
        }
    }
}

/// Semi-implicit Euler under constant gravity
fn integrate(body: &mut Body, tuning: &PhysicsTuning, dt: f32) {
    body.vel.y += tuning.gravity * dt;
    body.pos += body.vel * dt;
}

/// Floor contact: clamp, reflect with restitution, apply surface friction.
/// Returns the pre-impact downward speed when a bounce happened.
fn resolve_floor(body: &mut Body, tuning: &PhysicsTuning) -> Option<f32> {
    if body.pos.y + body.radius <= tuning.floor_y {
        return None;
    }
    body.pos.y = tuning.floor_y - body.radius;

    // Only bounce if moving downward into the floor
    if body.vel.y <= 0.0 {
        return None;
    }
    let pre_impact = body.vel.y;

    body.vel.y = -pre_impact * body.restitution;
    body.vel.x *= body.friction;

    // Near-resting impacts get extra damping so micro-bounces die out
    // instead of jittering forever on floating point residue
    let resting = &tuning.resting;
    if pre_impact.abs() < resting.approach_speed && body.vel.y.abs() < resting.rebound_speed {
        body.vel *= resting.damp;
        settle(&mut body.vel, resting.snap_speed);
    }

    Some(pre_impact.abs())
}

/// Side walls: clamp and reflect with restitution, no friction.
/// Returns the pre-impact horizontal speed when a wall was hit.
fn resolve_walls(body: &mut Body, tuning: &PhysicsTuning) -> Option<f32> {
    let mut impact = None;
    if body.pos.x - body.radius < tuning.wall_left {
        body.pos.x = tuning.wall_left + body.radius;
        impact = Some(body.vel.x.abs());
        body.vel.x = -body.vel.x * body.restitution;
    }
    if body.pos.x + body.radius > tuning.wall_right {
        body.pos.x = tuning.wall_right - body.radius;
        impact = Some(body.vel.x.abs());
        body.vel.x = -body.vel.x * body.restitution;
    }
    impact
}

/// Resolve one overlapping pair: positional correction split by inverse
/// mass, then a normal impulse and a Coulomb-clamped friction impulse.
/// Returns the closing speed along the normal when an impulse was applied.
fn resolve_pair(a: &mut Body, b: &mut Body, tuning: &PhysicsTuning) -> Option<f32> {
    let delta = b.pos - a.pos;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;
    if dist_sq >= min_dist * min_dist {
        return None;
    }

    let mut dist = dist_sq.sqrt();
    let normal = if dist < 1e-4 {
        // Coincident centers: arbitrary unit normal, no NaN
        dist = 1.0;
        Vec2::X
    } else {
        delta / dist
    };

    // Positional correction (prevents sinking, leaves slop uncorrected so
    // resting contacts don't jitter)
    let overlap = min_dist - dist;
    let correction = (overlap - tuning.collision_slop).max(0.0) * tuning.position_correct_pct;

    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    let inv_sum = inv_a + inv_b; // mass >= 1, so strictly positive

    a.pos -= normal * (correction * (inv_a / inv_sum));
    b.pos += normal * (correction * (inv_b / inv_sum));

    let rel_vel = b.vel - a.vel;
    let vel_along_normal = rel_vel.dot(normal);

    // Separating contacts get no impulse
    if vel_along_normal > 0.0 {
        return None;
    }

    // The less bouncy material dominates
    let e = a.restitution.min(b.restitution);
    let jn = -(1.0 + e) * vel_along_normal / inv_sum;

    let impulse = normal * jn;
    a.vel -= impulse * inv_a;
    b.vel += impulse * inv_b;

    // Tangential friction impulse, clamped by the normal impulse so
    // friction never reverses the slide on its own
    let tangent_vel = rel_vel - normal * vel_along_normal;
    let tangent_len = tangent_vel.length();
    if tangent_len > 1e-4 {
        let tangent = tangent_vel / tangent_len;
        let vel_along_tangent = rel_vel.dot(tangent);
        let mu = a.friction * b.friction;
        let max_friction = jn.abs() * (1.0 - mu);
        let jt = (-vel_along_tangent / inv_sum).clamp(-max_friction, max_friction);

        let friction_impulse = tangent * jt;
        a.vel -= friction_impulse * inv_a;
        b.vel += friction_impulse * inv_b;
    }

    // Stacked resting pairs: zero residual drift so piles settle
    if a.on_floor(tuning.floor_y) && b.on_floor(tuning.floor_y) {
        settle(&mut a.vel, tuning.resting.snap_speed);
        settle(&mut b.vel, tuning.resting.snap_speed);
    }

    Some(-vel_along_normal)
}

/// Snap per-axis velocity below the threshold to exactly zero
fn settle(vel: &mut Vec2, snap_speed: f32) {
    if vel.x.abs() < snap_speed {
        vel.x = 0.0;
    }
    if vel.y.abs() < snap_speed {
        vel.y = 0.0;
    }
}
