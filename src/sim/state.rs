//! Simulation state and core types
//!
//! The body pool is a fixed-capacity arena with stable slot indices;
//! everything downstream (resolvers, renderer) addresses bodies through
//! [`BodyHandle`] and iterates in slot order for determinism.

use glam::Vec2;

use super::material::Material;
use crate::consts::MAX_BODIES;
use crate::tuning::PhysicsTuning;

/// Stable index into the body pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One simulated ball
#[derive(Debug, Clone)]
pub struct Body {
    /// World position (pixels, y grows downward)
    pub pos: Vec2,
    /// Velocity (pixels/sec)
    pub vel: Vec2,
    /// Fixed for the body's lifetime
    pub radius: f32,
    /// radius^2 * material density, clamped to >= 1
    pub mass: f32,
    pub material: Material,
    /// Copied from the material table at spawn time
    pub restitution: f32,
    /// Copied from the material table at spawn time
    pub friction: f32,
    /// Per-axis visual deformation, near 1.0 (not physically authoritative)
    pub squash: Vec2,
    /// Deformation target the squash relaxes toward
    pub squash_target: Vec2,
    /// Impact glow, decays exponentially (presentation only)
    pub glow_intensity: f32,
    /// Tombstone flag; inactive slots are skipped and reusable
    pub active: bool,
}

impl Body {
    fn new(pos: Vec2, vel: Vec2, radius: f32, material: Material) -> Self {
        let props = material.props();
        // Mass = area * density (2D), never below 1 so inverse mass is bounded
        let mass = (radius * radius * props.density).max(1.0);
        Self {
            pos,
            vel,
            radius,
            mass,
            material,
            restitution: props.restitution,
            friction: props.friction,
            squash: Vec2::ONE,
            squash_target: Vec2::ONE,
            glow_intensity: 0.0,
            active: true,
        }
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// True when the ball sits within contact tolerance of the floor
    #[inline]
    pub fn on_floor(&self, floor_y: f32) -> bool {
        self.pos.y + self.radius >= floor_y - 0.5
    }
}

/// Fixed-capacity body arena with free-list slot reuse
#[derive(Debug, Clone, Default)]
pub struct BodyPool {
    slots: Vec<Body>,
    /// Despawned slot indices awaiting reuse (LIFO)
    free: Vec<u32>,
}

impl BodyPool {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_BODIES),
            free: Vec::new(),
        }
    }

    /// Spawn a new ball. Returns `None` (and drops the request) when the
    /// pool is full and no freed slot is available.
    pub fn spawn(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        material: Material,
    ) -> Option<BodyHandle> {
        debug_assert!(radius > 0.0);
        let body = Body::new(pos, vel, radius, material);

        if let Some(slot) = self.free.pop() {
            self.slots[slot as usize] = body;
            return Some(BodyHandle(slot));
        }

        if self.slots.len() >= MAX_BODIES {
            log::debug!("body pool full ({MAX_BODIES}), spawn dropped");
            return None;
        }

        let slot = self.slots.len() as u32;
        self.slots.push(body);
        Some(BodyHandle(slot))
    }

    /// Retire a ball; its slot goes on the free list for reuse
    pub fn despawn(&mut self, handle: BodyHandle) {
        if let Some(body) = self.slots.get_mut(handle.index()) {
            if body.active {
                body.active = false;
                self.free.push(handle.0);
            }
        }
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots.get(handle.index()).filter(|b| b.active)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.slots.get_mut(handle.index()).filter(|b| b.active)
    }

    /// Number of live balls
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    /// Iterate live balls in slot order (stable within a frame)
    pub fn iter_active(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, b)| b.active)
            .map(|(i, b)| (BodyHandle(i as u32), b))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, b)| b.active)
            .map(|(i, b)| (BodyHandle(i as u32), b))
    }

    /// Slot count including tombstones (pairwise resolver walks raw slots)
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Borrow two distinct slots mutably, lower index first
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j);
        let (left, right) = self.slots.split_at_mut(j);
        (&mut left[i], &mut right[0])
    }

    pub(crate) fn slot(&self, i: usize) -> &Body {
        &self.slots[i]
    }
}

/// A collision event emitted during a step, for renderer/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEvent {
    /// Ball struck the floor moving downward
    FloorImpact { body: BodyHandle, speed: f32 },
    /// Ball struck a side wall
    WallImpact { body: BodyHandle, speed: f32 },
    /// Two balls collided (speed is closing speed along the contact normal)
    BodyImpact {
        a: BodyHandle,
        b: BodyHandle,
        speed: f32,
    },
}

/// Complete simulation state, advanced by [`step`](super::step::step)
#[derive(Debug, Clone, Default)]
pub struct SimState {
    pub tuning: PhysicsTuning,
    pub pool: BodyPool,
    /// Fixed steps taken so far
    pub time_ticks: u64,
    /// Events from the most recent step (cleared on entry to each step)
    pub events: Vec<ContactEvent>,
}

impl SimState {
    pub fn new() -> Self {
        Self::with_tuning(PhysicsTuning::default())
    }

    pub fn with_tuning(tuning: PhysicsTuning) -> Self {
        Self {
            tuning,
            pool: BodyPool::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }
}
