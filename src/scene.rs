//! Scene lifecycle and spawn triggers
//!
//! Wraps the deterministic physics in the demo-reel scene behavior:
//! initial showcase balls, timed auto-spawns that cycle materials, and
//! button-driven spawn/cycle inputs. All randomness (spawn parameters)
//! lives here, behind a seeded PCG, so the physics step stays RNG-free
//! and whole runs replay bit-identically from a seed.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::{step, Material, SimState};
use crate::tuning::PhysicsTuning;

/// Scene runs for 30 seconds of simulated time
const SCENE_DURATION_TICKS: u64 = 30 * 60;
/// Auto-spawn cadence (2.5 s) and population target
const AUTO_SPAWN_INTERVAL_TICKS: u64 = 150;
const AUTO_SPAWN_LIMIT: usize = 12;

/// Input commands for a single frame (one-shot, caller clears)
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInput {
    /// Spawn a ball of the currently selected material
    pub spawn: bool,
    /// Advance the selected material
    pub cycle_material: bool,
}

/// The bouncing-ball scene: physics state plus spawn/selection driver
#[derive(Debug, Clone)]
pub struct Scene {
    pub state: SimState,
    rng: Pcg32,
    /// Material used for button-driven spawns
    pub current_material: Material,
    /// Material cursor for timed auto-spawns
    auto_spawn_material: Material,
    last_spawn_tick: u64,
}

impl Scene {
    /// Initialize the scene and seed the four showcase balls
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, PhysicsTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: PhysicsTuning) -> Self {
        let mut state = SimState::with_tuning(tuning);

        // One of each material, thrown in from both sides
        state
            .pool
            .spawn(Vec2::new(150.0, 80.0), Vec2::new(200.0, 0.0), 45.0, Material::Rubber);
        state
            .pool
            .spawn(Vec2::new(400.0, 120.0), Vec2::new(-150.0, 0.0), 40.0, Material::Chrome);
        state
            .pool
            .spawn(Vec2::new(300.0, 50.0), Vec2::new(100.0, 0.0), 35.0, Material::Glass);
        state
            .pool
            .spawn(Vec2::new(500.0, 100.0), Vec2::new(-100.0, 50.0), 30.0, Material::Plasma);

        log::info!("ball scene initialized with seed {seed}");

        Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            current_material: Material::Rubber,
            auto_spawn_material: Material::Rubber,
            last_spawn_tick: 0,
        }
    }

    /// Advance the scene by one frame: handle inputs, auto-spawn, then
    /// run one physics step
    pub fn frame(&mut self, input: &SceneInput, dt: f32) {
        if input.cycle_material {
            self.current_material = self.current_material.next();
            log::debug!("material selection: {}", self.current_material.name());
        }
        if input.spawn {
            let mat = self.current_material;
            self.spawn_random(mat);
        }

        // Keep the scene busy: periodic spawns up to a soft population cap,
        // cycling through every material
        let ticks = self.state.time_ticks;
        if self.state.pool.active_count() < AUTO_SPAWN_LIMIT
            && ticks.saturating_sub(self.last_spawn_tick) >= AUTO_SPAWN_INTERVAL_TICKS
        {
            self.last_spawn_tick = ticks;
            let mat = self.auto_spawn_material;
            self.auto_spawn_material = mat.next();
            self.spawn_random(mat);
        }

        step(&mut self.state, dt);
    }

    /// Spawn one ball with randomized drop position, throw speed and size
    fn spawn_random(&mut self, material: Material) {
        let x = self.rng.random_range(100.0..540.0);
        let y = self.rng.random_range(50.0..150.0);
        let vx = self.rng.random_range(-200.0..200.0);
        let radius = self.rng.random_range(25.0..50.0);

        if self
            .state
            .pool
            .spawn(Vec2::new(x, y), Vec2::new(vx, 0.0), radius, material)
            .is_some()
        {
            log::debug!(
                "spawned {} ball r={radius:.1} at ({x:.0}, {y:.0})",
                material.name()
            );
        }
    }

    /// Scene driver polls this to know when to transition away
    pub fn is_finished(&self) -> bool {
        self.state.time_ticks >= SCENE_DURATION_TICKS
    }
}
