//! Ball Pit entry point
//!
//! Runs the scene headless at the fixed cadence and logs a state summary
//! once per simulated second. A renderer consumes the same read-only body
//! view this loop prints.

use ball_pit::consts::{MAX_SUBSTEPS, SIM_DT};
use ball_pit::{Scene, SceneInput};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xBA11);
    log::info!("ball pit starting, seed {seed}");

    let mut scene = Scene::new(seed);
    let mut input = SceneInput::default();
    let mut accumulator = 0.0f32;

    while !scene.is_finished() {
        // Headless: frames arrive exactly at the reference cadence
        accumulator += SIM_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            scene.frame(&input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.spawn = false;
            input.cycle_material = false;
        }

        if scene.state.time_ticks % 60 == 0 {
            let secs = scene.state.time_ticks / 60;
            log::info!(
                "t={secs:>2}s balls={} events_last_step={}",
                scene.state.pool.active_count(),
                scene.state.events.len()
            );
            for (handle, body) in scene.state.pool.iter_active() {
                log::debug!(
                    "  #{:<2} {:<6} pos=({:6.1},{:6.1}) vel=({:7.1},{:7.1}) glow={:.2}",
                    handle.0,
                    body.material.name(),
                    body.pos.x,
                    body.pos.y,
                    body.vel.x,
                    body.vel.y,
                    body.glow_intensity
                );
            }
        }
    }

    log::info!("scene finished after {} ticks", scene.state.time_ticks);
}
