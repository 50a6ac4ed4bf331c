//! Robot Hunt entry point
//!
//! Headless runner: loads settings, steps the arena at a fixed rate and
//! prints a JSON summary. A windowed frontend would drive `tick` the same way
//! and draw `Scene::capture` each frame.

use std::process::ExitCode;

use serde::Serialize;

use robot_hunt::consts::SIM_DT;
use robot_hunt::render::Scene;
use robot_hunt::sim::{Arena, ArenaEvent, ArenaStats, tick};
use robot_hunt::{Settings, SimError};

/// Ticks to run when no count is given (one minute at 60 Hz)
const DEFAULT_TICKS: u64 = 60 * 60;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    obstacles: usize,
    stats: ArenaStats,
    visibility_ratio: f32,
    failed_respawns: u64,
    final_positions: [[f32; 2]; 2],
}

fn run(settings: Settings, ticks: u64) -> Result<RunSummary, SimError> {
    let mut arena = Arena::new(settings)?;
    let mut failed_respawns = 0;

    for _ in 0..ticks {
        match tick(&mut arena, SIM_DT) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                log::error!("{} (check obstacle density)", err);
                failed_respawns += 1;
            }
            Err(err) => return Err(err),
        }

        for event in arena.drain_events() {
            if let ArenaEvent::Respawned { tick, first, second } = event {
                log::info!("Tick {}: respawned at {:?} and {:?}", tick, first, second);
            }
        }
    }

    let scene = Scene::capture(&arena);
    log::debug!(
        "Final scene: {} instances ({} bytes)",
        scene.instances().len(),
        scene.instance_bytes().len()
    );

    Ok(RunSummary {
        seed: arena.settings.seed,
        obstacles: arena.obstacles.len(),
        stats: arena.stats,
        visibility_ratio: arena.stats.visibility_ratio(),
        failed_respawns,
        final_positions: [
            arena.agents[0].position.to_array(),
            arena.agents[1].position.to_array(),
        ],
    })
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Robot Hunt (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            log::error!("invalid tick count: {}", err);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    match run(settings, ticks) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("failed to encode summary: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
