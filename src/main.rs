//! Asteroid Drift headless runner
//!
//! Drives the simulation with the demo autopilot on a fixed timestep and
//! logs each round's result. Usage:
//!
//! ```text
//! asteroid-drift [tuning.json] [seed] [seconds]
//! ```

use std::path::Path;

use asteroid_drift::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use asteroid_drift::sim::autopilot;
use asteroid_drift::{FrameInput, FrameOutcome, RoundPhase, Session, Tuning};

/// Simulated host frame length (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

struct Runner {
    session: Session,
    accumulator: f32,
}

impl Runner {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            session: Session::new(seed, tuning),
            accumulator: 0.0,
        }
    }

    /// Run fixed substeps for one host frame; returns any round losses
    fn update(&mut self, dt: f32) -> Vec<u32> {
        let dt = dt.min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut losses = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = FrameInput {
                // Demo mode restarts immediately after a loss
                start: self.session.phase() == RoundPhase::Idle,
                quit: false,
                controls: autopilot::steer(self.session.state()),
            };
            if let FrameOutcome::RoundLost { score } = self.session.frame(&input, SIM_DT) {
                losses.push(score);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        losses
    }
}

fn main() {
    env_logger::init();
    log::info!("Asteroid Drift (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) if path != "-" => Tuning::load(Path::new(&path)),
        _ => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x00A5_7E01);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(120.0);

    log::info!("Seed {seed}, simulating {seconds} s");

    let mut runner = Runner::new(seed, tuning);
    let frames = (seconds / FRAME_DT).ceil() as u64;
    let mut scores = Vec::new();
    for _ in 0..frames {
        scores.extend(runner.update(FRAME_DT));
    }

    let state = runner.session.state();
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(e) => log::warn!("Snapshot serialization failed: {e}"),
    }

    let best = scores.iter().copied().max().unwrap_or(0);
    println!(
        "rounds lost: {}, best score: {}, current round score: {}",
        scores.len(),
        best,
        state.score
    );
}
