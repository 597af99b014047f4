//! Space Rocks entry point
//!
//! Headless native runner: an autopilot flies a few rounds against the real
//! simulation while a log renderer reports what would be drawn.
//!
//! Usage: `space-rocks [TUNING.json] [SEED]`. The tuning path may also come
//! from `SPACE_ROCKS_TUNING`. Set `SPACE_ROCKS_PACED=1` to run at real speed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_rocks::platform::{DemoPilot, FixedRatePacer, Pacer, Unpaced};
use space_rocks::renderer::LogRenderer;
use space_rocks::ui::MenuAction;
use space_rocks::{Game, RoundEnd, Tuning, TuningError};

const DEFAULT_SEED: u64 = 0x5EED;
/// Ticks the autopilot flies before escaping back to the menu
const DEMO_ROUND_TICKS: u64 = 60 * 60;

fn load_tuning(path: Option<String>) -> Result<Tuning, TuningError> {
    match path.or_else(|| std::env::var(Tuning::ENV_VAR).ok()) {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

fn run_demo<P: Pacer>(tuning: Tuning, seed: u64, pacer: P) -> Vec<RoundEnd> {
    let menu_script = [
        MenuAction::Credits,
        MenuAction::Back,
        MenuAction::Start,
        MenuAction::Start,
        MenuAction::Quit,
    ];
    let pilot = DemoPilot::new(DEMO_ROUND_TICKS, menu_script);
    let mut game = Game::new(tuning, pilot, LogRenderer::new(), pacer, Pcg32::seed_from_u64(seed));
    let rounds = game.run();
    log::info!("{} frames rendered", game.renderer().frames());
    rounds
}

fn run() -> Result<(), TuningError> {
    let mut args = std::env::args().skip(1);
    let tuning = load_tuning(args.next())?;
    let seed = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| TuningError::Invalid(format!("seed must be an integer, got {raw:?}")))?,
        None => DEFAULT_SEED,
    };

    let paced = std::env::var("SPACE_ROCKS_PACED").is_ok_and(|v| v == "1");
    log::info!("Seed {seed}, paced: {paced}");

    let rounds = if paced {
        let pacer = FixedRatePacer::new(tuning.tick_rate_hz);
        run_demo(tuning, seed, pacer)
    } else {
        run_demo(tuning, seed, Unpaced)
    };

    for (i, end) in rounds.iter().enumerate() {
        match end {
            RoundEnd::Destroyed { ticks } => log::info!("Round {}: destroyed after {ticks} ticks", i + 1),
            RoundEnd::Escaped { ticks } => log::info!("Round {}: survived {ticks} ticks", i + 1),
            RoundEnd::Quit => log::info!("Round {}: quit", i + 1),
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Rocks (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by the embedding page
}
