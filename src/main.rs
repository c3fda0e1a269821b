//! Brick Pong entry point
//!
//! Headless runner: plays the configured number of frames with the autopilot
//! at the controls and records them through a command canvas. A windowing
//! host would call `Game::key_down` and `Game::frame` the same way.

use anyhow::Context;

use brick_pong::renderer::CommandList;
use brick_pong::{Game, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Pong (headless) starting...");

    let settings = Settings::load();
    let mut game = Game::from_settings(&settings)
        .with_context(|| format!("loading score font {}", settings.font_path))?;

    let mut canvas = CommandList::new();
    let mut last_frame = Vec::new();
    for _ in 0..settings.demo_frames {
        let report = game.frame(&mut canvas);
        if report.bricks_destroyed > 0 {
            log::info!(
                "Frame {}: {} brick(s) down, score {}",
                game.frame_count(),
                report.bricks_destroyed,
                report.score
            );
        }
        last_frame = canvas.take();
    }

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Last frame: {}", serde_json::to_string(&last_frame)?);
    }

    log::info!(
        "{} game finished after {} frames, score {}",
        game.variant().as_str(),
        game.frame_count(),
        game.score()
    );
    println!("Score: {}", game.score());
    Ok(())
}
