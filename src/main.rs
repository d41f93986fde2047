//! DotDot: collect the star, dodge the bouncing faces
//!
//! A single fixed-step loop: sample the keyboard, advance the world one
//! frame, draw it, wait for the frame boundary.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod cli;
mod config;
mod game;
mod input;
mod render;

use std::path::Path;

use clap::Parser;
use log::{debug, error, info, warn};
use macroquad::prelude::*;

use cli::Cli;
use config::{load_config, save_config, GameConfig, DEFAULT_CONFIG_FILE};
use game::{draw_world, FrameClock, GameEvent, GameRng, World};
use input::InputState;
use render::ScreenCanvas;

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("dotdot: {}", e);
            std::process::exit(1);
        }
    };

    if cli.print_config {
        match config.to_ron() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("dotdot: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(path) = &cli.write_config {
        if let Err(e) = save_config(&config, path) {
            eprintln!("dotdot: {}", e);
            std::process::exit(1);
        }
        info!("Wrote config to {}", path.display());
        return;
    }

    // Clock-derived unless replaying a run
    let seed = cli
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);

    info!("=== DotDot v{} ===", VERSION);
    macroquad::Window::from_config(window_conf(&config), run(config, seed));
}

/// Explicit --config, else ./dotdot.ron if present, else defaults
fn resolve_config(cli: &Cli) -> Result<GameConfig, config::ConfigError> {
    if let Some(path) = &cli.config {
        info!("Loading config from {}", path.display());
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        info!("Loading config from {}", default_path.display());
        return load_config(default_path);
    }

    info!("Using built-in config");
    Ok(GameConfig::default())
}

async fn run(config: GameConfig, seed: u64) {
    let mut rng = GameRng::new(seed);
    info!("Seed: {} (pass --seed {} to replay)", rng.seed(), rng.seed());

    let input = InputState::new(config.player.speed, config.input.axis_conflict);
    let mut clock = FrameClock::new(config.window.fps);
    // Frames this late mean the game itself slowed down
    let late_frame = clock.target().map(|t| t * 2.0);
    let mut canvas = ScreenCanvas::new();
    let mut world = World::new(config, &mut rng);

    loop {
        if input.quit_requested() {
            info!("Quit requested, final score {}", world.score);
            break;
        }

        world.tick(input.sample(), &mut rng);
        for event in world.events.drain() {
            log_event(event);
        }

        draw_world(&world, &mut canvas);

        let elapsed = clock.tick();
        if late_frame.is_some_and(|limit| elapsed > limit) {
            warn!("Slow frame: {:.1} ms", elapsed * 1000.0);
        }
        next_frame().await;
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::StarCollected { score } => debug!("Star collected, score {}", score),
        GameEvent::EnemySpawned { count } => info!("Enemy joined ({} on screen)", count),
        GameEvent::SpeedIncreased { multiplier } => info!("Enemy speed x{:.2}", multiplier),
        GameEvent::PlayerCaught { score } => info!("Caught! Final score {}", score),
        GameEvent::Restarted => info!("Restarted"),
    }
}
