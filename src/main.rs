mod simulation;

#[cfg(feature = "ui")]
mod ui;

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use simulation::{FrameEvent, InputVector, SimConfig, SimWorld};

#[derive(Parser)]
#[command(name = "lane_racer")]
#[command(about = "Three-lane arcade racer with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "900")]
    ticks: u32,

    /// Seed for reproducible headless runs
    #[arg(long)]
    seed: Option<u64>,

    /// Directions held for the whole headless run, e.g. "left,up"
    #[arg(long, default_value = "none")]
    hold: InputVector,

    /// Starting lives
    #[arg(long, default_value_t = simulation::STARTING_LIVES)]
    lives: i32,

    /// Ticks between headless progress summaries
    #[arg(long, default_value = "300")]
    summary_every: u32,
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(cli.lives);
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        if let Err(e) = run_headless(&cli) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    let config = SimConfig {
        starting_lives: cli.lives,
        ..SimConfig::default()
    };
    let delta = config.tick_secs();

    println!("Running lane racer in headless mode...");
    println!("Ticks: {}, Delta: {:.4}s, Input: {:?}", cli.ticks, delta, cli.hold);
    println!();

    let mut world = match cli.seed {
        Some(seed) => SimWorld::with_config_and_seed(config, seed)?,
        None => SimWorld::with_config(config)?,
    };

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let summary_every = cli.summary_every.max(1);
    for tick in 1..=cli.ticks {
        for event in world.tick(delta, cli.hold) {
            match event {
                FrameEvent::Hit { vehicle, lives_left } => {
                    info!("Tick {}: hit by vehicle {}, lives left {}", tick, vehicle, lives_left)
                }
                FrameEvent::GameOver | FrameEvent::GameWon => info!("Tick {}: {:?}", tick, event),
                other => debug!("Tick {}: {:?}", tick, other),
            }
        }

        if tick % summary_every == 0 && tick < cli.ticks {
            println!("--- After tick {} ({:.1}s simulated time) ---", tick, world.time);
            world.print_summary();
            world.draw_map();
            println!();
        }

        if world.is_over() {
            break;
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(lives: i32) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Lane Racer UI...");
    println!();
    println!("Controls:");
    println!("  W/A/S/D or arrows - Steer");
    println!("  ESC               - Exit");
    println!();

    let config = SimConfig {
        starting_lives: lives,
        ..SimConfig::default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,lane_racer=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Lane Racer".into(),
                        resolution: (config.field_width as u32, config.field_height as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(ui::LaneRacerUIPlugin { config })
        .run();
}
