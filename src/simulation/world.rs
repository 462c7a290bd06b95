//! Main simulation world that ties everything together
//!
//! This is the entry point for running the racing game
//! without any Bevy dependencies.

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collision::CollisionJudge;
use super::config::SimConfig;
use super::events::FrameEvent;
use super::game_state::{GameState, Outcome};
use super::scenery::SceneryField;
use super::traffic::TrafficSimulator;
use super::types::InputVector;

/// The main simulation world
pub struct SimWorld {
    pub config: SimConfig,

    /// Player, lives, score and terminal flags
    pub state: GameState,

    /// Oncoming vehicles
    pub traffic: TrafficSimulator,

    /// Roadside trees
    pub scenery: SceneryField,

    judge: CollisionJudge,

    /// Number of ticks simulated so far (frozen ticks excluded)
    pub frame: u64,

    /// Simulation time in seconds (frozen ticks excluded)
    pub time: f32,

    rng: StdRng,
}

impl SimWorld {
    fn new_internal(config: SimConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        let traffic = TrafficSimulator::new(&config, &mut rng);
        let scenery = SceneryField::new(&config, &mut rng);
        let state = GameState::new(&config);

        Ok(Self {
            judge: CollisionJudge::new(config.nudge_margin),
            config,
            state,
            traffic,
            scenery,
            frame: 0,
            time: 0.0,
            rng,
        })
    }

    /// Create a world with the default configuration and an OS-seeded RNG
    pub fn new() -> Result<Self> {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        Self::new_internal(config, StdRng::from_os_rng())
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(seed: u64) -> Result<Self> {
        Self::with_config_and_seed(SimConfig::default(), seed)
    }

    pub fn with_config_and_seed(config: SimConfig, seed: u64) -> Result<Self> {
        Self::new_internal(config, StdRng::seed_from_u64(seed))
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Advance the simulation by one frame.
    ///
    /// Vehicle and scenery speeds are per frame, so callers should tick at
    /// `config.tick_rate_hz` and pass the measured frame time as `delta_secs`.
    /// Once the game is over the world is frozen and this returns no events.
    pub fn tick(&mut self, delta_secs: f32, input: InputVector) -> Vec<FrameEvent> {
        if self.state.game_over {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.frame += 1;
        self.time += delta_secs;

        self.state.update(input, self.config.car_speed);

        for respawn in self.traffic.advance(&mut self.rng) {
            events.push(FrameEvent::VehicleRespawned {
                vehicle: respawn.vehicle,
                lane: respawn.lane,
                speed: respawn.speed,
            });
        }

        for contact in self.judge.judge(&mut self.state, &self.traffic) {
            if contact.hit {
                events.push(FrameEvent::Hit {
                    vehicle: contact.vehicle,
                    lives_left: self.state.lives,
                });
            }
            events.push(FrameEvent::Nudged {
                vehicle: contact.vehicle,
                player_y: contact.player_y,
            });
        }

        self.scenery.advance();

        if self
            .state
            .player
            .tick_vulnerability(delta_secs, self.config.vulnerability_window_secs)
        {
            events.push(FrameEvent::VulnerabilityRestored);
        }

        if self
            .state
            .accumulate_score(delta_secs, self.config.score_interval_secs)
        {
            events.push(FrameEvent::ScoreIncreased {
                score: self.state.score,
            });
        }

        match self.state.check_terminal(self.config.win_score_threshold) {
            Outcome::Running => {}
            Outcome::Lost => {
                info!(
                    "Game over after {:.1}s with score {}",
                    self.time, self.state.score
                );
                events.push(FrameEvent::GameOver);
            }
            Outcome::Won => {
                info!(
                    "Game won after {:.1}s with {} lives left",
                    self.time, self.state.lives
                );
                events.push(FrameEvent::GameOver);
                events.push(FrameEvent::GameWon);
            }
        }

        events
    }

    /// Print a summary of the current state
    pub fn print_summary(&self) {
        println!("=== Lane Racer Summary ===");
        println!("Frame: {} | Time: {:.2}s", self.frame, self.time);
        println!("{}", self.state.summary());
        println!(
            "Outcome: {}",
            match self.outcome() {
                Outcome::Running => "Running",
                Outcome::Lost => "Game Over",
                Outcome::Won => "Won",
            }
        );
        println!();

        println!("--- Traffic ---");
        for (index, vehicle) in self.traffic.vehicles.iter().enumerate() {
            println!(
                "  Vehicle {}: {} speed={} pos=({:.1}, {:.1})",
                index, vehicle.lane, vehicle.speed, vehicle.position.x, vehicle.position.y
            );
        }
        println!("Trees: {}", self.scenery.trees.len());
    }

    /// Draw a coarse ASCII view of the field
    ///
    /// `P` is the player, `#` a vehicle, `T` a tree, `|` a lane divider.
    pub fn draw_map(&self) {
        // Grid cell size in pixels
        let cell = 16.0;
        let columns = (self.config.field_width / cell).ceil() as usize;
        let rows = (self.config.field_height / cell).ceil() as usize;

        let mut grid = vec![vec![' '; columns]; rows];

        let to_cell = |x: f32, y: f32| -> Option<(usize, usize)> {
            if x < 0.0 || y < 0.0 {
                return None;
            }
            let col = (x / cell) as usize;
            let row = (y / cell) as usize;
            (col < columns && row < rows).then_some((row, col))
        };

        let third = self.config.field_width / 3.0;
        let ninth = self.config.field_width / 9.0;
        for divider in [third, third + ninth, third + 2.0 * ninth, 2.0 * third] {
            let col = (divider / cell) as usize;
            if col < columns {
                for row in grid.iter_mut() {
                    row[col] = '|';
                }
            }
        }

        for tree in &self.scenery.trees {
            if let Some((row, col)) = to_cell(tree.position.x, tree.position.y) {
                grid[row][col] = 'T';
            }
        }

        for vehicle in &self.traffic.vehicles {
            if let Some((row, col)) = to_cell(vehicle.position.x, vehicle.position.y) {
                grid[row][col] = '#';
            }
        }

        let player = &self.state.player.position;
        if let Some((row, col)) = to_cell(player.x, player.y) {
            grid[row][col] = 'P';
        }

        let border: String = "-".repeat(columns + 2);
        println!("{}", border);
        for row in grid {
            println!("|{}|", row.into_iter().collect::<String>());
        }
        println!("{}", border);
    }
}
