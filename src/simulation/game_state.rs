//! Game state tracking for the racing game
//!
//! This module tracks the player car, lives, score and the terminal flags.
//! Everything here is mutated only from `SimWorld::tick`.

use super::config::SimConfig;
use super::types::{InputVector, Position, Rect, SpriteSize};

/// The car steered by the player
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub size: SpriteSize,

    /// Whether a collision will cost a life
    pub vulnerable: bool,

    /// Seconds spent invulnerable since the last hit; only counted while not vulnerable
    pub vulnerable_timer: f32,
}

impl Player {
    /// Place the player centered horizontally, three fifths down the field
    pub fn new(config: &SimConfig) -> Self {
        let size = config.player_sprite;
        Self {
            position: Position::new(
                config.field_width / 2.0 - size.width / 2.0,
                config.field_height * 3.0 / 5.0,
            ),
            size,
            vulnerable: true,
            vulnerable_timer: 0.0,
        }
    }

    /// Full sprite box used for collision tests
    pub fn hitbox(&self) -> Rect {
        Rect::at(self.position, self.size)
    }

    /// Move by `speed` pixels along each held axis. No bounds are enforced.
    pub fn steer(&mut self, input: InputVector, speed: f32) {
        let (dx, dy) = input.axes();
        self.position.x += dx * speed;
        self.position.y += dy * speed;
    }

    /// Start the invulnerability window
    pub fn mark_hit(&mut self) {
        self.vulnerable = false;
        self.vulnerable_timer = 0.0;
    }

    /// Advance the invulnerability window. Returns true when vulnerability re-arms.
    pub fn tick_vulnerability(&mut self, delta_secs: f32, window_secs: f32) -> bool {
        if self.vulnerable {
            return false;
        }
        self.vulnerable_timer += delta_secs;
        if self.vulnerable_timer > window_secs {
            self.vulnerable = true;
            self.vulnerable_timer = 0.0;
            return true;
        }
        false
    }
}

/// Result of a terminal check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Lost,
    Won,
}

/// Game state that tracks player progress
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,

    /// Remaining lives; the game ends once this drops below zero
    pub lives: i32,

    /// Seconds survived, one point per interval
    pub score: u32,

    /// Time accumulated toward the next point
    pub score_timer: f32,

    pub game_over: bool,

    /// Set together with `game_over` when the score threshold is passed
    pub game_won: bool,
}

impl GameState {
    /// Create a new game state with starting conditions
    pub fn new(config: &SimConfig) -> Self {
        Self {
            player: Player::new(config),
            lives: config.starting_lives,
            score: 0,
            score_timer: 0.0,
            game_over: false,
            game_won: false,
        }
    }

    /// Apply one frame of player input
    pub fn update(&mut self, input: InputVector, car_speed: f32) {
        self.player.steer(input, car_speed);
    }

    /// Take a hit from a vehicle; returns true if it cost a life
    pub fn register_hit(&mut self) -> bool {
        if !self.player.vulnerable {
            return false;
        }
        self.lives -= 1;
        self.player.mark_hit();
        true
    }

    /// Accumulate survival time. Returns true when a point was awarded.
    ///
    /// Any time past the interval is dropped rather than carried over.
    pub fn accumulate_score(&mut self, delta_secs: f32, interval_secs: f32) -> bool {
        self.score_timer += delta_secs;
        if self.score_timer >= interval_secs {
            self.score += 1;
            self.score_timer = 0.0;
            return true;
        }
        false
    }

    /// Set the terminal flags if a terminal condition has been reached
    pub fn check_terminal(&mut self, win_score_threshold: u32) -> Outcome {
        if self.game_over {
            return self.outcome();
        }
        if self.lives < 0 {
            self.game_over = true;
            self.game_won = false;
        }
        if self.score > win_score_threshold {
            self.game_won = true;
            self.game_over = true;
        }
        self.outcome()
    }

    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.game_won) {
            (false, _) => Outcome::Running,
            (true, true) => Outcome::Won,
            (true, false) => Outcome::Lost,
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Score: {} | Lives: {} | Player: ({:.1}, {:.1}) | {}",
            self.score,
            self.lives,
            self.player.position.x,
            self.player.position.y,
            if self.player.vulnerable {
                "vulnerable".to_string()
            } else {
                format!("invulnerable {:.2}s", self.player.vulnerable_timer)
            }
        )
    }
}
