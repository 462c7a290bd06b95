//! Tunables for the racing simulation
//!
//! All gameplay constants live here so the world can be built from a single
//! `SimConfig`, either with the defaults or with values taken from the CLI and
//! from loaded sprite metadata.

use anyhow::{bail, Result};
use log::warn;
use std::ops::RangeInclusive;

use super::types::SpriteSize;

/// Playfield dimensions in pixels
pub const FIELD_WIDTH: f32 = 480.0;
pub const FIELD_HEIGHT: f32 = 640.0;

/// Fixed simulation tick rate
pub const TICK_RATE_HZ: u32 = 30;

/// Player movement per frame per held direction, also the scenery scroll speed
pub const CAR_SPEED: f32 = 2.0;

/// Number of oncoming vehicles
pub const VEHICLE_COUNT: usize = 6;

/// Oncoming vehicle speed in pixels per frame
pub const VEHICLE_MIN_SPEED: u32 = 6;
pub const VEHICLE_MAX_SPEED: u32 = 10;

/// Tree count is rolled once at startup from this range
pub const TREE_MIN_COUNT: usize = 10;
pub const TREE_MAX_COUNT: usize = 18;

pub const STARTING_LIVES: i32 = 3;

/// Reaching a score above this wins the game
pub const WIN_SCORE_THRESHOLD: u32 = 999;

/// The post-collision nudge moves the player up by `player_height - NUDGE_MARGIN`
pub const NUDGE_MARGIN: f32 = 10.0;

/// Seconds of invulnerability after a hit
pub const VULNERABILITY_WINDOW_SECS: f32 = 1.0;

/// Seconds of survival per point
pub const SCORE_INTERVAL_SECS: f32 = 1.0;

/// Frames in the traffic sprite sheet (one per vehicle)
pub const TRAFFIC_SHEET_FRAMES: u32 = 6;

/// Frames in the tree sprite sheet
pub const TREE_SHEET_FRAMES: u32 = 3;

/// Default sprite sizes, used when no image metadata is available (headless)
pub const PLAYER_SPRITE: SpriteSize = SpriteSize::new(16.0, 24.0);
pub const TRAFFIC_SHEET: SpriteSize = SpriteSize::new(96.0, 24.0);
pub const TREE_SHEET: SpriteSize = SpriteSize::new(144.0, 48.0);

/// Complete configuration for a `SimWorld`
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub tick_rate_hz: u32,
    pub car_speed: f32,
    pub vehicle_count: usize,
    pub vehicle_speed: RangeInclusive<u32>,
    pub tree_count: RangeInclusive<usize>,
    pub starting_lives: i32,
    pub win_score_threshold: u32,
    pub nudge_margin: f32,
    pub vulnerability_window_secs: f32,
    pub score_interval_secs: f32,
    pub player_sprite: SpriteSize,
    pub traffic_sheet: SpriteSize,
    pub tree_sheet: SpriteSize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            car_speed: CAR_SPEED,
            vehicle_count: VEHICLE_COUNT,
            vehicle_speed: VEHICLE_MIN_SPEED..=VEHICLE_MAX_SPEED,
            tree_count: TREE_MIN_COUNT..=TREE_MAX_COUNT,
            starting_lives: STARTING_LIVES,
            win_score_threshold: WIN_SCORE_THRESHOLD,
            nudge_margin: NUDGE_MARGIN,
            vulnerability_window_secs: VULNERABILITY_WINDOW_SECS,
            score_interval_secs: SCORE_INTERVAL_SECS,
            player_sprite: PLAYER_SPRITE,
            traffic_sheet: TRAFFIC_SHEET,
            tree_sheet: TREE_SHEET,
        }
    }
}

impl SimConfig {
    /// Duration of one simulation tick in seconds
    pub fn tick_secs(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    /// Size of a single vehicle frame within the traffic sheet
    pub fn vehicle_sprite(&self) -> SpriteSize {
        SpriteSize::new(
            self.traffic_sheet.width / TRAFFIC_SHEET_FRAMES as f32,
            self.traffic_sheet.height,
        )
    }

    /// Size of a single tree frame within the tree sheet
    pub fn tree_sprite(&self) -> SpriteSize {
        SpriteSize::new(
            self.tree_sheet.width / TREE_SHEET_FRAMES as f32,
            self.tree_sheet.height,
        )
    }

    /// Replace the sprite sizes with dimensions read from loaded images
    pub fn with_sprites(
        mut self,
        player_sprite: SpriteSize,
        traffic_sheet: SpriteSize,
        tree_sheet: SpriteSize,
    ) -> Self {
        self.player_sprite = player_sprite;
        self.traffic_sheet = traffic_sheet;
        self.tree_sheet = tree_sheet;
        self
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            bail!(
                "Field must have a positive size, got {}x{}",
                self.field_width,
                self.field_height
            );
        }
        if self.tick_rate_hz == 0 {
            bail!("Tick rate must be at least 1 Hz");
        }
        if self.vehicle_count == 0 {
            bail!("At least one vehicle is required");
        }
        if self.vehicle_speed.is_empty() {
            bail!("Vehicle speed range {:?} is empty", self.vehicle_speed);
        }
        if self.tree_count.is_empty() {
            bail!("Tree count range {:?} is empty", self.tree_count);
        }
        for (name, sprite) in [
            ("player", self.player_sprite),
            ("traffic sheet", self.traffic_sheet),
            ("tree sheet", self.tree_sheet),
        ] {
            if sprite.width <= 0.0 || sprite.height <= 0.0 {
                bail!("Sprite '{}' has no area: {:?}", name, sprite);
            }
        }
        if self.player_sprite.height <= self.nudge_margin {
            // The nudge would push the player down instead of up
            warn!(
                "Player sprite height {} does not exceed the nudge margin {}",
                self.player_sprite.height, self.nudge_margin
            );
        }
        Ok(())
    }
}
