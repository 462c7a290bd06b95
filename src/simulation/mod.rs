//! Standalone racing simulation module
//!
//! This module contains all the core game logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod collision;
mod config;
mod events;
mod game_state;
mod presenter;
mod scenery;
mod traffic;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use collision::{CollisionJudge, Contact};
#[allow(unused_imports)]
pub use config::{
    SimConfig, CAR_SPEED, FIELD_HEIGHT, FIELD_WIDTH, NUDGE_MARGIN, PLAYER_SPRITE,
    SCORE_INTERVAL_SECS, STARTING_LIVES, TICK_RATE_HZ, TRAFFIC_SHEET, TRAFFIC_SHEET_FRAMES,
    TREE_MAX_COUNT, TREE_MIN_COUNT, TREE_SHEET, TREE_SHEET_FRAMES, VEHICLE_COUNT,
    VEHICLE_MAX_SPEED, VEHICLE_MIN_SPEED, VULNERABILITY_WINDOW_SECS, WIN_SCORE_THRESHOLD,
};
pub use events::FrameEvent;
#[allow(unused_imports)]
pub use game_state::{GameState, Outcome, Player};
#[allow(unused_imports)]
pub use presenter::{Color, DrawCommand, RenderPresenter, Texture};
#[allow(unused_imports)]
pub use scenery::{SceneryField, Tree};
#[allow(unused_imports)]
pub use traffic::{Respawn, TrafficSimulator, Vehicle};
#[allow(unused_imports)]
pub use types::{InputVector, Lane, Position, Rect, SpriteSize};
pub use world::SimWorld;
