//! UI module that presents the simulation using Bevy
//!
//! This module is purely input, audio and drawing - all game logic is in the `simulation` module.
//! The UI polls the keyboard, ticks `SimWorld` at a fixed rate and replays the
//! presenter's draw list every frame.

mod assets;
mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{GamePhase, SimWorldResource};

use crate::simulation::SimConfig;
use assets::{finish_loading, load_assets};
use components::RacerConfig;
use input::handle_input;
use sync::{draw_frame, pause_music_when_over, tick_simulation};
use world::{setup_camera, start_music};

/// Plugin to register all UI systems
pub struct LaneRacerUIPlugin {
    pub config: SimConfig,
}

impl Plugin for LaneRacerUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RacerConfig(self.config.clone()))
            .insert_resource(Time::<Fixed>::from_hz(f64::from(self.config.tick_rate_hz)))
            .init_state::<GamePhase>()
            .add_systems(Startup, (setup_camera, load_assets))
            .add_systems(
                Update,
                finish_loading.run_if(in_state(GamePhase::Loading)),
            )
            .add_systems(OnEnter(GamePhase::Playing), start_music)
            .add_systems(
                FixedUpdate,
                tick_simulation.run_if(in_state(GamePhase::Playing)),
            )
            .add_systems(
                Update,
                (
                    handle_input,
                    (draw_frame, pause_music_when_over).run_if(in_state(GamePhase::Playing)),
                ),
            );
    }
}
