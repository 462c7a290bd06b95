//! UI components and resources for linking Bevy to simulation state

use bevy::prelude::*;

use crate::simulation::{SimConfig, SimWorld};

/// Resource wrapper for the simulation world
///
/// Only inserted once every sprite has loaded, since the world is sized from them.
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

/// Configuration the world is built from once assets are ready
#[derive(Resource, Clone)]
pub struct RacerConfig(pub SimConfig);

/// Handles for everything loaded from `res/`
#[derive(Resource)]
pub struct GameAssets {
    pub player: Handle<Image>,
    pub traffic_sheet: Handle<Image>,
    pub tree_sheet: Handle<Image>,
    pub collision_sound: Handle<AudioSource>,
    pub background_music: Handle<AudioSource>,
}

/// Lifecycle of the app
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Waiting for assets; the simulation does not exist yet
    #[default]
    Loading,
    Playing,
}

/// Marker for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for entities drawn for a single frame and replaced on the next one
#[derive(Component)]
pub struct FrameDrawn;

/// Marker for the looping music player
#[derive(Component)]
pub struct BackgroundMusic;
