//! World setup systems for the camera and music

use bevy::audio::Volume;
use bevy::prelude::*;

use super::components::{BackgroundMusic, GameAssets, MainCamera};

const MUSIC_VOLUME: f32 = 0.5;

/// System to spawn the 2D camera centered on the field
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}

/// System to start the looping background track once the game begins
pub fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(assets.background_music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(MUSIC_VOLUME)),
    ));
}
