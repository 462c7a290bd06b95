//! Asset loading. Any load failure is fatal before the first simulation tick.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::components::{GameAssets, GamePhase, RacerConfig, SimWorldResource};
use crate::simulation::{SimWorld, SpriteSize};

const PLAYER_PATH: &str = "res/car.png";
const TRAFFIC_SHEET_PATH: &str = "res/cars.png";
const TREE_SHEET_PATH: &str = "res/trees.png";
const COLLISION_SOUND_PATH: &str = "res/collision_sound.wav";
const BACKGROUND_MUSIC_PATH: &str = "res/background_music.wav";

/// System to request every asset the game needs
pub fn load_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        player: asset_server.load(PLAYER_PATH),
        traffic_sheet: asset_server.load(TRAFFIC_SHEET_PATH),
        tree_sheet: asset_server.load(TREE_SHEET_PATH),
        collision_sound: asset_server.load(COLLISION_SOUND_PATH),
        background_music: asset_server.load(BACKGROUND_MUSIC_PATH),
    });
}

/// System that waits for assets, then builds the world from the loaded sprite sizes
pub fn finish_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    config: Res<RacerConfig>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut exit: MessageWriter<AppExit>,
) {
    let tracked = [
        (PLAYER_PATH, assets.player.id().untyped()),
        (TRAFFIC_SHEET_PATH, assets.traffic_sheet.id().untyped()),
        (TREE_SHEET_PATH, assets.tree_sheet.id().untyped()),
        (COLLISION_SOUND_PATH, assets.collision_sound.id().untyped()),
        (BACKGROUND_MUSIC_PATH, assets.background_music.id().untyped()),
    ];

    let mut all_loaded = true;
    for (path, id) in tracked {
        match asset_server.get_load_state(id) {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed(err)) => {
                error!("Failed to load {}: {}", path, err);
                exit.write(AppExit::error());
                return;
            }
            _ => all_loaded = false,
        }
    }
    if !all_loaded {
        return;
    }

    let (Some(player), Some(traffic), Some(trees)) = (
        sprite_size(&images, &assets.player),
        sprite_size(&images, &assets.traffic_sheet),
        sprite_size(&images, &assets.tree_sheet),
    ) else {
        return;
    };

    let sim_config = config.0.clone().with_sprites(player, traffic, trees);
    match SimWorld::with_config(sim_config) {
        Ok(world) => {
            info!(
                "Assets loaded, starting with {} trees",
                world.scenery.trees.len()
            );
            commands.insert_resource(SimWorldResource(world));
            next_phase.set(GamePhase::Playing);
        }
        Err(e) => {
            error!("Invalid game configuration: {:#}", e);
            exit.write(AppExit::error());
        }
    }
}

fn sprite_size(images: &Assets<Image>, handle: &Handle<Image>) -> Option<SpriteSize> {
    images
        .get(handle)
        .map(|image| SpriteSize::new(image.width() as f32, image.height() as f32))
}
