//! Systems for driving the simulation and drawing its state

use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::components::{BackgroundMusic, FrameDrawn, GameAssets, SimWorldResource};
use super::input::poll_steering;
use crate::simulation::{self, DrawCommand, FrameEvent, RenderPresenter, Texture};

/// System to run one fixed simulation tick
pub fn tick_simulation(
    mut commands: Commands,
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    assets: Res<GameAssets>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    let input = poll_steering(&keyboard);

    for event in sim_world.0.tick(time.delta_secs(), input) {
        match event {
            FrameEvent::Hit { lives_left, .. } => {
                debug!("Crash, {} lives left", lives_left);
                commands.spawn((
                    AudioPlayer::new(assets.collision_sound.clone()),
                    PlaybackSettings::DESPAWN,
                ));
            }
            FrameEvent::GameOver => info!("Game over, final score {}", sim_world.0.state.score),
            FrameEvent::GameWon => info!("You won!"),
            _ => {}
        }
    }
}

/// System to pause the music once the game has ended
pub fn pause_music_when_over(
    sim_world: Res<SimWorldResource>,
    mut music: Query<&mut AudioSink, With<BackgroundMusic>>,
) {
    if !sim_world.0.is_over() {
        return;
    }
    for mut sink in music.iter_mut() {
        if !sink.is_paused() {
            sink.pause();
        }
    }
}

/// System to redraw the frame from the presenter's draw list
///
/// Entities from the previous frame are despawned and replaced every frame.
pub fn draw_frame(
    mut commands: Commands,
    sim_world: Res<SimWorldResource>,
    assets: Res<GameAssets>,
    mut clear_color: ResMut<ClearColor>,
    drawn: Query<Entity, With<FrameDrawn>>,
) {
    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    let world = &sim_world.0;
    let field = Vec2::new(world.config.field_width, world.config.field_height);

    for (depth, command) in RenderPresenter.present(world).into_iter().enumerate() {
        let z = depth as f32 * 0.01;
        match command {
            DrawCommand::Clear(color) => clear_color.0 = to_bevy_color(color),
            DrawCommand::FillRect { rect, color } => {
                commands.spawn((
                    FrameDrawn,
                    Sprite::from_color(to_bevy_color(color), Vec2::new(rect.width, rect.height)),
                    Anchor::TOP_LEFT,
                    Transform::from_translation(to_world(field, rect.x, rect.y, z)),
                ));
            }
            DrawCommand::Sprite {
                texture,
                source,
                position,
                tint,
            } => {
                let image = match texture {
                    Texture::Player => assets.player.clone(),
                    Texture::TrafficSheet => assets.traffic_sheet.clone(),
                    Texture::TreeSheet => assets.tree_sheet.clone(),
                };
                commands.spawn((
                    FrameDrawn,
                    Sprite {
                        image,
                        rect: source.map(|r| {
                            Rect::new(r.x, r.y, r.x + r.width, r.y + r.height)
                        }),
                        color: to_bevy_color(tint),
                        ..default()
                    },
                    Anchor::TOP_LEFT,
                    Transform::from_translation(to_world(field, position.x, position.y, z)),
                ));
            }
            DrawCommand::Text {
                text,
                position,
                size,
                color,
            } => {
                commands.spawn((
                    FrameDrawn,
                    Text2d::new(text),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(to_bevy_color(color)),
                    Anchor::TOP_LEFT,
                    Transform::from_translation(to_world(field, position.x, position.y, z)),
                ));
            }
        }
    }
}

/// Convert a top-left, y-down screen point into centered, y-up world space
fn to_world(field: Vec2, x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - field.x / 2.0, field.y / 2.0 - y, z)
}

fn to_bevy_color(color: simulation::Color) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}
