//! Translates simulation state into an ordered list of draw commands
//!
//! The presenter knows nothing about any graphics backend. Front ends replay
//! the commands in order (painter's algorithm) using screen coordinates with
//! the origin at the top-left corner.

use super::config::{TRAFFIC_SHEET_FRAMES, TREE_SHEET_FRAMES};
use super::types::{Position, Rect};
use super::world::SimWorld;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RAY_WHITE: Color = Color::rgba(245, 245, 245, 255);
    pub const GREEN: Color = Color::rgba(0, 228, 48, 255);
    pub const GRAY: Color = Color::rgba(130, 130, 130, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Tint for the player while invulnerable
    pub const INVULNERABLE_TINT: Color = Color::rgba(0, 0, 0, 100);

    /// Dimming layer drawn over the field once the game ends
    pub const GAME_OVER_OVERLAY: Color = Color::rgba(0, 0, 0, 180);
}

/// Texture a sprite command samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Player,
    TrafficSheet,
    TreeSheet,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Draw `source` (or the whole texture if `None`) with its top-left corner at `position`
    Sprite {
        texture: Texture,
        source: Option<Rect>,
        position: Position,
        tint: Color,
    },
    Text {
        text: String,
        position: Position,
        size: f32,
        color: Color,
    },
}

const HUD_FONT_SIZE: f32 = 20.0;
const BANNER_FONT_SIZE: f32 = 50.0;
const HUD_MARGIN: f32 = 10.0;
const LIVES_LABEL_WIDTH: f32 = 100.0;
const LANE_DIVIDER_WIDTH: f32 = 2.0;

/// Builds the draw list for a frame
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderPresenter;

impl RenderPresenter {
    pub fn present(&self, world: &SimWorld) -> Vec<DrawCommand> {
        let width = world.config.field_width;
        let height = world.config.field_height;
        let state = &world.state;
        let mut commands = Vec::new();

        commands.push(DrawCommand::Clear(Color::RAY_WHITE));
        self.push_road(&mut commands, width, height);

        let player = &state.player;
        commands.push(DrawCommand::Sprite {
            texture: Texture::Player,
            source: None,
            position: Position::new(player.position.x.trunc(), player.position.y.trunc()),
            tint: if player.vulnerable {
                Color::WHITE
            } else {
                Color::INVULNERABLE_TINT
            },
        });

        let vehicle_sprite = world.config.vehicle_sprite();
        for vehicle in &world.traffic.vehicles {
            let frame = (vehicle.sprite_index % TRAFFIC_SHEET_FRAMES as usize) as f32;
            commands.push(DrawCommand::Sprite {
                texture: Texture::TrafficSheet,
                source: Some(Rect::new(
                    frame * vehicle_sprite.width,
                    0.0,
                    vehicle_sprite.width,
                    vehicle_sprite.height,
                )),
                position: vehicle.position,
                tint: Color::WHITE,
            });
        }

        let tree_sprite = world.config.tree_sprite();
        for tree in &world.scenery.trees {
            let frame = (tree.variant % TREE_SHEET_FRAMES as usize) as f32;
            commands.push(DrawCommand::Sprite {
                texture: Texture::TreeSheet,
                source: Some(Rect::new(
                    frame * tree_sprite.width,
                    0.0,
                    tree_sprite.width,
                    tree_sprite.height,
                )),
                position: tree.position,
                tint: Color::WHITE,
            });
        }

        commands.push(DrawCommand::Text {
            text: format!("Score: {}", state.score),
            position: Position::new(HUD_MARGIN, HUD_MARGIN),
            size: HUD_FONT_SIZE,
            color: Color::WHITE,
        });
        commands.push(DrawCommand::Text {
            text: format!("Lives: {}", state.lives),
            position: Position::new(width - LIVES_LABEL_WIDTH, HUD_MARGIN),
            size: HUD_FONT_SIZE,
            color: Color::WHITE,
        });

        if state.game_over {
            commands.push(DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, width, height),
                color: Color::GAME_OVER_OVERLAY,
            });
            commands.push(DrawCommand::Text {
                text: if state.game_won { "You Won!" } else { "Game Over!" }.to_string(),
                position: Position::new((width / 5.0).floor(), (height / 3.0).floor()),
                size: BANNER_FONT_SIZE,
                color: Color::WHITE,
            });
        }

        commands
    }

    /// Verges, asphalt and the two lane dividers
    fn push_road(&self, commands: &mut Vec<DrawCommand>, width: f32, height: f32) {
        let third = (width / 3.0).floor();
        let ninth = (width / 9.0).floor();

        commands.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, third, height),
            color: Color::GREEN,
        });
        commands.push(DrawCommand::FillRect {
            rect: Rect::new(2.0 * third, 0.0, third, height),
            color: Color::GREEN,
        });
        commands.push(DrawCommand::FillRect {
            rect: Rect::new(third, 0.0, third, height),
            color: Color::GRAY,
        });
        for divider in 1..=2 {
            commands.push(DrawCommand::FillRect {
                rect: Rect::new(
                    third + divider as f32 * ninth - 1.0,
                    0.0,
                    LANE_DIVIDER_WIDTH,
                    height,
                ),
                color: Color::BLACK,
            });
        }
    }
}
