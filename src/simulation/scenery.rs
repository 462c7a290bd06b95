//! Roadside trees. Purely decorative: they never collide and never score.

use rand::Rng;

use super::config::{SimConfig, TREE_SHEET_FRAMES};
use super::types::Position;

#[derive(Debug, Clone)]
pub struct Tree {
    pub position: Position,

    /// Frame of the tree sheet
    pub variant: usize,
}

#[derive(Debug, Clone)]
pub struct SceneryField {
    pub trees: Vec<Tree>,
    field_height: f32,
    wrap_y: f32,
    scroll_speed: f32,
}

impl SceneryField {
    /// Scatter a random number of trees over the two verges.
    ///
    /// The first half goes in the left third of the field, the rest in the right third.
    pub fn new<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let count = rng.random_range(config.tree_count.clone());
        let width = config.field_width.max(1.0) as i32;
        let height = config.field_height.max(0.0) as i32;

        let trees = (0..count)
            .map(|i| {
                let x = if i < count / 2 {
                    rng.random_range(1..=(width / 3).max(1))
                } else {
                    rng.random_range((2 * width / 3)..=width)
                };
                let y = rng.random_range(0..=height);
                Tree {
                    position: Position::new(x as f32, y as f32),
                    variant: i % TREE_SHEET_FRAMES as usize,
                }
            })
            .collect();

        Self {
            trees,
            field_height: config.field_height,
            wrap_y: -config.tree_sheet.height,
            scroll_speed: config.car_speed,
        }
    }

    /// Scroll every tree down one frame, wrapping those past the bottom back to the top
    pub fn advance(&mut self) {
        for tree in &mut self.trees {
            tree.position.y += self.scroll_speed;
            if tree.position.y > self.field_height {
                tree.position.y = self.wrap_y;
            }
        }
    }
}
