//! Core types for the racing simulation
//!
//! These are standalone types that don't depend on Bevy. All coordinates are
//! screen space: origin at the top-left corner of the field, y growing downward.

use std::fmt;

/// A 2D position on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a sprite or sprite sheet in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a sprite placed at `position`
    pub fn at(position: Position, size: SpriteSize) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Strict intersection test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// One of the three traffic lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// Lane number as shown to players, 1 to 3 from left to right
    pub fn number(self) -> u8 {
        match self {
            Lane::Left => 1,
            Lane::Center => 2,
            Lane::Right => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Lane> {
        match number {
            1 => Some(Lane::Left),
            2 => Some(Lane::Center),
            3 => Some(Lane::Right),
            _ => None,
        }
    }

    /// X coordinate of a sprite of width `sprite_width` centered in this lane
    pub fn sprite_x(self, field_width: f32, sprite_width: f32) -> f32 {
        let half = sprite_width / 2.0;
        match self {
            Lane::Left => field_width / 3.0 + field_width / 18.0 - half,
            Lane::Center => field_width / 2.0 - half,
            Lane::Right => field_width * 2.0 / 3.0 - field_width / 18.0 - half,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {}", self.number())
    }
}

/// Directions held by the player during one frame
///
/// Opposite directions may be held at once; they cancel out when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InputVector(u8);

impl InputVector {
    pub const NONE: InputVector = InputVector(0);
    pub const LEFT: InputVector = InputVector(0b0001);
    pub const RIGHT: InputVector = InputVector(0b0010);
    pub const UP: InputVector = InputVector(0b0100);
    pub const DOWN: InputVector = InputVector(0b1000);

    pub fn with(self, other: InputVector) -> InputVector {
        InputVector(self.0 | other.0)
    }

    pub fn set(&mut self, other: InputVector, held: bool) {
        if held {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    pub fn contains(self, other: InputVector) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn left(self) -> bool {
        self.contains(InputVector::LEFT)
    }

    pub fn right(self) -> bool {
        self.contains(InputVector::RIGHT)
    }

    pub fn up(self) -> bool {
        self.contains(InputVector::UP)
    }

    pub fn down(self) -> bool {
        self.contains(InputVector::DOWN)
    }

    /// Per-axis unit steps, with y pointing down the screen
    pub fn axes(self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.left() {
            dx -= 1.0;
        }
        if self.right() {
            dx += 1.0;
        }
        if self.up() {
            dy -= 1.0;
        }
        if self.down() {
            dy += 1.0;
        }
        (dx, dy)
    }
}

impl std::ops::BitOr for InputVector {
    type Output = InputVector;

    fn bitor(self, rhs: InputVector) -> InputVector {
        self.with(rhs)
    }
}

impl std::str::FromStr for InputVector {
    type Err = anyhow::Error;

    /// Parse a comma separated list such as `left,up`; `none` or an empty string holds nothing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = InputVector::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let direction = match part.to_ascii_lowercase().as_str() {
                "left" | "a" => InputVector::LEFT,
                "right" | "d" => InputVector::RIGHT,
                "up" | "w" => InputVector::UP,
                "down" | "s" => InputVector::DOWN,
                "none" => InputVector::NONE,
                other => anyhow::bail!("Unknown direction '{}'", other),
            };
            input = input | direction;
        }
        Ok(input)
    }
}
