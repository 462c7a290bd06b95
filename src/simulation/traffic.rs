//! Oncoming traffic
//!
//! A fixed set of vehicles drives down the three lanes. A vehicle that leaves
//! the bottom of the field is recycled just above the top with a fresh lane
//! and speed, so the set never grows or shrinks.

use log::debug;
use rand::Rng;
use std::ops::RangeInclusive;

use super::config::SimConfig;
use super::types::{Lane, Position, Rect, SpriteSize};

/// An oncoming vehicle
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub position: Position,
    pub lane: Lane,

    /// Pixels per frame at the fixed tick rate
    pub speed: u32,

    /// Frame of the traffic sheet used to draw this vehicle
    pub sprite_index: usize,
}

impl Vehicle {
    /// Hitbox covering one frame of the traffic sheet
    pub fn hitbox(&self, sprite: SpriteSize) -> Rect {
        Rect::at(self.position, sprite)
    }
}

/// What happened to a vehicle that wrapped around during `advance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Respawn {
    pub vehicle: usize,
    pub lane: Lane,
    pub speed: u32,
}

/// Manages the oncoming vehicles
#[derive(Debug, Clone)]
pub struct TrafficSimulator {
    pub vehicles: Vec<Vehicle>,
    field_width: f32,
    field_height: f32,
    sprite: SpriteSize,
    speed_range: RangeInclusive<u32>,
}

impl TrafficSimulator {
    /// Spawn `config.vehicle_count` vehicles above the field in random lanes
    pub fn new<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let sprite = config.vehicle_sprite();
        let mut traffic = Self {
            vehicles: Vec::with_capacity(config.vehicle_count),
            field_width: config.field_width,
            field_height: config.field_height,
            sprite,
            speed_range: config.vehicle_speed.clone(),
        };

        for sprite_index in 0..config.vehicle_count {
            let lane = random_lane(rng);
            let speed = rng.random_range(traffic.speed_range.clone());
            // Staggered above the top edge so the first wave streams in
            let y = rng.random_range(-config.field_height.max(sprite.height)..=-sprite.height);
            traffic.vehicles.push(Vehicle {
                position: Position::new(traffic.lane_x(lane), y),
                lane,
                speed,
                sprite_index,
            });
        }

        traffic
    }

    /// Size of one vehicle sprite
    pub fn sprite(&self) -> SpriteSize {
        self.sprite
    }

    /// X coordinate for a vehicle driving in `lane`
    pub fn lane_x(&self, lane: Lane) -> f32 {
        lane.sprite_x(self.field_width, self.sprite.width)
    }

    /// Move every vehicle down by its speed and recycle those past the bottom edge.
    ///
    /// Speeds are per frame, so `advance` must be called once per fixed tick.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Vec<Respawn> {
        let mut respawns = Vec::new();

        for index in 0..self.vehicles.len() {
            let vehicle = &mut self.vehicles[index];
            vehicle.position.y += vehicle.speed as f32;
            if vehicle.position.y <= self.field_height {
                continue;
            }

            let lane = random_lane(rng);
            let speed = rng.random_range(self.speed_range.clone());
            let x = lane.sprite_x(self.field_width, self.sprite.width);

            let vehicle = &mut self.vehicles[index];
            vehicle.position = Position::new(x, -self.sprite.height);
            vehicle.lane = lane;
            vehicle.speed = speed;

            debug!("Vehicle {} respawned in {} at speed {}", index, lane, speed);
            respawns.push(Respawn {
                vehicle: index,
                lane,
                speed,
            });
        }

        respawns
    }
}

fn random_lane<R: Rng>(rng: &mut R) -> Lane {
    Lane::ALL[rng.random_range(0..Lane::ALL.len())]
}
