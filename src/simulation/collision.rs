//! Collision detection between the player and oncoming traffic

use log::debug;

use super::game_state::GameState;
use super::traffic::TrafficSimulator;

/// A single overlap found during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub vehicle: usize,

    /// Whether this overlap cost a life
    pub hit: bool,

    /// Player y after the separation nudge
    pub player_y: f32,
}

/// Checks the player against every vehicle and applies the consequences
#[derive(Debug, Clone, Copy)]
pub struct CollisionJudge {
    /// The player is pushed up by `player_height - nudge_margin` on overlap
    pub nudge_margin: f32,
}

impl CollisionJudge {
    pub fn new(nudge_margin: f32) -> Self {
        Self { nudge_margin }
    }

    /// Test vehicles in order, mutating the game state on each overlap.
    ///
    /// The player's hitbox is rebuilt per vehicle, so a nudge from one vehicle
    /// can clear or cause the overlap with the next. The nudge is applied on
    /// every overlapping frame, even while invulnerable.
    pub fn judge(&self, state: &mut GameState, traffic: &TrafficSimulator) -> Vec<Contact> {
        let sprite = traffic.sprite();
        let mut contacts = Vec::new();

        for (index, vehicle) in traffic.vehicles.iter().enumerate() {
            if !state.player.hitbox().overlaps(&vehicle.hitbox(sprite)) {
                continue;
            }

            let hit = state.register_hit();
            if hit {
                debug!("Hit by vehicle {}, {} lives left", index, state.lives);
            }

            state.player.position.y -= state.player.size.height - self.nudge_margin;

            contacts.push(Contact {
                vehicle: index,
                hit,
                player_y: state.player.position.y,
            });
        }

        contacts
    }
}
