//! Game events produced during a frame

use super::types::Lane;

/// Something that happened during one `SimWorld::tick`
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// A collision that cost a life; the front end plays the crash sound
    Hit { vehicle: usize, lives_left: i32 },
    /// The player was pushed up after overlapping a vehicle
    Nudged { vehicle: usize, player_y: f32 },
    VulnerabilityRestored,
    ScoreIncreased { score: u32 },
    VehicleRespawned { vehicle: usize, lane: Lane, speed: u32 },
    GameOver,
    GameWon,
}
