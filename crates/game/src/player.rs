//! Player state owned by the frame simulator.

use engine_core::{Vec2, Vec3};
use physics::VerticalMotion;
use std::time::Duration;

use crate::config::SimConfig;
use crate::meters::ResourceMeters;

/// Everything about the player that changes from tick to tick.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Eye position; y equals the ground height whenever grounded.
    pub position: Vec3,
    pub vertical: VerticalMotion,
    /// Look yaw last read from input, in radians.
    pub look_yaw: f32,
    pub meters: ResourceMeters,
    pub zoomed: bool,
}

impl PlayerState {
    /// Fresh player at the configured spawn, grounded, with full meters.
    pub fn spawn(config: &SimConfig, now: Duration) -> Self {
        let [x, _, z] = config.spawn;
        Self {
            position: Vec3::new(x, config.ground_height, z),
            vertical: VerticalMotion::Grounded,
            look_yaw: 0.0,
            meters: ResourceMeters::new(config.max_meter, now),
            zoomed: false,
        }
    }

    /// Position on the ground plane (x, z).
    pub fn ground_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    pub fn set_ground_position(&mut self, p: Vec2) {
        self.position.x = p.x;
        self.position.z = p.y;
    }

    pub fn health(&self) -> f32 {
        self.meters.health()
    }

    pub fn hunger(&self) -> f32 {
        self.meters.hunger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::VerticalPhase;

    #[test]
    fn spawn_is_grounded_with_full_meters() {
        let config = SimConfig::default();
        let player = PlayerState::spawn(&config, Duration::ZERO);
        assert_eq!(player.position, Vec3::new(0.0, 1.6, 40.0));
        assert_eq!(player.vertical.phase(), VerticalPhase::Grounded);
        assert_eq!(player.health(), 100.0);
        assert_eq!(player.hunger(), 100.0);
        assert!(!player.zoomed);
    }

    #[test]
    fn ground_position_round_trip_keeps_height() {
        let mut player = PlayerState::spawn(&SimConfig::default(), Duration::ZERO);
        player.set_ground_position(Vec2::new(3.0, -7.5));
        assert_eq!(player.ground_position(), Vec2::new(3.0, -7.5));
        assert_eq!(player.position.y, 1.6);
    }
}
