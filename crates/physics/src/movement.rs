//! First-person horizontal movement on the ground plane.

use crate::obstacle::ObstacleField;
use glam::{Quat, Vec2, Vec3};

/// Held directional keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Speed tuning for [`movement_speed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedConfig {
    /// Distance per tick with no modifiers.
    pub base_speed: f32,
    /// Applied while sprinting (> 1).
    pub sprint_multiplier: f32,
    /// Applied while scoped (< 1).
    pub zoom_multiplier: f32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.08,
            sprint_multiplier: 1.8,
            zoom_multiplier: 0.4,
        }
    }
}

/// Unit direction in the player's local frame (forward = -Z), or `None` if
/// the keys cancel out or none are held.
pub fn local_direction(keys: MoveKeys) -> Option<Vec3> {
    let mut direction = Vec3::ZERO;
    if keys.forward {
        direction.z -= 1.0;
    }
    if keys.backward {
        direction.z += 1.0;
    }
    if keys.left {
        direction.x -= 1.0;
    }
    if keys.right {
        direction.x += 1.0;
    }
    direction.try_normalize()
}

/// Rotate a local direction into world space by `yaw` around +Y.
pub fn world_direction(local: Vec3, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * local
}

/// Per-tick speed with sprint and zoom modifiers composed multiplicatively.
pub fn movement_speed(config: &SpeedConfig, sprinting: bool, zoomed: bool) -> f32 {
    let mut speed = config.base_speed;
    if sprinting {
        speed *= config.sprint_multiplier;
    }
    if zoomed {
        speed *= config.zoom_multiplier;
    }
    speed
}

/// What happened to a horizontal move attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No direction held.
    Idle,
    /// Destination was clear and committed.
    Moved(Vec2),
    /// Destination overlapped an obstacle; position unchanged.
    Blocked,
}

/// Try to move a body of `radius` from `from` along `direction` (world space, unit)
/// by `speed`. Only the destination point is tested, not the swept path.
pub fn try_move<F: ObstacleField + ?Sized>(
    field: &F,
    from: Vec2,
    direction: Vec3,
    speed: f32,
    radius: f32,
) -> MoveOutcome {
    let candidate = from + Vec2::new(direction.x, direction.z) * speed;
    if field.blocks(candidate, radius) {
        MoveOutcome::Blocked
    } else {
        MoveOutcome::Moved(candidate)
    }
}
