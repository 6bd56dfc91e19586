//! Transform component and utilities for spatial positioning.

use glam::{Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and non-uniform scale.
    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            scale,
            ..Default::default()
        }
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Set the rotation to a pure yaw around the Y axis.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.rotation = Quat::from_rotation_y(yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_quarter_turn_faces_negative_x() {
        let mut t = Transform::default();
        t.set_yaw(std::f32::consts::FRAC_PI_2);
        let f = t.forward();
        assert!((f.x + 1.0).abs() < 1e-5, "forward = {:?}", f);
        assert!(f.z.abs() < 1e-5);
    }

    #[test]
    fn from_position_scale_keeps_identity_rotation() {
        let t = Transform::from_position_scale(Vec3::new(3.0, 0.0, -2.0), Vec3::new(100.0, 1.0, 100.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale.x, 100.0);
    }
}
