//! First-person camera state shared between the simulation and whatever presents the scene.

use crate::Transform;
use glam::Vec3;

/// Field-of-view preset the camera can be switched between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FovPreset {
    #[default]
    Normal,
    /// Narrowed view while the scope is up.
    Zoomed,
}

/// FPS camera: a position, a yaw and a field of view.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera transform (position and yaw rotation).
    pub transform: Transform,
    /// Current field of view in degrees.
    pub fov_degrees: f32,
    /// Field of view for [`FovPreset::Normal`].
    pub normal_fov: f32,
    /// Field of view for [`FovPreset::Zoomed`].
    pub zoomed_fov: f32,
    preset: FovPreset,
    yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            fov_degrees: 75.0,
            normal_fov: 75.0,
            zoomed_fov: 30.0,
            preset: FovPreset::Normal,
            yaw: 0.0,
        }
    }
}

impl Camera {
    /// Create a new camera at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            ..Default::default()
        }
    }

    /// Create a camera with explicit FOV presets (degrees).
    pub fn with_fov(position: Vec3, normal_fov: f32, zoomed_fov: f32) -> Self {
        Self {
            transform: Transform::from_position(position),
            fov_degrees: normal_fov,
            normal_fov,
            zoomed_fov,
            ..Default::default()
        }
    }

    /// Get camera position.
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Move the camera to a new position.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Get current yaw (left/right rotation) in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set yaw directly (in radians) and rebuild rotation.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.transform.set_yaw(yaw);
    }

    /// Switch FOV preset. Returns true if the preset changed.
    pub fn set_fov_preset(&mut self, preset: FovPreset) -> bool {
        if self.preset == preset {
            return false;
        }
        self.preset = preset;
        self.fov_degrees = match preset {
            FovPreset::Normal => self.normal_fov,
            FovPreset::Zoomed => self.zoomed_fov,
        };
        log::debug!("FOV preset {:?} ({} degrees)", preset, self.fov_degrees);
        true
    }
}
