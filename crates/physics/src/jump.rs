//! Jump and gravity integration.
//!
//! Vertical motion is a two-state machine. A grounded body can start a jump,
//! which makes it airborne with an upward velocity; each tick an airborne body
//! moves by its velocity and gravity is subtracted. Reaching the ground snaps
//! the body back to the ground height and zeroes its velocity. A jump request
//! while airborne is ignored.

/// Vertical phase of the body at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPhase {
    Grounded,
    Ascending,
    Descending,
}

/// Jump state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VerticalMotion {
    #[default]
    Grounded,
    /// In the air; `velocity` is world units per tick, positive up.
    Airborne { velocity: f32 },
}

/// Result of one vertical integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalStep {
    /// The body left the ground this tick.
    pub jumped: bool,
    /// The body touched down this tick.
    pub landed: bool,
}

impl VerticalMotion {
    /// Current vertical velocity (zero while grounded).
    pub fn velocity(&self) -> f32 {
        match *self {
            VerticalMotion::Grounded => 0.0,
            VerticalMotion::Airborne { velocity } => velocity,
        }
    }

    pub fn phase(&self) -> VerticalPhase {
        match *self {
            VerticalMotion::Grounded => VerticalPhase::Grounded,
            VerticalMotion::Airborne { velocity } if velocity > 0.0 => VerticalPhase::Ascending,
            VerticalMotion::Airborne { .. } => VerticalPhase::Descending,
        }
    }

    /// Start a jump if grounded. Returns true if the jump started.
    pub fn try_jump(&mut self, jump_power: f32) -> bool {
        match self {
            VerticalMotion::Grounded => {
                *self = VerticalMotion::Airborne {
                    velocity: jump_power,
                };
                true
            }
            VerticalMotion::Airborne { .. } => false,
        }
    }

    /// Integrate one tick. `height` is the body's current y and is updated in place.
    pub fn step(&mut self, height: &mut f32, gravity: f32, ground_height: f32) -> bool {
        let VerticalMotion::Airborne { velocity } = self else {
            *height = ground_height;
            return false;
        };

        *height += *velocity;
        *velocity -= gravity;

        if *height <= ground_height {
            *height = ground_height;
            *self = VerticalMotion::Grounded;
            return true;
        }
        false
    }

    /// Handle the jump request and integrate one tick.
    pub fn update(
        &mut self,
        height: &mut f32,
        jump_requested: bool,
        config: &JumpConfig,
    ) -> VerticalStep {
        let jumped = jump_requested && self.try_jump(config.jump_power);
        let landed = self.step(height, config.gravity, config.ground_height);
        VerticalStep { jumped, landed }
    }
}

/// Tuning for [`VerticalMotion::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConfig {
    /// Initial upward velocity of a jump, per tick.
    pub jump_power: f32,
    /// Velocity lost per tick while airborne.
    pub gravity: f32,
    /// Resting height of the body (eye height above the ground plane).
    pub ground_height: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_power: 0.3,
            gravity: 0.015,
            ground_height: 1.6,
        }
    }
}
