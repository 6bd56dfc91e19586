//! Kinematic player physics for Greenwood: circle obstacles on the ground
//! plane, jump/gravity integration and first-person movement.

pub mod grid;
pub mod jump;
pub mod movement;
pub mod obstacle;

pub use grid::*;
pub use jump::*;
pub use movement::*;
pub use obstacle::*;
