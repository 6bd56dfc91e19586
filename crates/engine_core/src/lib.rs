//! Core engine types and utilities for Greenwood.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform and camera state
//! - Clamped resource meters
//! - Clocks and frame timing

pub mod camera;
pub mod components;
pub mod time;
pub mod transform;

pub use camera::*;
pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
