//! Procedural generation for the forest map.

pub mod forest;

pub use forest::*;
