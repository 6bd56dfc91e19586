//! Static circular obstacles and the query trait the player controller collides against.

use glam::Vec2;

/// A circular exclusion zone on the ground plane (x, z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// True if a circle of `radius` centred at `point` overlaps this obstacle.
    /// Touching exactly at the combined radius is not an overlap.
    pub fn overlaps(&self, point: Vec2, radius: f32) -> bool {
        let reach = self.radius + radius;
        self.position.distance_squared(point) < reach * reach
    }
}

/// Anything that can answer "which obstacles might touch this point?".
pub trait ObstacleField {
    /// Obstacles whose exclusion zone may come within `reach` of `position`.
    /// May over-report; must never miss one that actually overlaps.
    fn obstacles_near(&self, position: Vec2, reach: f32) -> Vec<Obstacle>;

    /// True if a body of `radius` standing at `position` would overlap any obstacle.
    fn blocks(&self, position: Vec2, radius: f32) -> bool {
        self.obstacles_near(position, radius)
            .iter()
            .any(|o| o.overlaps(position, radius))
    }
}

/// Flat list, scanned exhaustively on every query.
#[derive(Debug, Clone, Default)]
pub struct ObstacleList {
    obstacles: Vec<Obstacle>,
}

impl ObstacleList {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl ObstacleField for ObstacleList {
    fn obstacles_near(&self, _position: Vec2, _reach: f32) -> Vec<Obstacle> {
        self.obstacles.clone()
    }

    fn blocks(&self, position: Vec2, radius: f32) -> bool {
        self.obstacles.iter().any(|o| o.overlaps(position, radius))
    }
}
