//! Uniform spatial grid over the ground plane for obstacle queries.

use crate::obstacle::{Obstacle, ObstacleField};
use glam::Vec2;
use std::collections::HashMap;

/// Buckets obstacles by the grid cell containing their centre.
///
/// A query visits every cell that a circle of `reach + max_radius` around the
/// query point can touch, so the result is a superset of the true overlaps.
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    obstacles: Vec<Obstacle>,
    cells: HashMap<(i32, i32), Vec<usize>>,
    inv_cell: f32,
    max_radius: f32,
}

impl ObstacleGrid {
    /// Build a grid with the given cell size (world units, > 0).
    pub fn new(obstacles: Vec<Obstacle>, cell_size: f32) -> Self {
        let cell_size = if cell_size > 0.0 { cell_size } else { 1.0 };
        let inv_cell = 1.0 / cell_size;
        let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        let mut max_radius = 0.0f32;

        for (idx, obstacle) in obstacles.iter().enumerate() {
            cells
                .entry(cell_of(obstacle.position, inv_cell))
                .or_default()
                .push(idx);
            max_radius = max_radius.max(obstacle.radius);
        }

        log::debug!(
            "Obstacle grid: {} obstacles in {} cells (cell size {:.1})",
            obstacles.len(),
            cells.len(),
            cell_size
        );

        Self {
            obstacles,
            cells,
            inv_cell,
            max_radius,
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    fn candidates(&self, position: Vec2, reach: f32) -> impl Iterator<Item = &Obstacle> + '_ {
        let span = reach.max(0.0) + self.max_radius;
        let (min_x, min_z) = cell_of(position - Vec2::splat(span), self.inv_cell);
        let (max_x, max_z) = cell_of(position + Vec2::splat(span), self.inv_cell);

        (min_x..=max_x)
            .flat_map(move |cx| (min_z..=max_z).map(move |cz| (cx, cz)))
            .filter_map(|key| self.cells.get(&key))
            .flatten()
            .map(|&idx| &self.obstacles[idx])
    }
}

impl ObstacleField for ObstacleGrid {
    fn obstacles_near(&self, position: Vec2, reach: f32) -> Vec<Obstacle> {
        self.candidates(position, reach).copied().collect()
    }

    fn blocks(&self, position: Vec2, radius: f32) -> bool {
        self.candidates(position, radius)
            .any(|o| o.overlaps(position, radius))
    }
}

fn cell_of(p: Vec2, inv_cell: f32) -> (i32, i32) {
    ((p.x * inv_cell).floor() as i32, (p.y * inv_cell).floor() as i32)
}
