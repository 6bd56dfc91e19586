//! World construction: ground plane and trees as hecs entities.

use engine_core::{Transform, Vec3, World};
use physics::{Obstacle, ObstacleGrid};
use procgen::{Forest, TreeKind};

/// Grid cell size for obstacle queries (world units).
const OBSTACLE_CELL_SIZE: f32 = 4.0;

/// Flat square ground centred on the origin.
#[derive(Debug, Clone, Copy)]
pub struct Ground {
    pub half_size: f32,
}

/// Tag for tree entities, with where the generator placed them.
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    pub kind: TreeKind,
}

/// Spawn the ground and one entity per tree. Tree transforms sit at the trunk centre.
pub fn build_scene(forest: &Forest) -> World {
    let mut world = World::new();

    // Ground extends a little past the outer border row.
    let half_size = forest.map_size + 5.0;
    world.spawn((
        Transform::from_position_scale(Vec3::ZERO, Vec3::new(half_size * 2.0, 1.0, half_size * 2.0)),
        Ground { half_size },
    ));

    let shape = forest.shape;
    for t in &forest.trees {
        world.spawn((
            Transform::from_position(Vec3::new(t.position.x, shape.trunk_center_y(), t.position.y)),
            Tree { kind: t.kind },
            Obstacle::new(t.position, shape.collision_radius()),
        ));
    }

    world
}

/// Log what the scene contains.
pub fn log_summary(world: &World) {
    let ground = world
        .query::<&Ground>()
        .iter()
        .map(|(_, g)| g.half_size * 2.0)
        .next()
        .unwrap_or(0.0);
    let (mut border, mut interior) = (0usize, 0usize);
    for (_, tree) in world.query::<&Tree>().iter() {
        match tree.kind {
            TreeKind::Border => border += 1,
            TreeKind::Cluster | TreeKind::Scattered => interior += 1,
        }
    }
    log::info!(
        "Scene: {}x{} ground, {} border trees, {} interior trees",
        ground,
        ground,
        border,
        interior
    );
}

/// Collect every obstacle in the world into a queryable grid.
pub fn obstacle_grid(world: &World) -> ObstacleGrid {
    let obstacles: Vec<Obstacle> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, o)| *o)
        .collect();
    ObstacleGrid::new(obstacles, OBSTACLE_CELL_SIZE)
}
