//! Forest layout: a dense double-row border around a square map, plus
//! clustered and scattered trees inside it.

use glam::Vec2;
use rand::prelude::*;

/// Shape of a single tree trunk: a tapered cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeShape {
    pub trunk_top_radius: f32,
    pub trunk_bottom_radius: f32,
    pub trunk_height: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            trunk_top_radius: 0.2,
            trunk_bottom_radius: 0.3,
            trunk_height: 2.0,
        }
    }
}

impl TreeShape {
    /// Radius the player collides against: the widest part of the trunk.
    pub fn collision_radius(&self) -> f32 {
        self.trunk_bottom_radius.max(self.trunk_top_radius)
    }

    /// Height of the trunk's centre above the ground.
    pub fn trunk_center_y(&self) -> f32 {
        self.trunk_height * 0.5
    }
}

/// Where a tree came from, for stats and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Border,
    Cluster,
    Scattered,
}

/// A placed tree on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreePlacement {
    pub position: Vec2,
    pub kind: TreeKind,
}

/// Forest generation parameters.
#[derive(Debug, Clone)]
pub struct ForestConfig {
    /// Half-extent of the square map; border rows sit on ±map_size.
    pub map_size: f32,
    /// Distance between border trees along an edge.
    pub border_spacing: f32,
    /// Inward offset of the second border row.
    pub border_row_offset: f32,
    pub cluster_count: u32,
    pub trees_per_cluster: u32,
    /// Max distance of a cluster tree from its cluster centre.
    pub cluster_spread: f32,
    pub scattered_count: u32,
    /// Interior trees are kept only within ±(map_size - interior_margin).
    pub interior_margin: f32,
    /// Interior trees are placed in ±(map_size * scatter_extent / 2).
    pub scatter_extent: f32,
    /// No interior tree is placed within this distance of `spawn`.
    pub spawn_clearance: f32,
    pub spawn: Vec2,
    pub shape: TreeShape,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            map_size: 45.0,
            border_spacing: 1.5,
            border_row_offset: 1.5,
            cluster_count: 30,
            trees_per_cluster: 6,
            cluster_spread: 4.0,
            scattered_count: 100,
            interior_margin: 3.0,
            scatter_extent: 1.5,
            spawn_clearance: 3.0,
            spawn: Vec2::new(0.0, 40.0),
            shape: TreeShape::default(),
            seed: 0,
        }
    }
}

/// A generated forest layout.
#[derive(Debug, Clone)]
pub struct Forest {
    pub trees: Vec<TreePlacement>,
    pub shape: TreeShape,
    pub map_size: f32,
}

impl Forest {
    /// Generate a forest. Deterministic for a given config (including seed).
    pub fn generate(config: &ForestConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut trees = Vec::new();

        push_border(config, &mut trees);

        let half = config.map_size * config.scatter_extent * 0.5;
        let limit = config.map_size - config.interior_margin;
        let keep = |position: Vec2, kind: TreeKind, trees: &mut Vec<TreePlacement>| {
            let inside = position.x.abs() < limit && position.y.abs() < limit;
            let clear = position.distance(config.spawn) >= config.spawn_clearance;
            if inside && clear {
                trees.push(TreePlacement { position, kind });
            }
        };

        for _ in 0..config.cluster_count {
            let center = Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
            for _ in 0..config.trees_per_cluster {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let distance = rng.gen::<f32>() * config.cluster_spread;
                let offset = Vec2::new(angle.cos(), angle.sin()) * distance;
                keep(center + offset, TreeKind::Cluster, &mut trees);
            }
        }

        for _ in 0..config.scattered_count {
            let position = Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
            keep(position, TreeKind::Scattered, &mut trees);
        }

        let forest = Self {
            trees,
            shape: config.shape,
            map_size: config.map_size,
        };
        log::info!(
            "Generated forest (seed {}): {} border, {} clustered, {} scattered trees",
            config.seed,
            forest.count(TreeKind::Border),
            forest.count(TreeKind::Cluster),
            forest.count(TreeKind::Scattered),
        );
        forest
    }

    pub fn count(&self, kind: TreeKind) -> usize {
        self.trees.iter().filter(|t| t.kind == kind).count()
    }
}

/// Two rows of trees along each edge: one on the edge, one `border_row_offset` inside it.
fn push_border(config: &ForestConfig, trees: &mut Vec<TreePlacement>) {
    let m = config.map_size;
    let inner = m - config.border_row_offset;
    let steps = if config.border_spacing > 0.0 {
        (2.0 * m / config.border_spacing).floor() as i32
    } else {
        0
    };

    for k in 0..=steps {
        let i = -m + k as f32 * config.border_spacing;
        for p in [
            Vec2::new(i, -m),
            Vec2::new(i, -inner),
            Vec2::new(i, m),
            Vec2::new(i, inner),
            Vec2::new(-m, i),
            Vec2::new(-inner, i),
            Vec2::new(m, i),
            Vec2::new(inner, i),
        ] {
            trees.push(TreePlacement {
                position: p,
                kind: TreeKind::Border,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Same seed must produce an identical layout.
    #[test]
    fn forest_deterministic_same_seed() {
        let config = ForestConfig {
            seed: 4242,
            ..Default::default()
        };
        let a = Forest::generate(&config);
        let b = Forest::generate(&config);
        assert_eq!(a.trees, b.trees);
    }

    #[test]
    fn forest_different_seed_different_interior() {
        let a = Forest::generate(&ForestConfig { seed: 1, ..Default::default() });
        let b = Forest::generate(&ForestConfig { seed: 2, ..Default::default() });
        let interior = |f: &Forest| -> Vec<Vec2> {
            f.trees
                .iter()
                .filter(|t| t.kind != TreeKind::Border)
                .map(|t| t.position)
                .collect()
        };
        assert_ne!(interior(&a), interior(&b));
    }

    #[test]
    fn border_has_double_rows_on_every_edge() {
        let config = ForestConfig {
            cluster_count: 0,
            scattered_count: 0,
            ..Default::default()
        };
        let forest = Forest::generate(&config);
        // 61 steps along [-45, 45] at 1.5, eight trees per step.
        assert_eq!(forest.count(TreeKind::Border), 61 * 8);
        assert!(forest
            .trees
            .iter()
            .any(|t| t.position == Vec2::new(45.0, 45.0)));
        assert!(forest
            .trees
            .iter()
            .any(|t| t.position == Vec2::new(-43.5, 0.0)));
    }

    #[test]
    fn interior_trees_respect_margin_and_spawn_clearance() {
        for seed in 0..8 {
            let config = ForestConfig {
                seed,
                ..Default::default()
            };
            let forest = Forest::generate(&config);
            for t in forest.trees.iter().filter(|t| t.kind != TreeKind::Border) {
                assert!(t.position.x.abs() < 42.0 && t.position.y.abs() < 42.0);
                assert!(t.position.distance(config.spawn) >= config.spawn_clearance);
            }
            assert!(forest.count(TreeKind::Scattered) <= 100);
            assert!(forest.count(TreeKind::Cluster) <= 180);
        }
    }

    #[test]
    fn collision_radius_is_trunk_base() {
        let shape = TreeShape::default();
        assert_eq!(shape.collision_radius(), 0.3);
        assert_eq!(shape.trunk_center_y(), 1.0);
    }
}
