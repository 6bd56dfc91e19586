//! Per-frame simulation: jump/gravity, movement with obstacle collision,
//! and the hunger/health meters.

use engine_core::{Camera, Clock, FovPreset};
use input::Intents;
use physics::{
    local_direction, movement_speed, try_move, world_direction, JumpConfig, MoveKeys, MoveOutcome,
    ObstacleField, SpeedConfig, VerticalStep,
};

use crate::config::SimConfig;
use crate::hud::HudSink;
use crate::meters::{MeterChange, MeterConfig};
use crate::player::PlayerState;

/// What one tick did, mainly for tests and debugging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub vertical: VerticalStep,
    pub movement: MoveOutcome,
    pub meters: MeterChange,
}

/// Owns the player and advances it once per frame.
pub struct FrameSimulator<F, C> {
    player: PlayerState,
    obstacles: F,
    clock: C,
    jump: JumpConfig,
    speed: SpeedConfig,
    meters: MeterConfig,
    player_radius: f32,
}

impl<F: ObstacleField, C: Clock> FrameSimulator<F, C> {
    pub fn new(config: &SimConfig, obstacles: F, clock: C) -> Self {
        let player = PlayerState::spawn(config, clock.now());
        Self {
            player,
            obstacles,
            clock,
            jump: config.jump(),
            speed: config.speed(),
            meters: config.meters(),
            player_radius: config.player_radius,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn obstacles(&self) -> &F {
        &self.obstacles
    }

    /// Advance one tick. Reads the clock once; never blocks.
    pub fn advance(
        &mut self,
        intents: &Intents,
        camera: &mut Camera,
        hud: &mut dyn HudSink,
    ) -> TickReport {
        let now = self.clock.now();
        self.player.look_yaw = intents.look_yaw;
        self.apply_zoom(intents.zoom, camera, hud);

        let vertical = self
            .player
            .vertical
            .update(&mut self.player.position.y, intents.jump, &self.jump);

        let movement = self.move_horizontal(intents);

        let meters = self.player.meters.update(now, intents.sprint, &self.meters, hud);

        camera.set_position(self.player.position);
        camera.set_yaw(self.player.look_yaw);

        TickReport {
            vertical,
            movement,
            meters,
        }
    }

    fn apply_zoom(&mut self, zoom: bool, camera: &mut Camera, hud: &mut dyn HudSink) {
        let preset = if zoom {
            FovPreset::Zoomed
        } else {
            FovPreset::Normal
        };
        camera.set_fov_preset(preset);
        if self.player.zoomed != zoom {
            self.player.zoomed = zoom;
            hud.set_scope(zoom);
        }
    }

    fn move_horizontal(&mut self, intents: &Intents) -> MoveOutcome {
        let keys = MoveKeys {
            forward: intents.forward,
            backward: intents.backward,
            left: intents.left,
            right: intents.right,
        };
        let Some(local) = local_direction(keys) else {
            return MoveOutcome::Idle;
        };
        let direction = world_direction(local, self.player.look_yaw);
        let speed = movement_speed(&self.speed, intents.sprint, intents.zoom);

        let outcome = try_move(
            &self.obstacles,
            self.player.ground_position(),
            direction,
            speed,
            self.player_radius,
        );
        if let MoveOutcome::Moved(p) = outcome {
            self.player.set_ground_position(p);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::testing::RecordingHud;
    use engine_core::{ManualClock, Vec2, Vec3};
    use physics::{Obstacle, ObstacleGrid, ObstacleList, VerticalPhase};
    use std::time::Duration;

    fn config_at(x: f32, z: f32) -> SimConfig {
        SimConfig {
            spawn: [x, 1.6, z],
            ..Default::default()
        }
    }

    fn forward() -> Intents {
        Intents {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();

        let report = sim.advance(&Intents::default(), &mut camera, &mut hud);
        assert_eq!(report.movement, MoveOutcome::Idle);
        assert_eq!(sim.player().position, Vec3::new(0.0, 1.6, 0.0));
        assert_eq!(camera.position(), Vec3::new(0.0, 1.6, 0.0));
    }

    #[test]
    fn walks_forward_along_negative_z() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();

        for _ in 0..10 {
            sim.advance(&forward(), &mut camera, &mut hud);
        }
        let p = sim.player().position;
        assert!((p.z + 0.8).abs() < 1e-4, "p = {:?}", p);
        assert!(p.x.abs() < 1e-6);
        assert_eq!(camera.position(), p);
    }

    #[test]
    fn diagonal_step_is_not_faster() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();
        let intents = Intents {
            forward: true,
            left: true,
            sprint: true,
            look_yaw: 0.7,
            ..Default::default()
        };

        let before = sim.player().ground_position();
        sim.advance(&intents, &mut camera, &mut hud);
        let moved = sim.player().ground_position().distance(before);
        assert!((moved - 0.08 * 1.8).abs() < 1e-5, "moved {}", moved);
        assert_eq!(camera.yaw(), 0.7);
    }

    #[test]
    fn zoom_slows_and_narrows_view() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();
        let zoomed = Intents {
            zoom: true,
            ..forward()
        };

        sim.advance(&zoomed, &mut camera, &mut hud);
        assert_eq!(camera.fov_degrees, 30.0);
        assert!((sim.player().position.z + 0.032).abs() < 1e-6);
        sim.advance(&zoomed, &mut camera, &mut hud);
        sim.advance(&forward(), &mut camera, &mut hud);
        assert_eq!(camera.fov_degrees, 75.0);
        assert_eq!(hud.scope, vec![true, false]);
    }

    #[test]
    fn tree_blocks_the_path() {
        let clock = ManualClock::new();
        let field = ObstacleList::new(vec![Obstacle::new(Vec2::new(0.0, -3.0), 0.3)]);
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), field, &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();

        let mut blocked = 0;
        for _ in 0..100 {
            if sim.advance(&forward(), &mut camera, &mut hud).movement == MoveOutcome::Blocked {
                blocked += 1;
            }
            let p = sim.player().ground_position();
            assert!(p.distance(Vec2::new(0.0, -3.0)) >= 1.1 - 1e-6);
        }
        assert!(blocked > 50);
        assert!(sim.player().position.z < -1.8);
    }

    /// Wandering through a dense grid never ends up inside an obstacle.
    #[test]
    fn committed_positions_respect_every_obstacle() {
        let mut obstacles = Vec::new();
        for i in -4..=4 {
            for j in -4..=4 {
                if i == 0 && j == 0 {
                    continue;
                }
                obstacles.push(Obstacle::new(Vec2::new(i as f32 * 2.5, j as f32 * 2.5), 0.3));
            }
        }
        let clock = ManualClock::new();
        let grid = ObstacleGrid::new(obstacles.clone(), 4.0);
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), grid, &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();

        for tick in 0..2000u32 {
            let intents = Intents {
                forward: tick % 5 != 0,
                right: tick % 3 == 0,
                sprint: tick % 7 < 4,
                look_yaw: tick as f32 * 0.013,
                ..Default::default()
            };
            sim.advance(&intents, &mut camera, &mut hud);
            let p = sim.player().ground_position();
            for o in &obstacles {
                assert!(p.distance(o.position) >= o.radius + 0.8 - 1e-5);
            }
        }
    }

    #[test]
    fn jump_then_land_while_moving() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();

        let jump = Intents {
            jump: true,
            ..forward()
        };
        let report = sim.advance(&jump, &mut camera, &mut hud);
        assert!(report.vertical.jumped);
        assert!(sim.player().position.y > 1.6);

        let mut ticks = 0;
        while sim.player().vertical.phase() != VerticalPhase::Grounded {
            // Mashing jump mid-air does nothing.
            let v = sim.player().vertical.velocity();
            let report = sim.advance(&jump, &mut camera, &mut hud);
            assert!(!report.vertical.jumped);
            if !report.vertical.landed {
                assert_eq!(sim.player().vertical.velocity(), v - 0.015);
            }
            ticks += 1;
            assert!(ticks < 500);
        }
        assert_eq!(sim.player().position.y, 1.6);
        assert_eq!(camera.position().y, 1.6);
    }

    #[test]
    fn meters_follow_the_clock_not_the_tick_rate() {
        let clock = ManualClock::new();
        let mut sim = FrameSimulator::new(&config_at(0.0, 0.0), ObstacleList::default(), &clock);
        let mut camera = Camera::default();
        let mut hud = RecordingHud::default();
        let sprint = Intents {
            sprint: true,
            ..Default::default()
        };

        // Many fast ticks inside one debounce window: no update.
        for _ in 0..12 {
            clock.advance(Duration::from_millis(10));
            sim.advance(&sprint, &mut camera, &mut hud);
        }
        assert_eq!(sim.player().hunger(), 100.0);
        assert!(hud.hunger.is_empty());

        clock.advance(Duration::from_millis(100));
        sim.advance(&sprint, &mut camera, &mut hud);
        assert!((sim.player().hunger() - 98.9).abs() < 1e-3, "{}", sim.player().hunger());
        assert_eq!(hud.hunger.len(), 1);
    }
}
