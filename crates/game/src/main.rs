//! Greenwood - first-person walk through a procedurally planted forest.

mod config;
mod hud;
mod meters;
mod player;
mod scene;
mod simulation;

use anyhow::{Context, Result};
use engine_core::{Camera, SystemClock, Time, Vec2};
use input::{InputState, KeyCode};
use physics::{MoveOutcome, ObstacleGrid};
use procgen::{Forest, ForestConfig};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use config::GameConfig;
use hud::{Hotbar, TitleHud};
use simulation::FrameSimulator;

/// Frames between title refreshes when nothing else changed (keeps the FPS readout live).
const TITLE_REFRESH_FRAMES: u64 = 30;

/// Everything that lives for the whole session.
struct GameState {
    input: InputState,
    camera: Camera,
    simulator: FrameSimulator<ObstacleGrid, SystemClock>,
    hud: TitleHud,
    hotbar: Hotbar,
    time: Time,
}

impl GameState {
    fn new(config: &GameConfig) -> Self {
        let sim = &config.sim;
        let forest = Forest::generate(&ForestConfig {
            seed: config.world_seed,
            spawn: Vec2::new(sim.spawn[0], sim.spawn[2]),
            ..Default::default()
        });
        let world = scene::build_scene(&forest);
        scene::log_summary(&world);
        let obstacles = scene::obstacle_grid(&world);

        let simulator = FrameSimulator::new(sim, obstacles, SystemClock::new());
        log::info!(
            "Player spawned at {:?} among {} obstacles",
            simulator.player().position,
            simulator.obstacles().len()
        );

        let camera = Camera::with_fov(simulator.player().position, sim.normal_fov, sim.zoomed_fov);
        let hud = TitleHud::new(simulator.player().health(), simulator.player().hunger());

        let mut input = InputState::new();
        input.set_sensitivity(config.sensitivity);

        Self {
            input,
            camera,
            simulator,
            hud,
            hotbar: Hotbar::new(),
            time: Time::new(),
        }
    }

    /// Run one tick. Returns the new window title if it should change.
    fn frame(&mut self) -> Option<String> {
        self.time.update();

        let hotbar_changed = match self.input.hotbar_request() {
            Some(request) => {
                self.hotbar.apply(request);
                true
            }
            None => false,
        };

        let intents = self.input.intents();
        let report = self.simulator.advance(&intents, &mut self.camera, &mut self.hud);
        self.input.end_frame();

        if report.vertical.jumped {
            log::debug!("Jump from {:?}", self.simulator.player().position);
        }
        if report.vertical.landed {
            log::debug!("Landed at {:?}", self.simulator.player().position);
        }
        if report.movement == MoveOutcome::Blocked {
            log::trace!("Movement blocked by a tree");
        }
        if report.meters.health || report.meters.hunger {
            let player = self.simulator.player();
            log::trace!("Health {:.1}, hunger {:.1}", player.health(), player.hunger());
        }

        let refresh = self.time.frame_count() % TITLE_REFRESH_FRAMES == 0;
        if self.hud.take_dirty() || hotbar_changed || refresh {
            Some(self.hud.render(&self.hotbar, self.time.fps()))
        } else {
            None
        }
    }
}

struct App {
    config: GameConfig,
    window: Option<Window>,
    state: GameState,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            window: None,
            state,
            error: None,
        }
    }

    fn set_cursor_locked(&mut self, locked: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if locked {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Could not lock cursor: {}", e);
                return;
            }
            window.set_cursor_visible(false);
        } else {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("Could not release cursor: {}", e);
            }
            window.set_cursor_visible(true);
        }
        self.state.input.set_cursor_locked(locked);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("Greenwood")
            .with_inner_size(LogicalSize::new(self.config.window_width, self.config.window_height));
        match event_loop.create_window(attributes).context("creating window") {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => self.set_cursor_locked(false),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.state.input.process_keyboard(key, event.state);
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        self.set_cursor_locked(false);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.state.input.process_mouse_button(button, state);
                if button == MouseButton::Left
                    && state == ElementState::Pressed
                    && !self.state.input.is_cursor_locked()
                {
                    self.set_cursor_locked(true);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                self.state.input.process_scroll(dy);
            }
            WindowEvent::RedrawRequested => {
                if let Some(title) = self.state.frame() {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Greenwood");
    println!("  Click        - capture mouse   |  Escape      - release mouse");
    println!("  WASD         - move            |  Mouse       - look around");
    println!("  Shift        - sprint          |  Space       - jump");
    println!("  Right mouse  - scope           |  1-5 / wheel - hotbar");

    let config = GameConfig::load();
    log::info!("Starting Greenwood (world seed {})", config.world_seed);

    let event_loop = EventLoop::new()?;
    // Poll so a tick runs every frame, not only when input arrives.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;

    #[test]
    fn game_state_spawns_clear_of_trees() {
        let state = GameState::new(&GameConfig::default());
        let player = state.simulator.player();
        assert_eq!(player.position, Vec3::new(0.0, 1.6, 40.0));
        assert_eq!(state.camera.position(), player.position);
        assert_eq!(state.camera.fov_degrees, 75.0);
    }

    #[test]
    fn frame_applies_hotbar_and_renders_title() {
        let mut state = GameState::new(&GameConfig::default());
        state.input.process_scroll(-1.0);
        let title = state.frame().expect("first frame renders the title");
        assert_eq!(state.hotbar.selected(), 1);
        assert!(title.contains("[2]"), "{}", title);
        assert!(state.frame().is_none());
    }
}
