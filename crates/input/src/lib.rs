//! Input handling for keyboard and mouse.
//!
//! Raw window events are folded into an [`InputState`]; once per tick the
//! game takes an [`Intents`] snapshot from it and the simulation reads only that.

use std::collections::HashSet;

/// Radians of yaw per pixel of horizontal mouse motion at sensitivity 1.0.
pub const LOOK_RADIANS_PER_PIXEL: f32 = 0.002;

/// Digit keys that select hotbar slots, in slot order.
pub const HOTBAR_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// Everything the simulation needs from the player's input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    /// Jump was requested this tick.
    pub jump: bool,
    /// Scope held.
    pub zoom: bool,
    /// Accumulated horizontal look rotation in radians.
    pub look_yaw: f32,
}

/// Hotbar selection requested by the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotbarRequest {
    /// Jump straight to a slot (0-based).
    Select(usize),
    Next,
    Previous,
}

/// Manages input state for the current frame.
#[derive(Debug)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,

    /// Accumulated look yaw in radians.
    look_yaw: f32,
    /// Multiplier on [`LOOK_RADIANS_PER_PIXEL`].
    sensitivity: f32,

    /// Whether the cursor is captured/locked.
    cursor_locked: bool,

    /// Mouse scroll state
    scroll_up: bool,
    scroll_down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            mouse_held: HashSet::new(),
            look_yaw: 0.0,
            sensitivity: 1.0,
            cursor_locked: false,
            scroll_up: false,
            scroll_down: false,
        }
    }

    /// Set the mouse sensitivity multiplier.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Clear per-frame state. Call once the tick has consumed its snapshot.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.scroll_up = false;
        self.scroll_down = false;
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
            }
        }
    }

    /// Process raw mouse movement. Only turns the view while the cursor is locked.
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.cursor_locked {
            self.look_yaw -= delta.0 as f32 * LOOK_RADIANS_PER_PIXEL * self.sensitivity;
        }
    }

    /// Process a wheel movement; positive `delta_y` scrolls up.
    pub fn process_scroll(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.scroll_up = true;
        } else if delta_y < 0.0 {
            self.scroll_down = true;
        }
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a mouse button is held.
    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Check if the cursor is locked.
    pub fn is_cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// Set cursor lock state. Look and zoom input are ignored while unlocked.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        if self.cursor_locked != locked {
            log::debug!("Cursor lock: {}", locked);
        }
        self.cursor_locked = locked;
    }

    /// Current look yaw in radians.
    pub fn look_yaw(&self) -> f32 {
        self.look_yaw
    }

    /// Check if sprint is held (Shift).
    pub fn is_sprinting(&self) -> bool {
        self.is_key_held(KeyCode::ShiftLeft) || self.is_key_held(KeyCode::ShiftRight)
    }

    /// Check if jump was pressed (Space).
    pub fn is_jump_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::Space)
    }

    /// Check if the scope is up (right mouse, cursor locked).
    pub fn is_zooming(&self) -> bool {
        self.cursor_locked && self.is_mouse_held(MouseButton::Right)
    }

    /// Snapshot of this frame's intents for the simulation.
    pub fn intents(&self) -> Intents {
        Intents {
            forward: self.is_key_held(KeyCode::KeyW),
            backward: self.is_key_held(KeyCode::KeyS),
            left: self.is_key_held(KeyCode::KeyA),
            right: self.is_key_held(KeyCode::KeyD),
            sprint: self.is_sprinting(),
            jump: self.is_jump_pressed(),
            zoom: self.is_zooming(),
            look_yaw: self.look_yaw,
        }
    }

    /// Hotbar change requested this frame, if any. Digit keys win over the wheel.
    pub fn hotbar_request(&self) -> Option<HotbarRequest> {
        if let Some(slot) = HOTBAR_KEYS.iter().position(|k| self.is_key_pressed(*k)) {
            return Some(HotbarRequest::Select(slot));
        }
        if self.scroll_down {
            Some(HotbarRequest::Next)
        } else if self.scroll_up {
            Some(HotbarRequest::Previous)
        } else {
            None
        }
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
