//! HUD contract and the window-title HUD.
//!
//! The simulation only ever talks to a [`HudSink`]; how the values end up on
//! screen is the sink's business.

/// Receives meter values and scope state from the simulation.
pub trait HudSink {
    /// Current health, 0..=100.
    fn set_health(&mut self, value: f32);
    /// Current hunger, 0..=100.
    fn set_hunger(&mut self, value: f32);
    /// Scope overlay shown or hidden.
    fn set_scope(&mut self, _active: bool) {}
}

pub const HOTBAR_SLOTS: usize = 5;

/// Placeholder item labels for the first hotbar slots. Items have no behaviour.
const HOTBAR_ITEMS: [&str; 3] = ["gun", "blocks", "medkit"];

/// Hotbar selection. Slot 0 is selected at start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hotbar {
    selected: usize,
}

impl Hotbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a slot directly. Out-of-range slots are ignored.
    pub fn select(&mut self, slot: usize) {
        if slot < HOTBAR_SLOTS {
            self.selected = slot;
        }
    }

    /// Move to the next slot, wrapping.
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % HOTBAR_SLOTS;
    }

    /// Move to the previous slot, wrapping.
    pub fn previous(&mut self) {
        self.selected = (self.selected + HOTBAR_SLOTS - 1) % HOTBAR_SLOTS;
    }

    /// Label of the item in the selected slot, if the slot holds one.
    pub fn selected_item(&self) -> Option<&'static str> {
        HOTBAR_ITEMS.get(self.selected).copied()
    }

    /// Apply a request from the input layer.
    pub fn apply(&mut self, request: input::HotbarRequest) {
        match request {
            input::HotbarRequest::Select(slot) => self.select(slot),
            input::HotbarRequest::Next => self.next(),
            input::HotbarRequest::Previous => self.previous(),
        }
    }
}

/// HUD rendered as a single line of text (used for the window title).
#[derive(Debug, Clone)]
pub struct TitleHud {
    health: f32,
    hunger: f32,
    scoped: bool,
    dirty: bool,
}

impl TitleHud {
    pub fn new(health: f32, hunger: f32) -> Self {
        Self {
            health,
            hunger,
            scoped: false,
            dirty: true,
        }
    }

    /// True once after any value changed.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self, hotbar: &Hotbar, fps: f32) -> String {
        let slots: String = (0..HOTBAR_SLOTS)
            .map(|i| {
                if i == hotbar.selected() {
                    format!("[{}]", i + 1)
                } else {
                    format!(" {} ", i + 1)
                }
            })
            .collect();
        let item = hotbar.selected_item().unwrap_or("-");
        let scope = if self.scoped { " | SCOPE" } else { "" };
        format!(
            "Greenwood | Health {} | Hunger {} | {} {}{} | {:.0} fps",
            self.health.round(),
            self.hunger.round(),
            slots,
            item,
            scope,
            fps
        )
    }
}

impl HudSink for TitleHud {
    fn set_health(&mut self, value: f32) {
        self.health = value;
        self.dirty = true;
    }

    fn set_hunger(&mut self, value: f32) {
        self.hunger = value;
        self.dirty = true;
    }

    fn set_scope(&mut self, active: bool) {
        self.scoped = active;
        self.dirty = true;
    }
}

/// Test sink that records every call.
#[cfg(test)]
pub(crate) mod testing {
    use super::HudSink;

    #[derive(Debug, Default)]
    pub struct RecordingHud {
        pub health: Vec<f32>,
        pub hunger: Vec<f32>,
        pub scope: Vec<bool>,
    }

    impl HudSink for RecordingHud {
        fn set_health(&mut self, value: f32) {
            self.health.push(value);
        }

        fn set_hunger(&mut self, value: f32) {
            self.hunger.push(value);
        }

        fn set_scope(&mut self, active: bool) {
            self.scope.push(active);
        }
    }
}
