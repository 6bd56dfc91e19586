//! Hunger and health meters.
//!
//! Both meters run on wall-clock throttles rather than per tick:
//! - every `update_interval` or more, hunger regenerates (not sprinting) or
//!   drains (sprinting), scaled by the elapsed time; if hunger is empty,
//!   health drains in the same pass, also elapsed-scaled.
//! - every `regen_interval` or more, while not starving and below max,
//!   health gains a flat `health_regen_amount`.
//!
//! The regen clock only restarts when regen actually happens.

use engine_core::Meter;
use std::time::Duration;

use crate::hud::HudSink;

/// Rates and throttles for [`ResourceMeters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterConfig {
    pub max: f32,
    pub hunger_drain_rate: f32,
    pub hunger_regen_rate: f32,
    pub health_drain_rate: f32,
    pub health_regen_amount: f32,
    pub update_interval: Duration,
    pub regen_interval: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            hunger_drain_rate: 5.0,
            hunger_regen_rate: 0.5,
            health_drain_rate: 3.0,
            health_regen_amount: 2.0,
            update_interval: Duration::from_millis(200),
            regen_interval: Duration::from_secs(1),
        }
    }
}

/// Which meters changed during an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeterChange {
    pub hunger: bool,
    pub health: bool,
}

/// Health and hunger with their update timestamps.
#[derive(Debug, Clone)]
pub struct ResourceMeters {
    health: Meter,
    hunger: Meter,
    last_update: Duration,
    last_regen: Duration,
}

impl ResourceMeters {
    /// Full meters, with both throttles starting at `now`.
    pub fn new(max: f32, now: Duration) -> Self {
        Self::with_values(max, max, max, now)
    }

    pub fn with_values(health: f32, hunger: f32, max: f32, now: Duration) -> Self {
        Self {
            health: Meter::with_value(health, max),
            hunger: Meter::with_value(hunger, max),
            last_update: now,
            last_regen: now,
        }
    }

    pub fn health(&self) -> f32 {
        self.health.value()
    }

    pub fn hunger(&self) -> f32 {
        self.hunger.value()
    }

    pub fn is_starving(&self) -> bool {
        self.hunger.is_empty()
    }

    /// Run both throttled updates for this tick, pushing changed values to the HUD.
    pub fn update(
        &mut self,
        now: Duration,
        sprinting: bool,
        config: &MeterConfig,
        hud: &mut dyn HudSink,
    ) -> MeterChange {
        let mut change = self.update_hunger(now, sprinting, config, hud);
        if self.regen_health(now, config, hud) {
            change.health = true;
        }
        change
    }

    fn update_hunger(
        &mut self,
        now: Duration,
        sprinting: bool,
        config: &MeterConfig,
        hud: &mut dyn HudSink,
    ) -> MeterChange {
        let mut change = MeterChange::default();
        let elapsed = now.saturating_sub(self.last_update);
        if elapsed < config.update_interval {
            return change;
        }
        let dt = elapsed.as_secs_f32();
        let was_starving = self.is_starving();

        let hunger_before = self.hunger.value();
        if !sprinting && !self.hunger.is_full() {
            self.hunger.fill(config.hunger_regen_rate * dt);
        } else if sprinting {
            self.hunger.drain(config.hunger_drain_rate * dt);
        }
        if self.hunger.value() != hunger_before {
            change.hunger = true;
            hud.set_hunger(self.hunger.value());
        }

        if self.is_starving() != was_starving {
            if self.is_starving() {
                log::info!("Hunger depleted, health draining");
            } else {
                log::info!("No longer starving");
            }
        }

        if self.is_starving() && !self.health.is_empty() {
            self.health.drain(config.health_drain_rate * dt);
            change.health = true;
            hud.set_health(self.health.value());
            if self.health.is_empty() {
                log::warn!("Health depleted");
            }
        }

        self.last_update = now;
        change
    }

    fn regen_health(&mut self, now: Duration, config: &MeterConfig, hud: &mut dyn HudSink) -> bool {
        if self.is_starving() || self.health.is_full() {
            return false;
        }
        if now.saturating_sub(self.last_regen) < config.regen_interval {
            return false;
        }
        self.health.fill(config.health_regen_amount);
        self.last_regen = now;
        hud.set_health(self.health.value());
        true
    }
}
