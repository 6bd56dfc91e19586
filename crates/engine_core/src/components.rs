//! Common components used across the engine.

/// A resource value clamped to `[0, max]` (health, hunger).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meter {
    current: f32,
    max: f32,
}

impl Meter {
    /// Create a full meter.
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Create a meter at a given value (clamped).
    pub fn with_value(value: f32, max: f32) -> Self {
        let mut meter = Self::new(max);
        meter.set(value);
        meter
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    /// Set the value, clamped into range.
    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    pub fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn fill(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_clamps_both_ends() {
        let mut m = Meter::new(100.0);
        m.fill(25.0);
        assert_eq!(m.value(), 100.0);
        assert!(m.is_full());
        m.drain(250.0);
        assert_eq!(m.value(), 0.0);
        assert!(m.is_empty());
    }

    #[test]
    fn with_value_clamps() {
        assert_eq!(Meter::with_value(140.0, 100.0).value(), 100.0);
        assert_eq!(Meter::with_value(-3.0, 100.0).value(), 0.0);
        assert_eq!(Meter::with_value(42.5, 100.0).value(), 42.5);
    }
}
