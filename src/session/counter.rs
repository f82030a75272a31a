/// Manual tally, never below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSession {
    value: u32,
}

impl CounterSession {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        log::debug!("counter: {}", self.value);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
        log::debug!("counter: {}", self.value);
    }

    pub fn reset(&mut self) {
        self.value = 0;
        log::info!("counter reset");
    }

    /// `value / target`, or 0 for a non-positive target
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, target: i64) -> f32 {
        if target <= 0 {
            return 0.0;
        }
        (self.value as f32 / target as f32).min(1.0)
    }
}
