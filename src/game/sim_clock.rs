/// Decides whether, and by how much, the simulation advances in a frame.
#[derive(Debug, Clone)]
pub struct SimClock {
    paused: bool,
    max_step: f32,
}

impl SimClock {
    /// A negative or NaN `max_step` freezes the simulation instead of failing.
    pub fn new(max_step: f32) -> Self {
        Self { paused: false, max_step: max_step.max(0.0) }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `None` while paused, otherwise `dt` clamped to `max_step`.
    pub fn step(&self, dt: f32) -> Option<f32> {
        if self.paused {
            return None;
        }
        Some(dt.max(0.0).min(self.max_step))
    }
}
