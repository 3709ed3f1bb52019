/// Direction the pointer travelled during a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Leftward,
    Rightward,
}

/// Turns a press/release pair into a swipe once the horizontal travel exceeds the threshold.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        Some(if diff > 0.0 { Swipe::Leftward } else { Swipe::Rightward })
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
