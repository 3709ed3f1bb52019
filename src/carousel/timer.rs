/// A repeating delay driven by frame time, the carousel's only timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    interval: f32,
    elapsed: f32,
}

impl Countdown {
    pub fn new(interval: f32) -> Self {
        Self { interval, elapsed: 0.0 }
    }

    /// Advances by `dt` seconds and reports whether the delay has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.interval
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn remaining(&self) -> f32 {
        (self.interval - self.elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_interval_is_reached() {
        let mut countdown = Countdown::new(1.0);
        assert!(!countdown.tick(0.5));
        assert_eq!(countdown.remaining(), 0.5);
        assert!(countdown.tick(0.5));
        countdown.restart();
        assert_eq!(countdown.remaining(), 1.0);
    }
}
