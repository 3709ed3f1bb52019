use crate::constants::*;

/// How an element behaves once it has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Stays visible after the first entrance.
    Once,
    /// Hides again whenever it leaves the viewport.
    Toggle,
}

/// Interpolated presentation of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Waiting(f32),
    Animating(f32),
    Shown,
}

/// Staggered entrance animations for a fixed set of page elements.
#[derive(Debug, Clone)]
pub struct Reveal {
    mode: RevealMode,
    phases: Vec<Phase>,
}

/// Fraction of `[top, top + height)` inside the viewport, whose bottom edge is pulled up by
/// the root margin.
pub fn visible_fraction(top: f32, height: f32, view_top: f32, view_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_bottom = view_top + view_height - REVEAL_ROOT_MARGIN;
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

fn ease(t: f32) -> f32 {
    // ease-out cubic
    1.0 - (1.0 - t).powi(3)
}

impl Reveal {
    pub fn new(count: usize, mode: RevealMode) -> Self {
        Self { mode, phases: vec![Phase::Hidden; count] }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Feeds the current visibility of element `index`.
    pub fn observe(&mut self, index: usize, fraction: f32) {
        let Some(phase) = self.phases.get_mut(index) else {
            return;
        };
        let intersecting = fraction >= REVEAL_THRESHOLD;
        match (*phase, intersecting) {
            (Phase::Hidden, true) => *phase = Phase::Waiting(index as f32 * REVEAL_STAGGER),
            (Phase::Hidden, false) => {}
            (_, false) if self.mode == RevealMode::Toggle => *phase = Phase::Hidden,
            _ => {}
        }
    }

    pub fn update(&mut self, dt: f32) {
        for phase in self.phases.iter_mut() {
            let mut left = dt;
            if let Phase::Waiting(delay) = *phase {
                if delay > left {
                    *phase = Phase::Waiting(delay - left);
                    continue;
                }
                left -= delay;
                *phase = Phase::Animating(0.0);
            }
            if let Phase::Animating(elapsed) = *phase {
                *phase = if elapsed + left >= REVEAL_DURATION {
                    Phase::Shown
                } else {
                    Phase::Animating(elapsed + left)
                };
            }
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(self.phases.get(index), Some(Phase::Shown))
    }

    pub fn style(&self, index: usize) -> RevealStyle {
        let t = match self.phases.get(index) {
            Some(Phase::Animating(elapsed)) => ease((elapsed / REVEAL_DURATION).clamp(0.0, 1.0)),
            Some(Phase::Shown) => 1.0,
            _ => 0.0,
        };
        RevealStyle {
            opacity: t,
            offset_y: REVEAL_OFFSET * (1.0 - t),
            scale: REVEAL_SCALE + (1.0 - REVEAL_SCALE) * t,
        }
    }
}
