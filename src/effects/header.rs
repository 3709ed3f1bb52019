use crate::constants::{HEADER_HIDE_THRESHOLD, HEADER_SCROLL_THRESHOLD};

/// Header appearance driven by the page scroll offset.
///
/// Scroll events only record the latest offset; [`update`](Self::update) applies it once per
/// frame, however many events arrived in between.
#[derive(Debug, Clone, Default)]
pub struct ScrollHeader {
    scrolled: bool,
    hidden: bool,
    last_scroll_y: f32,
    pending: Option<f32>,
}

impl ScrollHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.pending = Some(scroll_y);
    }

    /// Returns true when a pending scroll offset was applied.
    pub fn update(&mut self) -> bool {
        let Some(scroll_y) = self.pending.take() else {
            return false;
        };
        self.scrolled = scroll_y >= HEADER_SCROLL_THRESHOLD;
        self.hidden = scroll_y > self.last_scroll_y && scroll_y > HEADER_HIDE_THRESHOLD;
        self.last_scroll_y = scroll_y;
        true
    }

    /// Solid background once the page has moved past the first few pixels.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Slid out of view while the user scrolls down.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_at_threshold() {
        let mut header = ScrollHeader::new();
        header.on_scroll(49.0);
        header.update();
        assert!(!header.is_scrolled());
        header.on_scroll(50.0);
        header.update();
        assert!(header.is_scrolled());
        assert!(!header.is_hidden());
    }

    #[test]
    fn hides_only_when_scrolling_down_past_hide_threshold() {
        let mut header = ScrollHeader::new();
        header.on_scroll(150.0);
        header.update();
        assert!(header.is_hidden());

        header.on_scroll(120.0);
        header.update();
        assert!(!header.is_hidden());
        assert!(header.is_scrolled());

        header.on_scroll(90.0);
        header.update();
        header.on_scroll(95.0);
        header.update();
        assert!(!header.is_hidden());
    }

    #[test]
    fn coalesces_events_per_frame() {
        let mut header = ScrollHeader::new();
        assert!(!header.update());
        header.on_scroll(300.0);
        header.on_scroll(10.0);
        assert!(header.update());
        assert!(!header.is_scrolled());
        assert!(!header.update());
    }
}
