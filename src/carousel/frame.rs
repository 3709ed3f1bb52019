use raylib::prelude::{Rectangle, Vector2};

use crate::content::SlideItem;

pub const EMPTY_MESSAGE: &str = "No testimonials are available right now.";
pub const RETRY_LABEL: &str = "Retry";

const RETRY_WIDTH: f32 = 160.0;
const RETRY_HEIGHT: f32 = 48.0;

/// Whether a previous/next control accepts clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Disabled,
}

impl ControlState {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { ControlState::Enabled } else { ControlState::Disabled }
    }

    pub fn is_enabled(self) -> bool {
        self == ControlState::Enabled
    }
}

/// Visual state of a carousel that has at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    pub current: usize,
    /// Horizontal translation of the card strip, relative to its resting position.
    pub offset_x: f32,
    /// One flag per item, true for the active one. `None` without an indicator container.
    pub indicators: Option<Vec<bool>>,
    pub previous: Option<ControlState>,
    pub next: Option<ControlState>,
}

/// Everything a surface needs to draw the carousel after a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Placeholder { message: String, retry: bool },
    Slides(SlideFrame),
}

/// Output target of a [`super::RotationController`].
///
/// `mount` is called with the full item list whenever the list is (re)built, `present`
/// after every state change.
pub trait Surface {
    fn mount(&mut self, items: &[SlideItem]);
    fn present(&mut self, frame: &Frame);
}

/// Screen areas the controller reacts to. Only the track is mandatory; a missing control
/// simply disables the matching feature.
#[derive(Debug, Clone, Copy)]
pub struct Handles {
    pub track: Rectangle,
    pub previous: Option<Rectangle>,
    pub next: Option<Rectangle>,
    /// Container split into one equal-width slot per item.
    pub indicators: Option<Rectangle>,
}

impl Handles {
    pub fn track_only(track: Rectangle) -> Self {
        Self { track, previous: None, next: None, indicators: None }
    }

    /// Index of the indicator slot under `point`, if any.
    pub fn indicator_at(&self, point: Vector2, count: usize) -> Option<usize> {
        let area = self.indicators?;
        if count == 0 || !contains(&area, point) {
            return None;
        }
        let slot = area.width / count as f32;
        let index = ((point.x - area.x) / slot) as usize;
        Some(index.min(count - 1))
    }

    /// Button drawn under the placeholder message.
    pub fn retry_button(&self) -> Rectangle {
        Rectangle::new(
            self.track.x + (self.track.width - RETRY_WIDTH) * 0.5,
            self.track.y + self.track.height * 0.5 + 16.0,
            RETRY_WIDTH,
            RETRY_HEIGHT,
        )
    }
}

/// Inclusive of the top-left edge, exclusive of the bottom-right one.
pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.y >= rect.y
        && point.x < rect.x + rect.width
        && point.y < rect.y + rect.height
}
