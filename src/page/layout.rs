//! Page geometry in page coordinates (y grows with scroll, origin at the top of the page).

use raylib::prelude::{Rectangle, Vector2};

use crate::carousel::Handles;
use crate::constants::*;

pub const HEADER_HEIGHT: f32 = 80.0;
pub const CONTENT_X: f32 = 160.0;
pub const CONTENT_WIDTH: f32 = RENDER_WIDTH as f32 - 2.0 * CONTENT_X;

pub const HOME_TOP: f32 = 0.0;
pub const HOME_HEIGHT: f32 = RENDER_HEIGHT as f32;
pub const TESTIMONIALS_TOP: f32 = HOME_TOP + HOME_HEIGHT;
pub const TESTIMONIALS_HEIGHT: f32 = 800.0;
pub const SKILLS_TOP: f32 = TESTIMONIALS_TOP + TESTIMONIALS_HEIGHT;
pub const SECTION_TITLE_HEIGHT: f32 = 160.0;

pub const CARD_HEIGHT: f32 = 420.0;
pub const VISIBLE_CARDS: usize = 3;
const CONTROL_SIZE: f32 = 60.0;
const INDICATOR_SLOT: f32 = 28.0;

pub const NAV_LINKS: [(&str, f32); 3] = [
    ("Home", HOME_TOP),
    ("Testimonials", TESTIMONIALS_TOP),
    ("Skills", SKILLS_TOP),
];

/// Home section elements that fade in on load, in stagger order.
pub const HOME_ELEMENTS: [Rectangle; 5] = [
    Rectangle { x: CONTENT_X, y: 300.0, width: 700.0, height: 50.0 },  // greeting
    Rectangle { x: CONTENT_X, y: 360.0, width: 900.0, height: 100.0 }, // name
    Rectangle { x: CONTENT_X, y: 480.0, width: 900.0, height: 60.0 },  // typewriter
    Rectangle { x: CONTENT_X, y: 600.0, width: 700.0, height: 64.0 },  // social links
    Rectangle { x: 1180.0, y: 260.0, width: 520.0, height: 520.0 },    // profile image
];
pub const PROFILE_INDEX: usize = 4;
pub const SOCIAL_INDEX: usize = 3;
const SOCIAL_ICON: f32 = 64.0;
const SOCIAL_SPACING: f32 = 24.0;

pub fn track(stride: f32, card_width: f32) -> Rectangle {
    let width = stride * (VISIBLE_CARDS - 1) as f32 + card_width;
    Rectangle::new(
        (RENDER_WIDTH as f32 - width) * 0.5,
        TESTIMONIALS_TOP + SECTION_TITLE_HEIGHT + 20.0,
        width,
        CARD_HEIGHT,
    )
}

/// Carousel hit areas for `count` items.
pub fn carousel_handles(count: usize, stride: f32, card_width: f32) -> Handles {
    let track = track(stride, card_width);
    let middle = track.y + (track.height - CONTROL_SIZE) * 0.5;
    let indicators_width = INDICATOR_SLOT * count as f32;
    Handles {
        track,
        previous: Some(Rectangle::new(track.x - CONTROL_SIZE - 30.0, middle, CONTROL_SIZE, CONTROL_SIZE)),
        next: Some(Rectangle::new(track.x + track.width + 30.0, middle, CONTROL_SIZE, CONTROL_SIZE)),
        indicators: (count > 0).then(|| {
            Rectangle::new(
                (RENDER_WIDTH as f32 - indicators_width) * 0.5,
                track.y + track.height + 40.0,
                indicators_width,
                20.0,
            )
        }),
    }
}

pub fn social_icon(index: usize) -> Rectangle {
    let row = HOME_ELEMENTS[SOCIAL_INDEX];
    Rectangle::new(row.x + index as f32 * (SOCIAL_ICON + SOCIAL_SPACING), row.y, SOCIAL_ICON, SOCIAL_ICON)
}

pub fn nav_link(index: usize) -> Rectangle {
    Rectangle::new(RENDER_WIDTH as f32 - 700.0 + index as f32 * 200.0, 20.0, 180.0, 40.0)
}

/// Image rectangle of the open viewer, in screen coordinates.
pub fn modal_image(texture_size: Option<(f32, f32)>) -> Rectangle {
    let max = RENDER_HEIGHT as f32 * 0.8;
    let (w, h) = texture_size.unwrap_or((max, max));
    let scale = (max / w.max(1.0)).min(max / h.max(1.0));
    let (w, h) = (w * scale, h * scale);
    Rectangle::new((RENDER_WIDTH as f32 - w) * 0.5, (RENDER_HEIGHT as f32 - h) * 0.5, w, h)
}

pub fn modal_close(image: Rectangle) -> Rectangle {
    Rectangle::new(image.x + image.width + 10.0, image.y - 50.0, 40.0, 40.0)
}

pub fn page_height(skills_height: f32) -> f32 {
    SKILLS_TOP + SECTION_TITLE_HEIGHT + skills_height + 120.0
}

pub fn max_scroll(skills_height: f32) -> f32 {
    (page_height(skills_height) - RENDER_HEIGHT as f32).max(0.0)
}

/// Maps a window-space pointer onto the fixed-size framebuffer.
pub fn to_framebuffer(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width.max(1.0),
        point.y * RENDER_HEIGHT as f32 / screen_height.max(1.0),
    )
}

/// Greedy word wrap for the default font, measured in characters.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { line.chars().count() + 1 };
        if needed > 0 && needed + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_fits_three_cards() {
        let track = track(CARD_WIDTH + CARD_GAP, CARD_WIDTH);
        assert_eq!(track.width, 3.0 * CARD_WIDTH + 2.0 * CARD_GAP);
        assert_eq!(track.x * 2.0 + track.width, RENDER_WIDTH as f32);
    }

    #[test]
    fn handles_scale_indicators_with_count() {
        let handles = carousel_handles(6, CARD_WIDTH + CARD_GAP, CARD_WIDTH);
        assert_eq!(handles.indicators.unwrap().width, 6.0 * INDICATOR_SLOT);
        assert!(carousel_handles(0, CARD_WIDTH + CARD_GAP, CARD_WIDTH).indicators.is_none());
        let prev = handles.previous.unwrap();
        assert!(prev.x + prev.width < handles.track.x);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("unbreakableword", 4), vec!["unbreakableword"]);
    }

    #[test]
    fn pointer_maps_to_framebuffer() {
        let p = to_framebuffer(Vector2::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!((p.x, p.y), (960.0, 540.0));
    }

    #[test]
    fn modal_image_keeps_aspect() {
        let rect = modal_image(Some((400.0, 200.0)));
        assert_eq!(rect.width / rect.height, 2.0);
        assert!(rect.width <= RENDER_HEIGHT as f32 * 0.8 + 0.01);
    }
}
