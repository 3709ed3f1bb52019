use raylib::prelude::*;

use crate::carousel::{ControlState, Frame, Handles, Surface, RETRY_LABEL};
use crate::config::{CarouselConfig, Direction};
use crate::constants::SLIDE_DURATION;
use crate::content::SlideItem;
use crate::page::layout::wrap_text;
use crate::page::theme::*;
use crate::texture_loader::TextureCache;

const MESSAGE_CHARS: usize = 30;
const MESSAGE_LINES: usize = 8;

/// Raylib surface for the testimonials carousel. Holds the mounted cards and animates the
/// strip towards the offset of the latest frame.
pub struct CarouselView {
    direction: Direction,
    stride: f32,
    card_width: f32,
    cards: Vec<SlideItem>,
    frame: Option<Frame>,
    displayed_offset: f32,
    from_offset: f32,
    target_offset: f32,
    elapsed: f32,
}

impl CarouselView {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            direction: config.direction,
            stride: config.stride(),
            card_width: config.card_width,
            cards: Vec::new(),
            frame: None,
            displayed_offset: 0.0,
            from_offset: 0.0,
            target_offset: 0.0,
            elapsed: SLIDE_DURATION,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(SLIDE_DURATION);
        let t = self.elapsed / SLIDE_DURATION;
        let eased = 1.0 - (1.0 - t).powi(3);
        self.displayed_offset = self.from_offset + (self.target_offset - self.from_offset) * eased;
    }

    pub fn displayed_offset(&self) -> f32 {
        self.displayed_offset
    }

    fn card_x(&self, track: &Rectangle, index: usize) -> f32 {
        let base = match self.direction {
            Direction::Ltr => track.x + index as f32 * self.stride,
            Direction::Rtl => track.x + track.width - self.card_width - index as f32 * self.stride,
        };
        base + self.displayed_offset
    }

    /// Draws the carousel; `scroll_y` converts page coordinates to the screen.
    pub fn draw(&self, d: &mut RaylibDrawHandle, handles: &Handles, scroll_y: f32, textures: &TextureCache) {
        let Some(frame) = &self.frame else {
            return;
        };
        let shift = |r: Rectangle| Rectangle::new(r.x, r.y - scroll_y, r.width, r.height);
        let track = shift(handles.track);

        match frame {
            Frame::Placeholder { message, retry } => {
                d.draw_rectangle_rounded(track, 0.08, 12, SURFACE);
                let center = track.x + track.width * 0.5;
                draw_centered_text(d, message, center, track.y + track.height * 0.5 - 40.0, 28, MUTED);
                if *retry {
                    let button = shift(handles.retry_button());
                    d.draw_rectangle_rounded(button, 0.4, 8, ACCENT);
                    draw_centered_text(d, RETRY_LABEL, button.x + button.width * 0.5, button.y + 12.0, 24, TEXT);
                }
            }
            Frame::Slides(slides) => {
                for (index, item) in self.cards.iter().enumerate() {
                    let x = self.card_x(&track, index);
                    if x + self.card_width < track.x || x > track.x + track.width {
                        continue;
                    }
                    let card = Rectangle::new(x, track.y, self.card_width, track.height);
                    let opacity = if index == slides.current { 1.0 } else { 0.75 };
                    draw_card(d, item, card, opacity, textures);
                }

                // Mask cards sliding in or out on either side of the track
                let mask_width = self.stride;
                d.draw_rectangle_rec(Rectangle::new(track.x - mask_width, track.y, mask_width, track.height), BACKGROUND);
                d.draw_rectangle_rec(Rectangle::new(track.x + track.width, track.y, mask_width, track.height), BACKGROUND);

                if let (Some(area), Some(state)) = (handles.previous, slides.previous) {
                    draw_control(d, shift(area), "<", state);
                }
                if let (Some(area), Some(state)) = (handles.next, slides.next) {
                    draw_control(d, shift(area), ">", state);
                }
                if let (Some(area), Some(active)) = (handles.indicators, &slides.indicators) {
                    draw_indicators(d, shift(area), active);
                }
            }
        }
    }
}

impl Surface for CarouselView {
    fn mount(&mut self, items: &[SlideItem]) {
        self.cards = items.to_vec();
        self.displayed_offset = 0.0;
        self.from_offset = 0.0;
        self.target_offset = 0.0;
        self.elapsed = SLIDE_DURATION;
    }

    fn present(&mut self, frame: &Frame) {
        if let Frame::Slides(slides) = frame {
            self.from_offset = self.displayed_offset;
            self.target_offset = slides.offset_x;
            self.elapsed = 0.0;
        }
        self.frame = Some(frame.clone());
    }
}

fn draw_card(d: &mut RaylibDrawHandle, item: &SlideItem, card: Rectangle, opacity: f32, textures: &TextureCache) {
    d.draw_rectangle_rounded(card, 0.08, 12, fade(SURFACE, opacity));

    let pad = 28.0;
    let avatar = Rectangle::new(card.x + pad, card.y + pad, 72.0, 72.0);
    match item.image.as_deref().and_then(|asset| textures.get(asset)) {
        Some(texture) => draw_texture_in(d, texture, avatar, fade(Color::WHITE, opacity)),
        None => draw_badge(
            d,
            Vector2::new(avatar.x + avatar.width * 0.5, avatar.y + avatar.height * 0.5),
            avatar.width * 0.5,
            &item.initials(),
            opacity,
        ),
    }

    let info_x = (avatar.x + avatar.width + 16.0) as i32;
    d.draw_text(&item.name, info_x, (avatar.y + 8.0) as i32, 20, fade(TEXT, opacity));
    if let Some(role) = &item.role {
        d.draw_text(role, info_x, (avatar.y + 36.0) as i32, 18, fade(MUTED, opacity));
    }

    let stars_y = avatar.y + avatar.height + 20.0;
    for star in 0..item.stars() {
        d.draw_circle_v(Vector2::new(card.x + pad + 8.0 + star as f32 * 22.0, stars_y), 7.0, fade(STAR, opacity));
    }

    let mut y = stars_y + 24.0;
    for line in wrap_text(&item.message, MESSAGE_CHARS).iter().take(MESSAGE_LINES) {
        d.draw_text(line, (card.x + pad) as i32, y as i32, 20, fade(TEXT, opacity));
        y += 26.0;
    }

    let signature = Rectangle::new(card.x + card.width - pad - 120.0, card.y + card.height - pad - 40.0, 120.0, 40.0);
    match item.signature.as_deref().and_then(|asset| textures.get(asset)) {
        Some(texture) => draw_texture_in(d, texture, signature, fade(Color::WHITE, opacity)),
        None => d.draw_text(
            "Signature",
            signature.x as i32,
            (signature.y + 10.0) as i32,
            18,
            fade(MUTED, opacity * 0.6),
        ),
    }
    if let Some(date) = &item.date {
        d.draw_text(date, (card.x + pad) as i32, (signature.y + 10.0) as i32, 16, fade(MUTED, opacity));
    }
}

fn draw_control(d: &mut RaylibDrawHandle, area: Rectangle, label: &str, state: ControlState) {
    let opacity = if state.is_enabled() { 1.0 } else { 0.3 };
    let center = Vector2::new(area.x + area.width * 0.5, area.y + area.height * 0.5);
    d.draw_circle_v(center, area.width * 0.5, fade(SURFACE, opacity));
    draw_centered_text(d, label, center.x, center.y - 16.0, 32, fade(TEXT, opacity));
}

fn draw_indicators(d: &mut RaylibDrawHandle, area: Rectangle, active: &[bool]) {
    if active.is_empty() {
        return;
    }
    let slot = area.width / active.len() as f32;
    for (i, is_active) in active.iter().enumerate() {
        let center = Vector2::new(area.x + slot * (i as f32 + 0.5), area.y + area.height * 0.5);
        if *is_active {
            d.draw_circle_v(center, 8.0, ACCENT);
        } else {
            d.draw_circle_v(center, 5.0, MUTED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{RotationController, SlideFrame};
    use crate::content::builtin_testimonials;
    use crate::page::layout::carousel_handles;

    #[test]
    fn strip_eases_to_presented_offset() {
        let config = CarouselConfig::default();
        let mut view = CarouselView::new(&config);
        view.mount(&builtin_testimonials());
        view.present(&Frame::Slides(SlideFrame {
            current: 1,
            offset_x: -382.0,
            indicators: None,
            previous: None,
            next: None,
        }));
        assert_eq!(view.displayed_offset(), 0.0);
        view.update(SLIDE_DURATION * 0.5);
        let halfway = view.displayed_offset();
        assert!(halfway < -191.0 && halfway > -382.0);
        view.update(SLIDE_DURATION);
        assert_eq!(view.displayed_offset(), -382.0);
    }

    #[test]
    fn controller_drives_the_view() {
        let config = CarouselConfig::default();
        let items = builtin_testimonials();
        let handles = carousel_handles(items.len(), config.stride(), config.card_width);
        let mut carousel = RotationController::new(items, handles, config.clone(), CarouselView::new(&config));
        assert_eq!(carousel.surface().cards.len(), 6);
        carousel.previous();
        carousel.surface_mut().update(1.0);
        assert_eq!(carousel.surface().displayed_offset(), -5.0 * config.stride());
    }

    #[test]
    fn rtl_cards_start_from_the_right() {
        let config = CarouselConfig { direction: Direction::Rtl, ..CarouselConfig::default() };
        let view = CarouselView::new(&config);
        let track = Rectangle::new(0.0, 0.0, 1114.0, 420.0);
        assert_eq!(view.card_x(&track, 0), 1114.0 - 350.0);
        assert_eq!(view.card_x(&track, 1), 1114.0 - 350.0 - 382.0);
    }
}
