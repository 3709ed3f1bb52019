//! The portfolio page: home section, testimonials carousel and skills grid drawn into one
//! fixed-size framebuffer.

pub mod carousel_view;
pub mod layout;
pub mod theme;

use std::path::PathBuf;

use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, error, info};

use crate::carousel::{contains, ClickOutcome, NavKey, RotationController};
use crate::config::Config;
use crate::constants::*;
use crate::content::{builtin_testimonials, Content, Profile, SlideItem};
use crate::effects::{
    display_name, visible_fraction, ImageModal, Reveal, RevealMode, ScrollHeader, SkillsGrid, SocialLinks,
    TypeWriter,
};
use crate::engine::Engine;
use crate::state::PageState;
use crate::texture_loader::TextureCache;

use carousel_view::CarouselView;
use layout::*;
use theme::*;

const WHEEL_STEP: f32 = 120.0;
const SCROLL_SMOOTHING: f32 = 12.0;

pub struct PortfolioEngine {
    config: Config,
    content_path: Option<PathBuf>,
    shuffle: bool,
    textures: TextureCache,
    profile: Profile,
    carousel: RotationController<CarouselView>,
    typewriter: TypeWriter,
    header: ScrollHeader,
    home_reveal: Reveal,
    skills_reveal: Reveal,
    modal: ImageModal,
    social: SocialLinks,
    skills: SkillsGrid,
    state: PageState,
    scroll_y: f32,
    scroll_target: f32,
    active_link: usize,
    pointer: Vector2,
}

impl PortfolioEngine {
    pub fn new(config: Config, content: Content, content_path: Option<PathBuf>, assets: PathBuf, shuffle: bool) -> Self {
        let Content { profile, mut testimonials, skills, social } = content;
        if shuffle {
            testimonials.shuffle(&mut rand::rng());
        }

        let carousel_config = config.carousel.clone();
        let handles = carousel_handles(testimonials.len(), carousel_config.stride(), carousel_config.card_width);
        let view = CarouselView::new(&carousel_config);

        Self {
            typewriter: TypeWriter::from_config(&config.typewriter),
            carousel: RotationController::new(testimonials, handles, carousel_config, view),
            modal: ImageModal::new(profile.image.clone()),
            social: SocialLinks::new(&social),
            skills: SkillsGrid::new(skills),
            header: ScrollHeader::new(),
            home_reveal: Reveal::new(HOME_ELEMENTS.len(), RevealMode::Once),
            skills_reveal: Reveal::new(1, RevealMode::Toggle),
            textures: TextureCache::new(assets),
            state: PageState::Browsing,
            scroll_y: 0.0,
            scroll_target: 0.0,
            active_link: 0,
            pointer: Vector2::new(0.0, 0.0),
            profile,
            content_path,
            shuffle,
            config,
        }
    }

    fn load_assets(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let assets: Vec<String> = self
            .profile
            .image
            .iter()
            .chain(self.carousel.items().iter().flat_map(|item| item.image.iter().chain(item.signature.iter())))
            .cloned()
            .collect();
        for asset in assets {
            self.textures.load(rl, thread, &asset);
        }
    }

    fn load_testimonials(&self) -> Vec<SlideItem> {
        let mut items = match &self.content_path {
            Some(path) => match Content::load(path) {
                Ok(content) => content.testimonials,
                Err(e) => {
                    error!(error = %e, "failed to reload testimonials");
                    Vec::new()
                }
            },
            None => builtin_testimonials(),
        };
        if self.shuffle {
            items.shuffle(&mut rand::rng());
        }
        items
    }

    fn reload_testimonials(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let items = self.load_testimonials();
        info!(count = items.len(), "reloading testimonials");
        let handles = carousel_handles(items.len(), self.config.carousel.stride(), self.config.carousel.card_width);
        self.carousel.reload(items);
        self.carousel.set_handles(handles);
        self.load_assets(rl, thread);
    }

    fn skills_height(&self) -> f32 {
        self.skills.height(CONTENT_WIDTH)
    }

    fn modal_rect(&self) -> Rectangle {
        let size = self
            .modal
            .source()
            .and_then(|asset| self.textures.get(asset))
            .map(|t| (t.width() as f32, t.height() as f32));
        modal_image(size)
    }

    fn header_covers(&self, point: Vector2) -> bool {
        !self.header.is_hidden() && point.y < HEADER_HEIGHT
    }

    fn click(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, page_point: Vector2) {
        if self.header_covers(self.pointer) {
            if let Some(index) = (0..NAV_LINKS.len()).find(|i| contains(&nav_link(*i), self.pointer)) {
                self.active_link = index;
                self.scroll_target = NAV_LINKS[index].1.min(max_scroll(self.skills_height()));
                debug!(section = NAV_LINKS[index].0, "scrolling to section");
            }
            return;
        }

        if contains(&HOME_ELEMENTS[PROFILE_INDEX], page_point) {
            self.modal.image_clicked();
            if self.modal.is_open() {
                self.state = PageState::ModalOpen;
            }
            return;
        }

        if self.social.is_container_visible() {
            let hit = (0..self.social.shown().len()).find(|i| contains(&social_icon(*i), page_point));
            if let Some(index) = hit {
                let link = &self.social.shown()[index];
                info!(platform = display_name(&link.platform), url = %link.url, "social profile selected");
                let icon = social_icon(index);
                self.social.clicked(index, Vector2::new(page_point.x - icon.x, page_point.y - icon.y));
                return;
            }
        }

        if self.carousel.click(page_point) == ClickOutcome::Retry {
            self.reload_testimonials(rl, thread);
        }
    }

    fn observe_visibility(&mut self) {
        let view_height = RENDER_HEIGHT as f32;
        for (i, element) in HOME_ELEMENTS.iter().enumerate() {
            let fraction = visible_fraction(element.y, element.height, self.scroll_y, view_height);
            self.home_reveal.observe(i, fraction);
        }
        let skills = visible_fraction(
            SKILLS_TOP,
            SECTION_TITLE_HEIGHT + self.skills_height(),
            self.scroll_y,
            view_height,
        );
        self.skills_reveal.observe(0, skills);
    }

    fn draw_header(&self, d: &mut RaylibDrawHandle) {
        if self.header.is_hidden() {
            return;
        }
        if self.header.is_scrolled() {
            d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, HEADER_HEIGHT), SURFACE);
        }
        d.draw_text(&self.profile.name, CONTENT_X as i32, 22, 36, TEXT);
        for (i, (label, _)) in NAV_LINKS.iter().enumerate() {
            let area = nav_link(i);
            let color = if i == self.active_link { ACCENT } else { MUTED };
            draw_centered_text(d, label, area.x + area.width * 0.5, area.y + 8.0, 24, color);
            if i == self.active_link {
                d.draw_rectangle_rec(
                    Rectangle::new(area.x + 40.0, area.y + area.height - 4.0, area.width - 80.0, 3.0),
                    ACCENT,
                );
            }
        }
    }

    fn draw_home(&self, d: &mut RaylibDrawHandle) {
        let placed = |i: usize| {
            let style = self.home_reveal.style(i);
            let r = HOME_ELEMENTS[i];
            (r.x, r.y + style.offset_y - self.scroll_y, style.opacity)
        };

        let (x, y, opacity) = placed(0);
        d.draw_text(&self.profile.greeting, x as i32, y as i32, 40, fade(MUTED, opacity));

        let (x, y, opacity) = placed(1);
        d.draw_text(&self.profile.name, x as i32, y as i32, 96, fade(TEXT, opacity));

        let (x, y, opacity) = placed(2);
        let typed = format!("{}|", self.typewriter.visible());
        d.draw_text(&typed, x as i32, y as i32, 48, fade(ACCENT, opacity));

        if self.social.is_container_visible() {
            let (_, y, opacity) = placed(SOCIAL_INDEX);
            for (i, link) in self.social.shown().iter().enumerate() {
                let icon = social_icon(i);
                let entrance = link.entrance_progress();
                let mut alpha = opacity * entrance;
                let mut lift = 20.0 * (1.0 - entrance);
                if let Some(left) = link.removing {
                    let t = (left / SOCIAL_REMOVE_DURATION).clamp(0.0, 1.0);
                    alpha *= t;
                    lift -= 20.0 * (1.0 - t);
                }
                let rect = Rectangle::new(icon.x, y + lift, icon.width, icon.height);
                d.draw_rectangle_rounded(rect, 0.3, 8, fade(SURFACE, alpha));
                let letters: String = display_name(&link.platform).chars().take(2).collect();
                draw_centered_text(d, &letters, rect.x + rect.width * 0.5, rect.y + 20.0, 24, fade(TEXT, alpha));
                for ripple in self.social.ripples().iter().filter(|r| r.link == i) {
                    let p = ripple.progress();
                    d.draw_circle_v(
                        Vector2::new(rect.x + ripple.origin.x, rect.y + ripple.origin.y),
                        rect.width * p,
                        fade(Color::WHITE, 0.3 * (1.0 - p)),
                    );
                }
            }
        }

        let (_, _, opacity) = placed(PROFILE_INDEX);
        let style = self.home_reveal.style(PROFILE_INDEX);
        let r = HOME_ELEMENTS[PROFILE_INDEX];
        let side = r.width * style.scale;
        let frame = Rectangle::new(
            r.x + (r.width - side) * 0.5,
            r.y + style.offset_y - self.scroll_y + (r.height - side) * 0.5,
            side,
            side,
        );
        let texture = self.profile.image.as_deref().and_then(|asset| self.textures.get(asset));
        match texture {
            Some(texture) if self.modal.is_square() => {
                d.draw_rectangle_rounded(frame, 0.06, 12, fade(ACCENT, opacity));
                let inner = Rectangle::new(frame.x + 8.0, frame.y + 8.0, frame.width - 16.0, frame.height - 16.0);
                draw_texture_in(d, texture, inner, fade(Color::WHITE, opacity));
            }
            Some(texture) => draw_texture_in(d, texture, frame, fade(Color::WHITE, opacity)),
            None => {
                let initials: String = self.profile.name.chars().take(1).collect();
                let center = Vector2::new(frame.x + frame.width * 0.5, frame.y + frame.height * 0.5);
                draw_badge(d, center, side * 0.4, &initials, opacity);
            }
        }
    }

    fn draw_testimonials(&self, d: &mut RaylibDrawHandle) {
        let title_y = TESTIMONIALS_TOP + 60.0 - self.scroll_y;
        draw_centered_text(d, "Testimonials", RENDER_WIDTH as f32 * 0.5, title_y, 56, TEXT);
        self.carousel
            .surface()
            .draw(d, self.carousel.handles(), self.scroll_y, &self.textures);
    }

    fn draw_skills(&self, d: &mut RaylibDrawHandle) {
        let style = self.skills_reveal.style(0);
        let top = SKILLS_TOP - self.scroll_y + style.offset_y;
        draw_centered_text(d, "Skills", RENDER_WIDTH as f32 * 0.5, top + 60.0, 56, fade(TEXT, style.opacity));

        let cells = self.skills.layout(CONTENT_X, top + SECTION_TITLE_HEIGHT, CONTENT_WIDTH);
        for (skill, cell) in self.skills.skills().iter().zip(cells) {
            if cell.y + cell.height < 0.0 || cell.y > RENDER_HEIGHT as f32 {
                continue;
            }
            d.draw_rectangle_rounded(cell, 0.1, 8, fade(SURFACE, style.opacity));
            let center_x = cell.x + cell.width * 0.5;
            let icon: String = skill.icon.chars().take(2).collect::<String>().to_uppercase();
            draw_badge(d, Vector2::new(center_x, cell.y + 44.0), 26.0, &icon, style.opacity);
            draw_centered_text(d, &skill.name, center_x, cell.y + 84.0, 24, fade(TEXT, style.opacity));
            let chars = (cell.width / (18.0 * 0.55)) as usize;
            for (line_no, line) in wrap_text(&skill.desc, chars.max(8)).iter().take(2).enumerate() {
                let y = cell.y + 118.0 + line_no as f32 * 22.0;
                draw_centered_text(d, line, center_x, y, 18, fade(MUTED, style.opacity));
            }
        }
    }

    fn draw_modal(&self, d: &mut RaylibDrawHandle) {
        if !self.modal.is_open() {
            return;
        }
        d.draw_rectangle_rec(
            Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32),
            Color::new(0, 0, 0, 210),
        );
        let image = self.modal_rect();
        if let Some(texture) = self.modal.source().and_then(|asset| self.textures.get(asset)) {
            draw_texture_in(d, texture, image, Color::WHITE);
        }
        let close = modal_close(image);
        draw_centered_text(d, "X", close.x + close.width * 0.5, close.y + 4.0, 36, TEXT);
    }
}

impl Engine for PortfolioEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        self.load_assets(rl, thread);
        info!(
            testimonials = self.carousel.len(),
            skills = self.skills.skills().len(),
            social = self.social.shown().len(),
            "page ready"
        );
        true
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        self.pointer = to_framebuffer(rl.get_mouse_position(), screen_width, screen_height);
        let page_point = Vector2::new(self.pointer.x, self.pointer.y + self.scroll_y);

        if self.state == PageState::ModalOpen {
            if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                self.modal.escape_pressed();
            }
            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                let image = self.modal_rect();
                self.modal.click(self.pointer, image, modal_close(image));
            }
            if !self.modal.is_open() {
                self.state = PageState::Browsing;
            }
            return;
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.scroll_target = (self.scroll_target - wheel * WHEEL_STEP).clamp(0.0, max_scroll(self.skills_height()));
        }

        let hover = if self.header_covers(self.pointer) { Vector2::new(-1.0, -1.0) } else { page_point };
        self.carousel.pointer_moved(hover);

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.carousel.key_pressed(NavKey::Left);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.carousel.key_pressed(NavKey::Right);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if self.carousel.is_explicitly_paused() {
                self.carousel.resume();
            } else {
                self.carousel.pause();
            }
            debug!(paused = self.carousel.is_explicitly_paused(), "carousel autoplay toggled");
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && !self.header_covers(self.pointer)
            && !self.carousel.is_empty()
            && contains(&self.carousel.handles().track, page_point)
        {
            self.carousel.touch_start(page_point.x);
            self.state = PageState::Dragging;
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if self.state == PageState::Dragging {
                self.state = PageState::Browsing;
                if let Some(swipe) = self.carousel.touch_end(page_point.x) {
                    debug!(?swipe, "carousel swiped");
                    return;
                }
            }
            self.click(rl, thread, page_point);
        }
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        // --- Update Logic ---
        if self.state != PageState::ModalOpen {
            self.scroll_y += (self.scroll_target - self.scroll_y) * (1.0 - (-SCROLL_SMOOTHING * dt).exp());
            if (self.scroll_target - self.scroll_y).abs() < 0.5 {
                self.scroll_y = self.scroll_target;
            }
        }
        self.header.on_scroll(self.scroll_y);
        self.header.update();

        self.typewriter.update(dt);
        self.carousel.update(dt);
        self.carousel.surface_mut().update(dt);
        self.social.update(dt);

        self.observe_visibility();
        self.home_reveal.update(dt);
        self.skills_reveal.update(dt);

        // --- Render the page into the fixed size framebuffer ---
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(BACKGROUND);

            self.draw_home(&mut d);
            self.draw_testimonials(&mut d);
            self.draw_skills(&mut d);
            self.draw_header(&mut d);
            self.draw_modal(&mut d);
        });

        true
    }

    fn shutdown(&mut self) {
        self.carousel.dispose();
        info!("page closed");
    }
}
