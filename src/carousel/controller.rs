use raylib::prelude::Vector2;
use tracing::debug;

use crate::carousel::frame::{contains, ControlState, Frame, Handles, SlideFrame, Surface, EMPTY_MESSAGE};
use crate::carousel::gesture::{Swipe, SwipeTracker};
use crate::carousel::timer::Countdown;
use crate::config::{CarouselConfig, Direction, Wrap};
use crate::content::SlideItem;

/// Arrow keys understood by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

/// What a click on the carousel ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Previous,
    Next,
    Indicator(usize),
    /// The placeholder's retry button was pressed; the caller should reload the items.
    Retry,
    Ignored,
}

/// Rotates through a fixed list of testimonial cards.
///
/// All timing is frame driven: the owner calls [`update`](Self::update) once per frame and
/// forwards input events. At most one autoplay countdown exists at any time; any navigation
/// replaces it with a fresh one, so a manual action is never followed by an immediate
/// automatic advance.
pub struct RotationController<S: Surface> {
    items: Vec<SlideItem>,
    current_index: usize,
    is_auto_advancing: bool,
    explicitly_paused: bool,
    hovered: bool,
    timer: Option<Countdown>,
    swipe: SwipeTracker,
    handles: Handles,
    config: CarouselConfig,
    surface: S,
}

impl<S: Surface> RotationController<S> {
    pub fn new(items: Vec<SlideItem>, handles: Handles, config: CarouselConfig, mut surface: S) -> Self {
        surface.mount(&items);
        let mut controller = Self {
            items,
            current_index: 0,
            is_auto_advancing: true,
            explicitly_paused: false,
            hovered: false,
            timer: None,
            swipe: SwipeTracker::new(config.swipe_threshold),
            handles,
            config,
            surface,
        };
        controller.render();
        controller.start_autoplay();
        debug!(items = controller.items.len(), "carousel initialized");
        controller
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    /// `None` while there is nothing to show.
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current_index)
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.is_auto_advancing
    }

    pub fn is_explicitly_paused(&self) -> bool {
        self.explicitly_paused
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Seconds until the next autoplay tick.
    pub fn time_to_next_tick(&self) -> Option<f32> {
        self.timer.map(|t| t.remaining())
    }

    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    pub fn set_handles(&mut self, handles: Handles) {
        self.handles = handles;
        self.render();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn next(&mut self) {
        let n = self.items.len();
        if n <= 1 {
            return;
        }
        self.current_index = if self.current_index < n - 1 { self.current_index + 1 } else { 0 };
        self.render();
        self.reset_autoplay();
    }

    pub fn previous(&mut self) {
        let n = self.items.len();
        if n <= 1 {
            return;
        }
        self.current_index = if self.current_index > 0 { self.current_index - 1 } else { n - 1 };
        self.render();
        self.reset_autoplay();
    }

    /// Jumps to `index`. Out-of-range targets are ignored and reported as `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring out-of-range carousel target");
            return false;
        }
        self.current_index = index;
        self.render();
        self.reset_autoplay();
        true
    }

    /// Stops automatic advancing until [`resume`](Self::resume). The countdown keeps
    /// running, its ticks just do nothing.
    pub fn pause(&mut self) {
        self.explicitly_paused = true;
        self.is_auto_advancing = false;
    }

    pub fn resume(&mut self) {
        self.explicitly_paused = false;
        self.is_auto_advancing = true;
        if self.timer.is_none() {
            self.start_autoplay();
        }
    }

    /// Advances the autoplay countdown by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return,
        };
        if !fired {
            return;
        }
        if self.is_auto_advancing {
            self.next();
        } else if let Some(timer) = self.timer.as_mut() {
            timer.restart();
        }
    }

    /// Pure view of the current state.
    pub fn frame(&self) -> Frame {
        let n = self.items.len();
        if n == 0 {
            return Frame::Placeholder { message: EMPTY_MESSAGE.to_string(), retry: true };
        }

        let index = self.current_index;
        let sign = match self.config.direction {
            Direction::Ltr => -1.0,
            Direction::Rtl => 1.0,
        };
        let circular = self.config.wrap == Wrap::Circular;

        Frame::Slides(SlideFrame {
            current: index,
            offset_x: sign * index as f32 * self.config.stride(),
            indicators: self.handles.indicators.map(|_| (0..n).map(|i| i == index).collect()),
            previous: self.handles.previous.map(|_| ControlState::from_enabled(circular || index > 0)),
            next: self.handles.next.map(|_| ControlState::from_enabled(circular || index < n - 1)),
        })
    }

    pub fn render(&mut self) {
        let frame = self.frame();
        self.surface.present(&frame);
    }

    /// Hover suppression: entering the track pauses autoplay, leaving it resumes unless
    /// the carousel was paused explicitly.
    pub fn pointer_moved(&mut self, point: Vector2) {
        let inside = contains(&self.handles.track, point);
        if inside == self.hovered {
            return;
        }
        self.hovered = inside;
        if inside {
            self.is_auto_advancing = false;
        } else if !self.explicitly_paused {
            self.is_auto_advancing = true;
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Finishes a drag and navigates if it was a swipe.
    pub fn touch_end(&mut self, x: f32) -> Option<Swipe> {
        let swipe = self.swipe.end(x)?;
        match (swipe, self.config.direction) {
            (Swipe::Leftward, Direction::Ltr) | (Swipe::Rightward, Direction::Rtl) => self.next(),
            (Swipe::Rightward, Direction::Ltr) | (Swipe::Leftward, Direction::Rtl) => self.previous(),
        }
        Some(swipe)
    }

    pub fn is_dragging(&self) -> bool {
        self.swipe.is_tracking()
    }

    pub fn key_pressed(&mut self, key: NavKey) {
        match (key, self.config.direction) {
            (NavKey::Right, Direction::Ltr) | (NavKey::Left, Direction::Rtl) => self.next(),
            (NavKey::Left, Direction::Ltr) | (NavKey::Right, Direction::Rtl) => self.previous(),
        }
    }

    pub fn click(&mut self, point: Vector2) -> ClickOutcome {
        if self.items.is_empty() {
            return if contains(&self.handles.retry_button(), point) {
                ClickOutcome::Retry
            } else {
                ClickOutcome::Ignored
            };
        }

        let Frame::Slides(frame) = self.frame() else {
            return ClickOutcome::Ignored;
        };

        if let (Some(area), Some(state)) = (self.handles.previous, frame.previous) {
            if contains(&area, point) {
                if !state.is_enabled() {
                    return ClickOutcome::Ignored;
                }
                self.previous();
                return ClickOutcome::Previous;
            }
        }
        if let (Some(area), Some(state)) = (self.handles.next, frame.next) {
            if contains(&area, point) {
                if !state.is_enabled() {
                    return ClickOutcome::Ignored;
                }
                self.next();
                return ClickOutcome::Next;
            }
        }
        if let Some(index) = self.handles.indicator_at(point, self.items.len()) {
            self.go_to(index);
            return ClickOutcome::Indicator(index);
        }
        ClickOutcome::Ignored
    }

    /// Replaces the item list and starts over from the first card.
    pub fn reload(&mut self, items: Vec<SlideItem>) {
        self.items = items;
        self.current_index = 0;
        self.timer = None;
        self.is_auto_advancing = !self.explicitly_paused && !self.hovered;
        self.surface.mount(&self.items);
        self.render();
        self.start_autoplay();
        debug!(items = self.items.len(), "carousel reloaded");
    }

    /// Cancels autoplay for good.
    pub fn dispose(&mut self) {
        self.timer = None;
        debug!("carousel disposed");
    }

    fn start_autoplay(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        self.timer = Some(Countdown::new(self.config.interval_secs()));
    }

    fn reset_autoplay(&mut self) {
        self.timer = None;
        self.start_autoplay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use raylib::prelude::Rectangle;

    #[derive(Default)]
    struct RecordingSurface {
        mounted: Vec<usize>,
        frames: Vec<Frame>,
    }

    impl Surface for RecordingSurface {
        fn mount(&mut self, items: &[SlideItem]) {
            self.mounted.push(items.len());
        }

        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    impl RecordingSurface {
        fn last(&self) -> &Frame {
            self.frames.last().unwrap()
        }

        fn last_slides(&self) -> &SlideFrame {
            match self.last() {
                Frame::Slides(frame) => frame,
                other => panic!("expected slides, got {other:?}"),
            }
        }
    }

    fn items(n: usize) -> Vec<SlideItem> {
        (0..n)
            .map(|i| SlideItem {
                name: format!("Client {i}"),
                role: None,
                message: format!("Message {i}"),
                image: None,
                signature: None,
                rating: Some(5),
                date: None,
            })
            .collect()
    }

    fn full_handles() -> Handles {
        Handles {
            track: Rectangle::new(0.0, 0.0, 1000.0, 400.0),
            previous: Some(Rectangle::new(0.0, 450.0, 40.0, 40.0)),
            next: Some(Rectangle::new(960.0, 450.0, 40.0, 40.0)),
            indicators: Some(Rectangle::new(400.0, 450.0, 200.0, 20.0)),
        }
    }

    fn controller(n: usize, config: CarouselConfig) -> RotationController<RecordingSurface> {
        RotationController::new(items(n), full_handles(), config, RecordingSurface::default())
    }

    fn clamped() -> CarouselConfig {
        CarouselConfig { wrap: Wrap::Clamped, ..CarouselConfig::default() }
    }

    #[test]
    fn three_items_start_on_first_indicator_and_wrap() {
        let mut c = controller(3, CarouselConfig::default());
        assert_eq!(c.surface().mounted, vec![3]);
        assert_eq!(c.surface().last_slides().indicators, Some(vec![true, false, false]));
        assert!(c.has_pending_timer());

        c.next();
        c.next();
        assert_eq!(c.current_index(), Some(2));
        assert_eq!(c.surface().last_slides().indicators, Some(vec![false, false, true]));
        c.next();
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn empty_list_shows_placeholder_without_timer() {
        let c = controller(0, CarouselConfig::default());
        assert_eq!(c.current_index(), None);
        assert!(!c.has_pending_timer());
        assert_eq!(
            c.surface().last(),
            &Frame::Placeholder { message: EMPTY_MESSAGE.to_string(), retry: true }
        );
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let mut c = controller(0, CarouselConfig::default());
        c.next();
        c.previous();
        assert!(!c.go_to(0));
        c.update(60.0);
        assert_eq!(c.current_index(), None);
        assert_eq!(c.surface().frames.len(), 1);
    }

    #[test]
    fn single_item_never_autoplays() {
        let mut c = controller(1, CarouselConfig::default());
        assert!(!c.has_pending_timer());
        c.next();
        c.previous();
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.surface().frames.len(), 1);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = controller(4, CarouselConfig::default());
        c.previous();
        assert_eq!(c.current_index(), Some(3));
    }

    #[test]
    fn autoplay_advances_once_per_interval() {
        let mut c = controller(3, CarouselConfig::default());
        c.update(4.5);
        assert_eq!(c.current_index(), Some(0));
        c.update(0.5);
        assert_eq!(c.current_index(), Some(1));
        c.update(4.0);
        assert_eq!(c.current_index(), Some(1));
        c.update(1.0);
        assert_eq!(c.current_index(), Some(2));
    }

    #[test]
    fn manual_navigation_postpones_autoplay() {
        let mut c = controller(5, CarouselConfig::default());
        for _ in 0..10 {
            c.update(4.0);
            c.next();
        }
        // Ten manual advances and no automatic one in between.
        assert_eq!(c.current_index(), Some(0));
        c.update(4.75);
        assert_eq!(c.current_index(), Some(0));
        c.update(0.25);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn goto_resets_timer() {
        let mut c = controller(3, CarouselConfig::default());
        c.update(4.5);
        assert!(c.go_to(2));
        assert_eq!(c.time_to_next_tick(), Some(5.0));
    }

    #[test]
    fn pause_suppresses_advance_and_resume_restores_it() {
        let mut c = controller(3, CarouselConfig::default());
        c.pause();
        c.update(5.0);
        c.update(5.0);
        assert_eq!(c.current_index(), Some(0));
        assert!(c.has_pending_timer());

        c.resume();
        c.update(5.0);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn hover_pauses_and_leaving_resumes() {
        let mut c = controller(3, CarouselConfig::default());
        c.pointer_moved(Vector2::new(500.0, 200.0));
        assert!(!c.is_auto_advancing());
        c.update(5.0);
        assert_eq!(c.current_index(), Some(0));

        c.pointer_moved(Vector2::new(500.0, 900.0));
        assert!(c.is_auto_advancing());
        c.update(5.0);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn leaving_does_not_override_explicit_pause() {
        let mut c = controller(3, CarouselConfig::default());
        c.pause();
        c.pointer_moved(Vector2::new(500.0, 200.0));
        c.pointer_moved(Vector2::new(500.0, 900.0));
        assert!(!c.is_auto_advancing());
        c.resume();
        assert!(c.is_auto_advancing());
    }

    #[test]
    fn leftward_swipe_advances_in_ltr() {
        let mut c = controller(3, CarouselConfig::default());
        c.touch_start(300.0);
        assert_eq!(c.touch_end(200.0), Some(Swipe::Leftward));
        assert_eq!(c.current_index(), Some(1));

        c.touch_start(200.0);
        assert_eq!(c.touch_end(300.0), Some(Swipe::Rightward));
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut c = controller(3, CarouselConfig::default());
        c.touch_start(300.0);
        assert_eq!(c.touch_end(250.0), None);
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn rtl_mirrors_keys_swipes_and_offset() {
        let config = CarouselConfig { direction: Direction::Rtl, ..CarouselConfig::default() };
        let mut c = controller(3, config);
        c.key_pressed(NavKey::Left);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.surface().last_slides().offset_x, 382.0);
        c.key_pressed(NavKey::Right);
        assert_eq!(c.current_index(), Some(0));

        c.touch_start(200.0);
        c.touch_end(300.0);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn ltr_keys_and_offset() {
        let mut c = controller(3, CarouselConfig::default());
        c.key_pressed(NavKey::Right);
        assert_eq!(c.surface().last_slides().offset_x, -382.0);
        c.key_pressed(NavKey::Left);
        c.key_pressed(NavKey::Left);
        assert_eq!(c.current_index(), Some(2));
    }

    #[test]
    fn circular_controls_are_never_disabled() {
        let mut c = controller(3, CarouselConfig::default());
        for _ in 0..3 {
            let frame = c.surface().last_slides();
            assert_eq!(frame.previous, Some(ControlState::Enabled));
            assert_eq!(frame.next, Some(ControlState::Enabled));
            c.next();
        }
    }

    #[test]
    fn clamped_controls_disable_at_edges() {
        let mut c = controller(3, clamped());
        let frame = c.surface().last_slides();
        assert_eq!(frame.previous, Some(ControlState::Disabled));
        assert_eq!(frame.next, Some(ControlState::Enabled));

        assert_eq!(c.click(Vector2::new(10.0, 460.0)), ClickOutcome::Ignored);
        assert_eq!(c.current_index(), Some(0));

        c.go_to(2);
        let frame = c.surface().last_slides();
        assert_eq!(frame.previous, Some(ControlState::Enabled));
        assert_eq!(frame.next, Some(ControlState::Disabled));
        assert_eq!(c.click(Vector2::new(970.0, 460.0)), ClickOutcome::Ignored);
        assert_eq!(c.current_index(), Some(2));
    }

    #[test]
    fn clamped_autoplay_still_wraps() {
        let mut c = controller(2, clamped());
        c.update(5.0);
        c.update(5.0);
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn clicks_reach_controls_and_indicators() {
        let mut c = controller(4, CarouselConfig::default());
        assert_eq!(c.click(Vector2::new(970.0, 460.0)), ClickOutcome::Next);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.click(Vector2::new(10.0, 460.0)), ClickOutcome::Previous);
        assert_eq!(c.current_index(), Some(0));
        // Four slots of 50 px starting at x = 400.
        assert_eq!(c.click(Vector2::new(555.0, 455.0)), ClickOutcome::Indicator(3));
        assert_eq!(c.current_index(), Some(3));
        assert_eq!(c.click(Vector2::new(700.0, 700.0)), ClickOutcome::Ignored);
    }

    #[test]
    fn missing_handles_are_tolerated() {
        let handles = Handles::track_only(Rectangle::new(0.0, 0.0, 1000.0, 400.0));
        let mut c =
            RotationController::new(items(3), handles, CarouselConfig::default(), RecordingSurface::default());
        let frame = c.surface().last_slides();
        assert_eq!(frame.indicators, None);
        assert_eq!(frame.previous, None);
        assert_eq!(frame.next, None);
        assert_eq!(c.click(Vector2::new(10.0, 460.0)), ClickOutcome::Ignored);
        c.next();
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn retry_button_reloads_placeholder() {
        let mut c = controller(0, CarouselConfig::default());
        let button = c.handles().retry_button();
        let outcome = c.click(Vector2::new(button.x + 1.0, button.y + 1.0));
        assert_eq!(outcome, ClickOutcome::Retry);

        c.reload(items(2));
        assert_eq!(c.surface().mounted, vec![0, 2]);
        assert_eq!(c.current_index(), Some(0));
        assert!(c.has_pending_timer());
        assert_eq!(c.surface().last_slides().indicators, Some(vec![true, false]));
    }

    #[test]
    fn dispose_cancels_timer() {
        let mut c = controller(3, CarouselConfig::default());
        c.dispose();
        assert!(!c.has_pending_timer());
        c.update(50.0);
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn every_navigation_renders() {
        let mut c = controller(3, CarouselConfig::default());
        c.next();
        c.previous();
        c.go_to(1);
        c.go_to(7);
        assert_eq!(c.surface().frames.len(), 4);
    }

    proptest! {
        #[test]
        fn n_nexts_return_to_start(n in 1usize..40) {
            let mut c = controller(n, CarouselConfig::default());
            for step in 1..=n {
                c.next();
                if n > 1 {
                    prop_assert_eq!(c.current_index(), Some(step % n));
                }
            }
            prop_assert_eq!(c.current_index(), Some(0));
        }

        #[test]
        fn goto_sets_exactly_or_does_nothing(n in 0usize..20, start in 0usize..20, target in 0usize..40) {
            let mut c = controller(n, CarouselConfig::default());
            if n > 0 {
                c.go_to(start % n);
            }
            let before = c.current_index();
            let moved = c.go_to(target);
            if target < n {
                prop_assert!(moved);
                prop_assert_eq!(c.current_index(), Some(target));
            } else {
                prop_assert!(!moved);
                prop_assert_eq!(c.current_index(), before);
            }
        }

        #[test]
        fn index_stays_in_range(n in 1usize..10, ops in prop::collection::vec(0u8..4, 0..100)) {
            let mut c = controller(n, CarouselConfig::default());
            for op in ops {
                match op {
                    0 => c.next(),
                    1 => c.previous(),
                    2 => c.update(2.5),
                    _ => { c.go_to(op as usize); }
                }
                let index = c.current_index().unwrap();
                prop_assert!(index < n);
                let active = c.surface().last_slides().indicators.clone().unwrap();
                prop_assert_eq!(active.iter().filter(|a| **a).count(), 1);
                prop_assert!(active[index]);
            }
        }
    }
}
