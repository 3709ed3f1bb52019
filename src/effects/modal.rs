use raylib::prelude::{Rectangle, Vector2};

use crate::carousel::contains;

/// Full-size viewer for the profile picture.
///
/// Transparent PNG portraits are shown as-is and never open the viewer; any other image
/// gets a square frame and opens on click.
#[derive(Debug, Clone)]
pub struct ImageModal {
    source: Option<String>,
    open: bool,
}

fn is_png(source: &str) -> bool {
    source.to_lowercase().contains(".png")
}

impl ImageModal {
    pub fn new(source: Option<String>) -> Self {
        Self { source, open: false }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether the profile picture sits in a square frame.
    pub fn is_square(&self) -> bool {
        self.source.as_deref().is_some_and(|s| !is_png(s))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is disabled while the viewer is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn image_clicked(&mut self) {
        if self.is_square() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn escape_pressed(&mut self) {
        self.close();
    }

    /// Click while open: the close button or the backdrop around the image dismiss it.
    pub fn click(&mut self, point: Vector2, image: Rectangle, close_button: Rectangle) {
        if !self.open {
            return;
        }
        if contains(&close_button, point) || !contains(&image, point) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Rectangle {
        Rectangle::new(100.0, 100.0, 400.0, 400.0)
    }

    fn close_button() -> Rectangle {
        Rectangle::new(460.0, 60.0, 32.0, 32.0)
    }

    #[test]
    fn png_never_opens() {
        let mut modal = ImageModal::new(Some("assets/img/Profile.PNG".into()));
        assert!(!modal.is_square());
        modal.image_clicked();
        assert!(!modal.is_open());
    }

    #[test]
    fn jpeg_opens_and_locks_scroll() {
        let mut modal = ImageModal::new(Some("assets/img/profile.jpg".into()));
        assert!(modal.is_square());
        modal.image_clicked();
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        modal.escape_pressed();
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn click_on_image_keeps_it_open() {
        let mut modal = ImageModal::new(Some("me.jpg".into()));
        modal.image_clicked();
        modal.click(Vector2::new(300.0, 300.0), image(), close_button());
        assert!(modal.is_open());
        modal.click(Vector2::new(20.0, 20.0), image(), close_button());
        assert!(!modal.is_open());
    }

    #[test]
    fn close_button_dismisses() {
        let mut modal = ImageModal::new(Some("me.jpg".into()));
        modal.image_clicked();
        modal.click(Vector2::new(470.0, 70.0), image(), close_button());
        assert!(!modal.is_open());
    }

    #[test]
    fn missing_image_has_no_viewer() {
        let mut modal = ImageModal::new(None);
        modal.image_clicked();
        assert!(!modal.is_open());
    }
}
