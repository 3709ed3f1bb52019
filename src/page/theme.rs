use raylib::prelude::*;

pub const BACKGROUND: Color = Color { r: 18, g: 19, b: 28, a: 255 };
pub const SURFACE: Color = Color { r: 32, g: 34, b: 48, a: 255 };
pub const ACCENT: Color = Color { r: 108, g: 99, b: 255, a: 255 };
pub const TEXT: Color = Color { r: 236, g: 236, b: 244, a: 255 };
pub const MUTED: Color = Color { r: 150, g: 152, b: 170, a: 255 };
pub const STAR: Color = Color { r: 255, g: 196, b: 0, a: 255 };

/// Multiplies the color's alpha by `opacity`.
pub fn fade(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

/// Approximate pixel width of `text` in the default font.
pub fn text_width(text: &str, size: i32) -> f32 {
    text.chars().count() as f32 * size as f32 * 0.55
}

pub fn draw_centered_text(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: f32, size: i32, color: Color) {
    let x = center_x - text_width(text, size) * 0.5;
    d.draw_text(text, x as i32, y as i32, size, color);
}

/// Draws a texture scaled to fill `dest`.
pub fn draw_texture_in(d: &mut RaylibDrawHandle, texture: &Texture2D, dest: Rectangle, tint: Color) {
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        tint,
    );
}

/// Circle with up to two letters, the stand-in for missing pictures.
pub fn draw_badge(d: &mut RaylibDrawHandle, center: Vector2, radius: f32, letters: &str, opacity: f32) {
    d.draw_circle_v(center, radius, fade(ACCENT, opacity));
    let size = (radius * 0.8) as i32;
    draw_centered_text(d, letters, center.x, center.y - size as f32 * 0.5, size, fade(TEXT, opacity));
}
