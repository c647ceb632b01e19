use macroquad::color::Color;
use macroquad::math::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
}

/// Immediate-mode 2D drawing target. Coordinates are canvas pixels.
pub trait RenderSurface {
    fn clear(&mut self, region: Rect);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color);
    /// `y` is the text baseline
    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Eat,
    GameOver,
}

/// Fire-and-forget sound output
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// The "press any key" prompt shown before the first run
pub trait Overlay {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}
