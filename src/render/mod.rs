//! Drawing backends
//!
//! Entities and the HUD only talk to the [`Canvas`] trait. The screen backend
//! forwards to macroquad's immediate-mode shapes; the recording backend keeps
//! a command list so draw order can be checked without a window.

mod screen;
#[cfg(test)]
mod recording;

pub use screen::ScreenCanvas;
#[cfg(test)]
pub use recording::{DrawCommand, RecordingCanvas};

use macroquad::prelude::{Color, Vec2};
use crate::game::Rect;

/// Where a text position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// (x, y) is the top-left corner of the text box
    TopLeft,
    /// (x, y) is the center of the text box
    Center,
}

/// Minimal set of primitives the game draws with
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Filled polygon. Points must be star-shaped around their centroid.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u16, anchor: TextAnchor, color: Color);
}
