//! macroquad backend
//!
//! Draws straight into the current frame; macroquad presents it on
//! `next_frame().await`.

use macroquad::prelude::*;
use super::{Canvas, TextAnchor};
use crate::game::Rect;

/// Canvas that draws to the window
#[derive(Debug, Default)]
pub struct ScreenCanvas;

impl ScreenCanvas {
    pub fn new() -> Self {
        Self
    }
}

impl Canvas for ScreenCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let r = radius.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0);
        if r <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        // Cross of two rects plus a circle in each corner
        draw_rectangle(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h, color);
        draw_rectangle(rect.x, rect.y + r, rect.w, rect.h - 2.0 * r, color);
        draw_circle(rect.x + r, rect.y + r, r, color);
        draw_circle(rect.right() - r, rect.y + r, r, color);
        draw_circle(rect.x + r, rect.bottom() - r, r, color);
        draw_circle(rect.right() - r, rect.bottom() - r, r, color);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        draw_ellipse(rect.center_x(), rect.center_y(), rect.w * 0.5, rect.h * 0.5, 0.0, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        // Triangle fan around the centroid
        let centroid = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p) / points.len() as f32;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            draw_triangle(centroid, *a, b, color);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: u16, anchor: TextAnchor, color: Color) {
        let dims = measure_text(text, None, font_size, 1.0);
        // macroquad places text by its baseline
        let (x, baseline) = match anchor {
            TextAnchor::TopLeft => (pos.x, pos.y + dims.offset_y),
            TextAnchor::Center => (
                pos.x - dims.width * 0.5,
                pos.y - dims.height * 0.5 + dims.offset_y,
            ),
        };
        draw_text(text, x, baseline, font_size as f32, color);
    }
}
