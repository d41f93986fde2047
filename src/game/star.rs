//! The collectible star

use std::f32::consts::TAU;

use macroquad::prelude::Vec2;
use crate::config::{rgb, Palette, StarConfig};
use crate::render::Canvas;
use super::rng::RandomSource;
use super::Rect;

const POINTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub rect: Rect,
    outer_radius: f32,
    inner_radius: f32,
}

impl Star {
    pub fn new(config: &StarConfig, screen: &Rect, rng: &mut dyn RandomSource) -> Self {
        let pos = Self::random_position(config, screen, rng);
        Self {
            rect: Rect::square(pos.x, pos.y, config.size),
            outer_radius: config.outer_radius,
            inner_radius: config.outer_radius * config.inner_ratio,
        }
    }

    /// Whole-pixel position keeping the star `margin` away from every edge
    pub fn random_position(config: &StarConfig, screen: &Rect, rng: &mut dyn RandomSource) -> Vec2 {
        let area = screen.pad(config.margin);
        let x = rng.int_in(area.x.ceil() as i32, (area.right() - config.size).floor() as i32);
        let y = rng.int_in(area.y.ceil() as i32, (area.bottom() - config.size).floor() as i32);
        Vec2::new(x as f32, y as f32)
    }

    pub fn respawn(&mut self, config: &StarConfig, screen: &Rect, rng: &mut dyn RandomSource) {
        let pos = Self::random_position(config, screen, rng);
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    /// Polygon vertices: evenly spaced angles, alternating outer and inner radius
    pub fn outline(&self) -> [Vec2; POINTS] {
        let center = Vec2::new(self.rect.center_x(), self.rect.center_y());
        std::array::from_fn(|i| {
            let angle = i as f32 * TAU / POINTS as f32;
            let radius = if i % 2 == 0 { self.outer_radius } else { self.inner_radius };
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette) {
        canvas.fill_polygon(&self.outline(), rgb(palette.star));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::{GameRng, ScriptedRandom};

    fn screen() -> Rect {
        Rect::screen(800.0, 600.0)
    }

    #[test]
    fn test_respawn_stays_inside_margin() {
        let config = StarConfig::default();
        let mut rng = GameRng::new(1234);
        let mut star = Star::new(&config, &screen(), &mut rng);

        for _ in 0..500 {
            star.respawn(&config, &screen(), &mut rng);
            assert!(star.rect.x >= 20.0 && star.rect.x <= 800.0 - 20.0 - 12.0);
            assert!(star.rect.y >= 20.0 && star.rect.y <= 600.0 - 20.0 - 12.0);
        }
    }

    #[test]
    fn test_scripted_position() {
        let config = StarConfig::default();
        let mut rng = ScriptedRandom::new().ints([100, 250]);
        let star = Star::new(&config, &screen(), &mut rng);
        assert_eq!(star.rect, Rect::square(100.0, 250.0, 12.0));
    }

    #[test]
    fn test_extreme_scripted_values_are_clamped_to_margin() {
        let config = StarConfig::default();
        let mut rng = ScriptedRandom::new().ints([-50, 10_000]);
        let star = Star::new(&config, &screen(), &mut rng);
        assert_eq!((star.rect.x, star.rect.y), (20.0, 568.0));
    }

    #[test]
    fn test_outline_alternates_radii() {
        let config = StarConfig::default();
        let mut rng = ScriptedRandom::new().ints([100, 100]);
        let star = Star::new(&config, &screen(), &mut rng);

        let center = Vec2::new(106.0, 106.0);
        let points = star.outline();
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((p.distance(center) - expected).abs() < 0.001);
        }
        // First point sits at angle zero
        assert!((points[0].x - 116.0).abs() < 0.001);
        assert!((points[0].y - 106.0).abs() < 0.001);
    }
}
