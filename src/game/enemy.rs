//! Bouncing enemies
//!
//! Each enemy drifts with a constant velocity and bounces off the four
//! screen edges. The world scales every velocity by a shared multiplier.

use macroquad::prelude::Vec2;
use crate::config::{rgb, EnemyConfig, Palette};
use crate::render::Canvas;
use super::rng::RandomSource;
use super::Rect;

const EYE_OFFSET: f32 = 6.0;
const EYE_RADIUS: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub velocity: Vec2,
}

impl Enemy {
    pub fn new(rect: Rect, velocity: Vec2) -> Self {
        Self { rect, velocity }
    }

    /// Random whole-pixel position fully on screen, each velocity component
    /// `±(base_speed + [0, 1))` with an independent sign
    pub fn spawn(config: &EnemyConfig, screen: &Rect, rng: &mut dyn RandomSource) -> Self {
        let x = rng.int_in(screen.x.ceil() as i32, (screen.right() - config.size).floor() as i32);
        let y = rng.int_in(screen.y.ceil() as i32, (screen.bottom() - config.size).floor() as i32);
        let vx = random_component(config.base_speed, rng);
        let vy = random_component(config.base_speed, rng);
        Self::new(Rect::square(x as f32, y as f32, config.size), Vec2::new(vx, vy))
    }

    /// Advance one frame and reflect off any crossed edge
    pub fn update(&mut self, speed_multiplier: f32, screen: &Rect) {
        self.rect.x += self.velocity.x * speed_multiplier;
        self.rect.y += self.velocity.y * speed_multiplier;

        if self.rect.x < screen.x {
            self.rect.x = screen.x;
            self.velocity.x = -self.velocity.x;
        }
        if self.rect.right() > screen.right() {
            self.rect.x = screen.right() - self.rect.w;
            self.velocity.x = -self.velocity.x;
        }
        if self.rect.y < screen.y {
            self.rect.y = screen.y;
            self.velocity.y = -self.velocity.y;
        }
        if self.rect.bottom() > screen.bottom() {
            self.rect.y = screen.bottom() - self.rect.h;
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette) {
        canvas.fill_ellipse(self.rect, rgb(palette.enemy));

        let (cx, cy) = (self.rect.center_x(), self.rect.center_y());
        let eyes = rgb(palette.enemy_eyes);
        canvas.fill_circle(Vec2::new(cx - EYE_OFFSET, cy - EYE_OFFSET), EYE_RADIUS, eyes);
        canvas.fill_circle(Vec2::new(cx + EYE_OFFSET, cy - EYE_OFFSET), EYE_RADIUS, eyes);
    }
}

fn random_component(base_speed: f32, rng: &mut dyn RandomSource) -> f32 {
    // Sign first, magnitude second
    let sign = if rng.coin() { 1.0 } else { -1.0 };
    sign * (base_speed + rng.unit())
}
