//! The player square

use crate::config::{rgb, Palette, PlayerConfig};
use crate::render::Canvas;
use super::Rect;

const CORNER_RADIUS: f32 = 6.0;
const SHINE_OFFSET: f32 = 6.0;
const SHINE_SIZE: f32 = 10.0;
const SHINE_RADIUS: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self { rect: Rect::square(x, y, size) }
    }

    /// Bottom-center spawn point used at start and on every restart
    pub fn spawn(config: &PlayerConfig, screen: &Rect) -> Self {
        let x = (screen.w / 2.0).floor() - (config.size / 2.0).floor();
        let y = screen.h - config.size - config.spawn_gap;
        Self::new(x, y, config.size)
    }

    /// Move by (dx, dy), then clamp inside the screen
    pub fn move_by(&mut self, dx: f32, dy: f32, screen: &Rect) {
        self.rect.x += dx;
        self.rect.y += dy;
        self.rect.clamp_within(screen);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette) {
        canvas.fill_rounded_rect(self.rect, CORNER_RADIUS, rgb(palette.player));
        let shine = Rect::square(self.rect.x + SHINE_OFFSET, self.rect.y + SHINE_OFFSET, SHINE_SIZE);
        canvas.fill_rounded_rect(shine, SHINE_RADIUS, rgb(palette.player_shine));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingCanvas};

    fn screen() -> Rect {
        Rect::screen(800.0, 600.0)
    }

    #[test]
    fn test_spawn_position() {
        let player = Player::spawn(&PlayerConfig::default(), &screen());
        assert_eq!(player.rect, Rect::square(380.0, 540.0, 40.0));
    }

    #[test]
    fn test_move_clamps_to_screen() {
        let mut player = Player::new(380.0, 540.0, 40.0);

        player.move_by(-5000.0, 5000.0, &screen());
        assert_eq!((player.rect.x, player.rect.y), (0.0, 560.0));

        player.move_by(1.0e9, -1.0e9, &screen());
        assert_eq!((player.rect.x, player.rect.y), (760.0, 0.0));
    }

    #[test]
    fn test_clamp_invariant_holds_for_any_delta() {
        let mut player = Player::new(100.0, 100.0, 40.0);
        let deltas = [-7.5, 0.0, 3.0, 123.0, -999.0, 5.0, 760.0, -0.5];
        for &dx in &deltas {
            for &dy in deltas.iter().rev() {
                player.move_by(dx, dy, &screen());
                assert!(player.rect.x >= 0.0 && player.rect.x <= 760.0);
                assert!(player.rect.y >= 0.0 && player.rect.y <= 560.0);
            }
        }
    }

    #[test]
    fn test_draw_body_then_shine() {
        let player = Player::new(10.0, 20.0, 40.0);
        let mut canvas = RecordingCanvas::new();
        player.draw(&mut canvas, &Palette::default());

        assert_eq!(canvas.commands.len(), 2);
        assert_eq!(
            canvas.commands[1],
            DrawCommand::RoundedRect {
                rect: Rect::square(16.0, 26.0, 10.0),
                radius: 3.0,
                color: rgb([170, 220, 255]),
            }
        );
    }
}
