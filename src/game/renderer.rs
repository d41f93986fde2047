//! Frame renderer
//!
//! Draw order: background, star, enemies, player, score. The game-over
//! overlay goes on top of the frozen last frame.

use macroquad::prelude::Vec2;
use crate::config::rgb;
use crate::render::{Canvas, TextAnchor};
use super::World;

/// Score readout position (top-left of the text)
const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);
const FONT_SIZE_SCORE: u16 = 30;

const FONT_SIZE_TITLE: u16 = 72;
const FONT_SIZE_FINAL_SCORE: u16 = 36;
const FONT_SIZE_PROMPT: u16 = 28;

pub fn draw_world(world: &World, canvas: &mut dyn Canvas) {
    let palette = &world.config().palette;

    canvas.clear(rgb(palette.background));

    world.star.draw(canvas, palette);
    for enemy in &world.enemies {
        enemy.draw(canvas, palette);
    }
    world.player.draw(canvas, palette);

    canvas.draw_text(
        &format!("Score: {}", world.score),
        SCORE_POS,
        FONT_SIZE_SCORE,
        TextAnchor::TopLeft,
        rgb(palette.text),
    );

    if world.is_game_over() {
        draw_game_over(world, canvas);
    }
}

fn draw_game_over(world: &World, canvas: &mut dyn Canvas) {
    let screen = world.screen();
    let cx = screen.center_x().floor();
    let cy = (screen.h / 2.0).floor();
    let color = rgb(world.config().palette.text);

    let lines = [
        ("Game Over".to_string(), FONT_SIZE_TITLE, cy - 40.0),
        (format!("Final score: {}", world.score), FONT_SIZE_FINAL_SCORE, cy + 10.0),
        ("Press SPACE to restart".to_string(), FONT_SIZE_PROMPT, cy + 60.0),
    ];
    for (text, size, y) in &lines {
        canvas.draw_text(text, Vec2::new(cx, *y), *size, TextAnchor::Center, color);
    }
}
