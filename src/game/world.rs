//! World state and the per-frame update
//!
//! The world owns every entity, the score, the difficulty multiplier and the
//! phase of the run. One call to [`World::tick`] is one frame of gameplay.

use crate::config::GameConfig;
use crate::input::FrameInput;
use super::event::{EventQueue, GameEvent};
use super::rng::RandomSource;
use super::{Enemy, Player, Rect, Star};

/// Phase of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Frozen on the last frame until restart
    GameOver,
}

pub struct World {
    config: GameConfig,
    screen: Rect,

    pub player: Player,
    pub star: Star,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub phase: GamePhase,
    /// Applied to every enemy velocity; only grows within a run
    pub speed_multiplier: f32,

    /// Events raised since the last drain
    pub events: EventQueue<GameEvent>,
}

impl World {
    /// Start a fresh run
    pub fn new(config: GameConfig, rng: &mut dyn RandomSource) -> Self {
        let screen = Rect::screen(config.window.width, config.window.height);
        let player = Player::spawn(&config.player, &screen);
        let star = Star::new(&config.star, &screen, rng);
        let enemies = spawn_enemies(&config, &screen, rng);

        Self {
            config,
            screen,
            player,
            star,
            enemies,
            score: 0,
            phase: GamePhase::Playing,
            speed_multiplier: 1.0,
            events: EventQueue::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playfield bounds
    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Put everything back to the start of a run
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.player = Player::spawn(&self.config.player, &self.screen);
        self.star.respawn(&self.config.star, &self.screen, rng);
        self.enemies = spawn_enemies(&self.config, &self.screen, rng);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.speed_multiplier = 1.0;
    }

    /// One frame of gameplay
    ///
    /// A restart press on the game-over screen resets the run and the same
    /// frame is then played normally.
    pub fn tick(&mut self, input: FrameInput, rng: &mut dyn RandomSource) {
        if self.phase == GamePhase::GameOver {
            if !input.restart {
                return;
            }
            self.reset(rng);
            self.events.send(GameEvent::Restarted);
        }

        self.player.move_by(input.dx, input.dy, &self.screen);
        for enemy in &mut self.enemies {
            enemy.update(self.speed_multiplier, &self.screen);
        }

        if self.player.rect.intersects(&self.star.rect) {
            self.collect_star(rng);
        }

        if self.enemies.iter().any(|e| self.player.rect.intersects(&e.rect)) {
            self.phase = GamePhase::GameOver;
            self.events.send(GameEvent::PlayerCaught { score: self.score });
        }
    }

    /// Score the star, move it, and apply any milestone it reaches
    pub fn collect_star(&mut self, rng: &mut dyn RandomSource) {
        self.score += 1;
        self.events.send(GameEvent::StarCollected { score: self.score });
        self.star.respawn(&self.config.star, &self.screen, rng);

        let difficulty = &self.config.difficulty;
        if self.score % difficulty.spawn_interval == 0 {
            self.enemies.push(Enemy::spawn(&self.config.enemy, &self.screen, rng));
            self.events.send(GameEvent::EnemySpawned { count: self.enemies.len() });
        }
        if self.score % difficulty.speed_interval == 0 {
            self.speed_multiplier += difficulty.speed_increment;
            self.events.send(GameEvent::SpeedIncreased { multiplier: self.speed_multiplier });
        }
    }
}

fn spawn_enemies(config: &GameConfig, screen: &Rect, rng: &mut dyn RandomSource) -> Vec<Enemy> {
    (0..config.enemy.initial_count)
        .map(|_| Enemy::spawn(&config.enemy, screen, rng))
        .collect()
}
