//! Game configuration
//!
//! Every tunable that used to be a module-level constant lives here. The
//! config is loaded once at startup (RON, all fields optional) and handed to
//! the [`World`](crate::game::World) by value; nothing reads it globally.

use std::fs;
use std::path::Path;

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "dotdot.ron";

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Values that would break the game invariants
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub star: StarConfig,
    pub enemy: EnemyConfig,
    pub difficulty: DifficultyConfig,
    pub palette: Palette,
    pub input: InputConfig,
}

/// Window and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width of the playfield
    pub width: f32,
    /// Logical height of the playfield
    pub height: f32,
    /// Target frame rate of the fixed-step loop
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "DotDot".to_string(),
            width: 800.0,
            height: 600.0,
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    /// Pixels per frame along each held axis
    pub speed: f32,
    /// Distance between the spawn point and the bottom edge
    pub spawn_gap: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            speed: 5.0,
            spawn_gap: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub size: f32,
    /// Inset from every screen edge the star must stay within
    pub margin: f32,
    /// Radius of the polygon points
    pub outer_radius: f32,
    /// Valley radius as a fraction of `outer_radius`
    pub inner_ratio: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            size: 12.0,
            margin: 20.0,
            outer_radius: 10.0,
            inner_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: f32,
    /// Enemy count at the start of every run
    pub initial_count: usize,
    /// Minimum speed per axis; a random 0..1 is added on top
    pub base_speed: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: 32.0,
            initial_count: 3,
            base_speed: 2.0,
        }
    }
}

/// Score milestones that ramp up the difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// A new enemy joins every `spawn_interval` points
    pub spawn_interval: u32,
    /// The speed multiplier grows every `speed_interval` points
    pub speed_interval: u32,
    pub speed_increment: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 5,
            speed_interval: 10,
            speed_increment: 0.15,
        }
    }
}

/// How two held keys on the same axis resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisConflict {
    /// Right/down is checked last and overrides left/up
    #[default]
    PositiveWins,
    /// Opposing keys cancel out
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub axis_conflict: AxisConflict,
}

/// 8-bit RGB triple as written in config files
pub type Rgb = [u8; 3];

/// Convert a config color to a renderer color
pub fn rgb(c: Rgb) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub player: Rgb,
    pub player_shine: Rgb,
    pub star: Rgb,
    pub enemy: Rgb,
    pub enemy_eyes: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [245, 245, 245],
            player: [50, 130, 255],
            player_shine: [170, 220, 255],
            star: [255, 200, 60],
            enemy: [220, 60, 60],
            enemy_eyes: [10, 10, 10],
            text: [30, 30, 30],
        }
    }
}

impl GameConfig {
    /// Check the values the gameplay invariants depend on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be a finite number, got {}", name, value)));
            }
        }

        let w = &self.window;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(invalid(format!("screen size {}x{} must be positive", w.width, w.height)));
        }
        if w.fps == 0 {
            return Err(invalid("fps must be at least 1"));
        }

        for (name, size) in [
            ("player", self.player.size),
            ("star", self.star.size),
            ("enemy", self.enemy.size),
        ] {
            if !(size > 0.0) {
                return Err(invalid(format!("{} size must be positive", name)));
            }
            if size > w.width || size > w.height {
                return Err(invalid(format!("{} size {} does not fit the screen", name, size)));
            }
        }

        let s = &self.star;
        if s.margin < 0.0 || w.width - 2.0 * s.margin < s.size || w.height - 2.0 * s.margin < s.size {
            return Err(invalid(format!(
                "star margin {} leaves no room for a {} star",
                s.margin, s.size
            )));
        }
        if self.player.spawn_gap < 0.0 || self.player.spawn_gap + self.player.size > w.height {
            return Err(invalid("player spawn gap pushes the player off screen"));
        }
        if self.player.speed < 0.0 {
            return Err(invalid("player speed must not be negative"));
        }
        if self.enemy.base_speed < 0.0 {
            return Err(invalid("enemy base speed must not be negative"));
        }

        let d = &self.difficulty;
        if d.spawn_interval == 0 || d.speed_interval == 0 {
            return Err(invalid("milestone intervals must be at least 1"));
        }
        if d.speed_increment < 0.0 {
            return Err(invalid("speed increment must not be negative"));
        }
        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f32); 12] {
        [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("player.size", self.player.size),
            ("player.speed", self.player.speed),
            ("player.spawn_gap", self.player.spawn_gap),
            ("star.size", self.star.size),
            ("star.margin", self.star.margin),
            ("star.outer_radius", self.star.outer_radius),
            ("star.inner_ratio", self.star.inner_ratio),
            ("enemy.size", self.enemy.size),
            ("enemy.base_speed", self.enemy.base_speed),
            ("difficulty.speed_increment", self.difficulty.speed_increment),
        ]
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        ron::ser::to_string_pretty(self, config).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

/// Load and validate a config from a RON file
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Parse and validate a config from a RON string
pub fn load_config_from_str(contents: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig =
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Write a config to a RON file
pub fn save_config(config: &GameConfig, path: &Path) -> Result<(), ConfigError> {
    fs::write(path, config.to_ron()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.enemy.initial_count, 3);
        assert_eq!(config.input.axis_conflict, AxisConflict::PositiveWins);
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = GameConfig::default();
        config.enemy.initial_count = 5;
        config.input.axis_conflict = AxisConflict::Cancel;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(&config, temp_file.path()).unwrap();

        let loaded = load_config(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = load_config_from_str("(enemy: (initial_count: 7))").unwrap();
        assert_eq!(config.enemy.initial_count, 7);
        assert_eq!(config.enemy.size, 32.0);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid ron data").unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("nope.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_rejects_star_margin_too_large() {
        let result = load_config_from_str("(star: (margin: 300.0))");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for text in [
            "(star: (margin: NaN))",
            "(player: (spawn_gap: NaN))",
            "(player: (speed: NaN))",
            "(enemy: (base_speed: NaN))",
            "(difficulty: (speed_increment: inf))",
            "(window: (width: inf))",
        ] {
            let result = load_config_from_str(text);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "accepted {}", text);
        }
    }

    #[test]
    fn test_rejects_negative_player_speed() {
        let mut config = GameConfig::default();
        config.player.speed = -5.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_intervals() {
        let mut config = GameConfig::default();
        config.difficulty.spawn_interval = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.window.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rgb_conversion() {
        let c = rgb([255, 0, 51]);
        assert!((c.r - 1.0).abs() < 0.001);
        assert!(c.g.abs() < 0.001);
        assert!((c.b - 0.2).abs() < 0.001);
        assert!((c.a - 1.0).abs() < 0.001);
    }
}
