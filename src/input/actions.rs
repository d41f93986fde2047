//! Game actions and how held keys resolve into movement

use macroquad::prelude::KeyCode;
use crate::config::AxisConflict;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held - arrows / WASD)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Game over screen (pressed - Space)
    Restart,
}

impl Action {
    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::MoveUp => &[KeyCode::Up, KeyCode::W],
            Action::MoveDown => &[KeyCode::Down, KeyCode::S],
            Action::Restart => &[KeyCode::Space],
        }
    }
}

/// Which movement actions are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Resolve one axis to -speed, 0 or +speed
pub fn resolve_axis(negative: bool, positive: bool, speed: f32, conflict: AxisConflict) -> f32 {
    match (negative, positive) {
        (true, true) => match conflict {
            AxisConflict::PositiveWins => speed,
            AxisConflict::Cancel => 0.0,
        },
        (true, false) => -speed,
        (false, true) => speed,
        (false, false) => 0.0,
    }
}

impl HeldDirections {
    /// Per-frame movement delta. Axes are independent, so diagonals move
    /// `speed` along both.
    pub fn movement(&self, speed: f32, conflict: AxisConflict) -> (f32, f32) {
        (
            resolve_axis(self.left, self.right, speed, conflict),
            resolve_axis(self.up, self.down, speed, conflict),
        )
    }
}

/// Everything the world needs from the input layer for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub dx: f32,
    pub dy: f32,
    /// Restart key went down this frame
    pub restart: bool,
}

#[cfg(test)]
impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(dx: f32, dy: f32) -> Self {
        Self { dx, dy, restart: false }
    }

    pub fn restart() -> Self {
        Self { restart: true, ..Self::default() }
    }
}
