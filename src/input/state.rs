//! Input state management
//!
//! Polls macroquad's keyboard state and turns it into a [`FrameInput`].

use macroquad::prelude::*;
use crate::config::AxisConflict;
use super::{Action, FrameInput, HeldDirections};

/// Keyboard sampler for the game loop
pub struct InputState {
    /// Player speed in pixels per frame
    pub speed: f32,
    pub conflict: AxisConflict,
}

impl InputState {
    pub fn new(speed: f32, conflict: AxisConflict) -> Self {
        // Window close is reported through is_quit_requested instead of
        // ending the process behind the loop's back
        prevent_quit();
        Self { speed, conflict }
    }

    /// Read this frame's movement and restart press
    pub fn sample(&self) -> FrameInput {
        let (dx, dy) = self.held().movement(self.speed, self.conflict);
        FrameInput {
            dx,
            dy,
            restart: self.action_pressed(Action::Restart),
        }
    }

    /// Movement keys currently held
    pub fn held(&self) -> HeldDirections {
        HeldDirections {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            up: self.action_down(Action::MoveUp),
            down: self.action_down(Action::MoveDown),
        }
    }

    /// The window asked to close
    pub fn quit_requested(&self) -> bool {
        is_quit_requested()
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| is_key_down(key))
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| is_key_pressed(key))
    }
}
