//! Keyboard input
//!
//! Movement is polled from held keys every frame (arrows or WASD). Restart is
//! an edge-triggered key press. The window close request is the quit signal.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
