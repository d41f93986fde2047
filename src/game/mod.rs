//! Gameplay
//!
//! Entities, the world that owns them, and the frame renderer.
//!
//! - Player: square moved by the keyboard, clamped to the screen
//! - Star: collectible that jumps somewhere new when picked up
//! - Enemy: bouncing face; touching one ends the run
//! - World: score, difficulty and the Playing/GameOver phase

pub mod rect;
pub mod rng;
pub mod event;
pub mod player;
pub mod star;
pub mod enemy;
pub mod world;
pub mod clock;
pub mod renderer;

// Re-export main types
pub use rect::Rect;
pub use rng::GameRng;
pub use event::GameEvent;
pub use player::Player;
pub use star::Star;
pub use enemy::Enemy;
pub use world::{GamePhase, World};
pub use clock::FrameClock;
pub use renderer::draw_world;
