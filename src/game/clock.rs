//! Frame pacing
//!
//! The loop runs one gameplay step per frame, so the frame rate is the game
//! speed. [`FrameClock::tick`] holds the thread until the frame boundary.

use macroquad::prelude::get_time;

/// Native: sleep until this close to the boundary, then spin
#[cfg(not(target_arch = "wasm32"))]
const SPIN_MARGIN: f64 = 0.002;

pub struct FrameClock {
    /// Target frame time in seconds (None = unlocked)
    target: Option<f64>,
    frame_start: f64,
    now: fn() -> f64,
}

impl FrameClock {
    /// Clock at `fps` frames per second; 0 leaves the rate unlocked
    pub fn new(fps: u32) -> Self {
        Self::with_source(fps, get_time)
    }

    /// Clock reading time from `now` (seconds)
    pub fn with_source(fps: u32, now: fn() -> f64) -> Self {
        Self {
            target: frame_time(fps),
            frame_start: now(),
            now,
        }
    }

    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Wait for the frame boundary, start the next frame, and return how long
    /// the finished frame took in seconds
    pub fn tick(&mut self) -> f64 {
        if let Some(target) = self.target {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                while (self.now)() - self.frame_start + SPIN_MARGIN < target {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while (self.now)() - self.frame_start < target {
                    std::hint::spin_loop();
                }
            }
            // WASM: just spin-wait (no thread::sleep available)
            #[cfg(target_arch = "wasm32")]
            {
                while (self.now)() - self.frame_start < target {}
            }
        }

        let now = (self.now)();
        let elapsed = now - self.frame_start;
        self.frame_start = now;
        elapsed
    }
}

/// Target frame time in seconds for a frame rate (None = unlocked)
pub fn frame_time(fps: u32) -> Option<f64> {
    if fps == 0 {
        None
    } else {
        Some(1.0 / fps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wall_clock() -> f64 {
        use std::sync::OnceLock;
        static START: OnceLock<Instant> = OnceLock::new();
        START.get_or_init(Instant::now).elapsed().as_secs_f64()
    }

    fn frozen() -> f64 {
        0.0
    }

    #[test]
    fn test_frame_time() {
        assert_eq!(frame_time(0), None);
        assert!((frame_time(60).unwrap() - 1.0 / 60.0).abs() < 1e-12);
        assert!((frame_time(30).unwrap() - 0.0333333).abs() < 1e-6);
    }

    #[test]
    fn test_target() {
        assert_eq!(FrameClock::with_source(0, frozen).target(), None);
        let target = FrameClock::with_source(60, frozen).target().unwrap();
        assert!((target - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_tick_waits_for_boundary() {
        let mut clock = FrameClock::with_source(100, wall_clock);
        let elapsed = clock.tick();
        assert!(elapsed >= 0.01);
        let elapsed = clock.tick();
        assert!(elapsed >= 0.01);
    }

    #[test]
    fn test_unlocked_tick_returns_immediately() {
        let mut clock = FrameClock::with_source(0, frozen);
        assert_eq!(clock.tick(), 0.0);
    }
}
