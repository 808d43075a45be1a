//! Wall-clock frame timing for hosts that drive the deck from a real clock.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the deck, in seconds.
///
/// A stall (window drag, breakpoint) would otherwise finish every
/// transition in a single frame.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall-clock frame timer producing the `dt` fed to
/// [`SlideManager::update`](crate::deck::SlideManager::update).
#[derive(Debug, Clone)]
pub struct FrameTiming {
    last_frame: Instant,
    max_delta: f32,
    /// Exponential moving average of frames per second.
    smoothed_fps: f32,
    /// Weight of the newest sample (0-1).
    smoothing: f32,
}

impl FrameTiming {
    /// Timer starting now, clamping deltas to [`MAX_FRAME_DELTA`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta: MAX_FRAME_DELTA,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the delta clamp. Non-positive values disable clamping.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Mark the start of a frame and return seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps =
                self.smoothed_fps * (1.0 - self.smoothing) + instant_fps * self.smoothing;
        }
        if self.max_delta > 0.0 {
            frame_time.min(self.max_delta)
        } else {
            frame_time
        }
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frames_are_clamped() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.record(Duration::from_secs(2)), MAX_FRAME_DELTA);
        let mut unclamped = FrameTiming::new().with_max_delta(0.0);
        assert_eq!(unclamped.record(Duration::from_secs(2)), 2.0);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut timing = FrameTiming::new();
        for _ in 0..200 {
            let _ = timing.record(Duration::from_millis(20));
        }
        assert!((timing.fps() - 50.0).abs() < 0.5);
    }

    #[test]
    fn tick_is_non_negative() {
        let mut timing = FrameTiming::new();
        assert!(timing.tick() >= 0.0);
    }
}
