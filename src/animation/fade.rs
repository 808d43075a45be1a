//! Delayed opacity fade for a slide's UI layer.

use super::tween::{Tween, TweenStep};

/// Fade of an alpha value toward a target after an optional delay.
///
/// The start alpha is captured when the delay ends, not when the fade is
/// created, so a fade queued behind a delay picks up whatever value the
/// layer has by then.
#[derive(Debug, Clone)]
pub struct Fade {
    target: f32,
    duration: f32,
    delay_remaining: f32,
    tween: Option<Tween<f32>>,
}

impl Fade {
    /// Fade to `target` over `duration` seconds after `delay` seconds.
    #[must_use]
    pub fn new(target: f32, duration: f32, delay: f32) -> Self {
        Self {
            target: target.clamp(0.0, 1.0),
            duration: duration.max(0.0),
            delay_remaining: delay.max(0.0),
            tween: None,
        }
    }

    /// Target alpha.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the delay has elapsed and interpolation has begun.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.tween.is_some()
    }

    /// Advance by `dt` seconds given the layer's current alpha.
    ///
    /// Returns `None` while still waiting on the delay, otherwise the alpha
    /// to apply this frame.
    pub fn advance(&mut self, current: f32, dt: f32) -> Option<TweenStep<f32>> {
        if self.delay_remaining > 0.0 {
            self.delay_remaining -= dt;
            return None;
        }
        let tween = self
            .tween
            .get_or_insert_with(|| Tween::new(current, self.target, self.duration));
        Some(tween.advance(dt))
    }
}
