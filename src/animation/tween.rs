//! Frame-driven interpolation between a start and a target value.

use glam::{Quat, Vec3};

use crate::util::color::Color;
use crate::util::easing::EasingFunction;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `target` by fraction `t`.
    #[must_use]
    fn lerp_to(&self, target: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp_to(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

impl Lerp for Quat {
    /// Normalized linear interpolation.
    fn lerp_to(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

impl Lerp for Color {
    fn lerp_to(&self, target: &Self, t: f32) -> Self {
        self.lerp(target, t)
    }
}

/// Result of advancing a tween by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep<T> {
    /// Still running; the sampled value for this frame.
    Running(T),
    /// Reached (or passed) its duration; holds the exact target.
    Finished(T),
}

impl<T: Copy> TweenStep<T> {
    /// Sampled value regardless of state.
    #[must_use]
    pub fn value(&self) -> T {
        match self {
            Self::Running(v) | Self::Finished(v) => *v,
        }
    }

    /// Whether the tween finished on this step.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// One in-flight interpolation of a single property.
///
/// Time only moves forward through [`advance`](Self::advance). On the frame
/// where elapsed time reaches the duration the target is returned exactly,
/// regardless of how far the last delta overshoots.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    start: T,
    target: T,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Linear tween over `duration` seconds.
    #[must_use]
    pub fn new(start: T, target: T, duration: f32) -> Self {
        Self::with_easing(start, target, duration, EasingFunction::Linear)
    }

    /// Tween over `duration` seconds using `easing`.
    #[must_use]
    pub fn with_easing(
        start: T,
        target: T,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            target,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Raw (un-eased) time fraction, capped at 1.
    #[must_use]
    pub fn raw_fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the duration has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Value at the current elapsed time without advancing.
    #[must_use]
    pub fn sample(&self) -> T {
        if self.is_complete() {
            return self.target;
        }
        let t = self.easing.evaluate(self.raw_fraction());
        self.start.lerp_to(&self.target, t)
    }

    /// Advance by `dt` seconds and sample.
    pub fn advance(&mut self, dt: f32) -> TweenStep<T> {
        self.elapsed += dt.max(0.0);
        if self.is_complete() {
            TweenStep::Finished(self.target)
        } else {
            TweenStep::Running(self.sample())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_finishes_on_first_step() {
        let mut tween = Tween::new(0.0_f32, 5.0, 0.0);
        assert_eq!(tween.advance(0.016), TweenStep::Finished(5.0));
    }

    #[test]
    fn overshooting_frame_lands_exactly_on_target() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert!(!tween.advance(0.25).is_finished());
        let last = tween.advance(10.0);
        assert_eq!(last, TweenStep::Finished(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn linear_midpoint() {
        let mut tween = Tween::new(1.0_f32, 0.0, 0.5);
        assert_eq!(tween.advance(0.25), TweenStep::Running(0.5));
        assert_eq!(tween.raw_fraction(), 0.5);
    }

    #[test]
    fn easing_is_applied_to_sample() {
        let mut tween = Tween::with_easing(
            0.0_f32,
            1.0,
            1.0,
            EasingFunction::SmoothStep,
        );
        let v = tween.advance(0.25).value();
        assert!((v - 0.156_25).abs() < 1e-6);
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let mut tween = Tween::new(0.0_f32, 1.0, 1.0);
        let _ = tween.advance(0.5);
        let _ = tween.advance(-0.25);
        assert_eq!(tween.elapsed(), 0.5);
    }
}
