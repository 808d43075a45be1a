//! Simulations embedded in slides.
//!
//! A [`Simulation`] is the physics toy itself; a [`SimulationController`]
//! is the slide-side handle the deck switches on and off as slides come and
//! go, applying that slide's parameters on activation.

/// Spinning-cube demo simulation.
pub mod cube;

pub use cube::{CubeSimulation, CubeSlideController};

/// A pausable physics simulation stepped once per frame.
pub trait Simulation {
    /// Whether stepping is suspended.
    fn is_paused(&self) -> bool;

    /// Suspend stepping.
    fn pause(&mut self);

    /// Resume stepping.
    fn resume(&mut self);

    /// Pause when running, resume when paused.
    fn toggle_play_pause(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Advance by `dt` seconds. Implementations ignore calls while paused.
    fn step(&mut self, dt: f32);
}

/// Slide-side switch for one simulation.
pub trait SimulationController {
    /// Bring the simulation up and apply this slide's parameters.
    fn activate(&mut self);

    /// Take the simulation down.
    fn deactivate(&mut self);

    /// Whether the simulation is up.
    fn is_active(&self) -> bool;

    /// Enable or disable per-frame updates from the deck.
    fn set_enabled(&mut self, enabled: bool);

    /// Whether the deck should call [`update`](Self::update).
    fn is_enabled(&self) -> bool;

    /// Per-frame step while active and enabled.
    fn update(&mut self, dt: f32);
}
