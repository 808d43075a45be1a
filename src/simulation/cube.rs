use glam::{Quat, Vec3};

use super::{Simulation, SimulationController};

/// Spin rate in degrees per second.
pub const SPIN_DEGREES_PER_SECOND: f32 = 10.0;

/// A cube slowly tumbling about the `(1, 1, 0)` diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeSimulation {
    /// Current cube orientation.
    pub orientation: Quat,
    /// Whether the cube turns at all.
    pub spinning: bool,
    paused: bool,
}

impl CubeSimulation {
    /// Cube at rest with identity orientation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            spinning: false,
            paused: false,
        }
    }

    /// Unit spin axis.
    #[must_use]
    pub fn spin_axis() -> Vec3 {
        Vec3::new(1.0, 1.0, 0.0).normalize()
    }
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for CubeSimulation {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn step(&mut self, dt: f32) {
        if self.paused || !self.spinning {
            return;
        }
        let angle = (SPIN_DEGREES_PER_SECOND * dt).to_radians();
        self.orientation =
            (self.orientation * Quat::from_axis_angle(Self::spin_axis(), angle)).normalize();
    }
}

/// Slide handle for a [`CubeSimulation`].
///
/// Activation applies the slide's `spinning` parameter, so two slides can
/// show the same cube at rest and in motion.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeSlideController {
    simulation: CubeSimulation,
    spinning: bool,
    active: bool,
    enabled: bool,
}

impl CubeSlideController {
    /// Controller that sets `spinning` whenever its slide activates.
    #[must_use]
    pub fn new(spinning: bool) -> Self {
        Self {
            simulation: CubeSimulation::new(),
            spinning,
            active: false,
            enabled: false,
        }
    }

    /// The driven simulation.
    #[must_use]
    pub fn simulation(&self) -> &CubeSimulation {
        &self.simulation
    }

    /// Mutable access, e.g. for play/pause buttons.
    pub fn simulation_mut(&mut self) -> &mut CubeSimulation {
        &mut self.simulation
    }
}

impl SimulationController for CubeSlideController {
    fn activate(&mut self) {
        self.active = true;
        self.simulation.spinning = self.spinning;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn update(&mut self, dt: f32) {
        if self.active && self.enabled {
            self.simulation.step(dt);
        }
    }
}
