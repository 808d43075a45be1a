//! A single slide: UI visibility, camera rig and simulations.

use crate::animation::fade::Fade;
use crate::camera::CameraController;
use crate::input::FrameInput;
use crate::options::{SimulationOptions, SlideOptions};
use crate::simulation::{CubeSlideController, SimulationController};

/// Opacity and input blocking of a slide's UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Whether the layer captures pointer input.
    pub blocks_input: bool,
}

impl Visibility {
    /// Fully transparent and click-through.
    pub const HIDDEN: Self = Self {
        alpha: 0.0,
        blocks_input: false,
    };
    /// Fully opaque and interactive.
    pub const SHOWN: Self = Self {
        alpha: 1.0,
        blocks_input: true,
    };
}

/// One page of the presentation.
pub struct Slide {
    name: String,
    visibility: Visibility,
    fade: Option<Fade>,
    camera_controller: Option<CameraController>,
    simulations: Vec<Box<dyn SimulationController>>,
}

impl Slide {
    /// Shown slide with no camera rig and no simulations.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::SHOWN,
            fade: None,
            camera_controller: None,
            simulations: Vec::new(),
        }
    }

    /// Build a slide from its options.
    #[must_use]
    pub fn from_options(options: &SlideOptions) -> Self {
        let mut slide = Self::new(options.name.clone());
        if let Some(rig) = &options.camera {
            slide = slide.with_camera_controller(CameraController::new(rig.clone()));
        }
        for sim in &options.simulations {
            slide = match sim {
                SimulationOptions::Cube { spinning } => {
                    slide.with_simulation(CubeSlideController::new(*spinning))
                }
            };
        }
        slide
    }

    /// Attach a camera rig.
    #[must_use]
    pub fn with_camera_controller(mut self, controller: CameraController) -> Self {
        self.camera_controller = Some(controller);
        self
    }

    /// Attach a simulation.
    #[must_use]
    pub fn with_simulation(mut self, simulation: impl SimulationController + 'static) -> Self {
        self.simulations.push(Box::new(simulation));
        self
    }

    /// Slide name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current opacity and input blocking.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether a fade is in flight (including its delay).
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Camera rig, if this slide frames the camera.
    #[must_use]
    pub fn camera_controller(&self) -> Option<&CameraController> {
        self.camera_controller.as_ref()
    }

    /// Mutable camera rig.
    pub fn camera_controller_mut(&mut self) -> Option<&mut CameraController> {
        self.camera_controller.as_mut()
    }

    /// Simulations attached to this slide.
    #[must_use]
    pub fn simulations(&self) -> &[Box<dyn SimulationController>] {
        &self.simulations
    }

    /// Mutable access to the attached simulations.
    pub fn simulations_mut(&mut self) -> &mut [Box<dyn SimulationController>] {
        &mut self.simulations
    }

    /// Jump to a visibility, cancelling any fade.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.fade = None;
        self.visibility = visibility;
    }

    /// Set input blocking immediately and fade opacity toward `target`.
    ///
    /// Replaces any fade already in flight on this slide.
    pub fn begin_fade(&mut self, target: f32, duration: f32, delay: f32) {
        self.visibility.blocks_input = target > 0.0;
        self.fade = Some(Fade::new(target, duration, delay));
    }

    /// Activate and enable every simulation.
    pub fn start_simulations(&mut self) {
        for sim in &mut self.simulations {
            sim.activate();
            sim.set_enabled(true);
        }
    }

    /// Deactivate and disable every simulation.
    pub fn stop_simulations(&mut self) {
        for sim in &mut self.simulations {
            sim.deactivate();
            sim.set_enabled(false);
        }
    }

    /// Advance the fade only.
    pub(crate) fn advance_fade(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        if let Some(step) = fade.advance(self.visibility.alpha, dt) {
            self.visibility.alpha = step.value();
            if step.is_finished() {
                self.fade = None;
            }
        }
    }

    /// Advance camera choreography and enabled simulations.
    pub(crate) fn update_content(&mut self, dt: f32, input: &FrameInput) {
        if let Some(controller) = self.camera_controller.as_mut() {
            controller.update(dt, input);
        }
        for sim in &mut self.simulations {
            if sim.is_enabled() {
                sim.update(dt);
            }
        }
    }
}

impl std::fmt::Debug for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("fading", &self.fade.is_some())
            .field("camera_controller", &self.camera_controller.is_some())
            .field("simulations", &self.simulations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraRigOptions;

    #[test]
    fn fade_out_drops_blocking_immediately() {
        let mut slide = Slide::new("a");
        slide.begin_fade(0.0, 0.5, 0.0);
        assert!(!slide.visibility().blocks_input);
        assert_eq!(slide.visibility().alpha, 1.0);

        slide.advance_fade(0.25);
        assert_eq!(slide.visibility().alpha, 0.5);
        slide.advance_fade(0.5);
        assert_eq!(slide.visibility().alpha, 0.0);
        assert!(!slide.is_fading());
    }

    #[test]
    fn new_fade_supersedes_old_one() {
        let mut slide = Slide::new("a");
        slide.set_visibility(Visibility::HIDDEN);
        slide.begin_fade(1.0, 1.0, 0.0);
        slide.advance_fade(0.5);
        slide.begin_fade(0.0, 1.0, 0.0);
        slide.advance_fade(0.5);
        // New fade starts from 0.5 and heads to 0.
        assert_eq!(slide.visibility().alpha, 0.25);
    }

    #[test]
    fn from_options_builds_rig_and_simulations() {
        let options = SlideOptions {
            name: "cube".to_owned(),
            camera: Some(CameraRigOptions::default()),
            simulations: vec![SimulationOptions::Cube { spinning: true }],
        };
        let mut slide = Slide::from_options(&options);
        assert!(slide.camera_controller().is_some());
        assert_eq!(slide.simulations().len(), 1);

        slide.start_simulations();
        assert!(slide.simulations().iter().all(|s| s.is_active() && s.is_enabled()));
        slide.stop_simulations();
        assert!(slide.simulations().iter().all(|s| !s.is_active() && !s.is_enabled()));
    }
}
