use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::camera::CameraRigOptions;

/// Simulation attached to a slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOptions {
    /// Tumbling cube demo.
    Cube {
        /// Whether the cube spins while this slide is shown.
        #[serde(default)]
        spinning: bool,
    },
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
/// One slide of the deck.
pub struct SlideOptions {
    /// Human-readable name used in logs.
    pub name: String,
    /// Camera framing for this slide. Without one the camera stays where
    /// the previous slide left it.
    pub camera: Option<CameraRigOptions>,
    /// Simulations switched on while the slide is shown.
    pub simulations: Vec<SimulationOptions>,
}
