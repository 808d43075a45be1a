use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Slide Transitions", inline)]
#[serde(default)]
/// Fade timings applied to every slide change.
pub struct TransitionOptions {
    /// Seconds for the incoming slide to reach full opacity.
    #[schemars(title = "Fade In Time", range(min = 0.0), extend("step" = 0.05))]
    pub fade_in_time: f32,
    /// Seconds before the incoming slide starts fading in.
    #[schemars(title = "Fade In Delay", range(min = 0.0), extend("step" = 0.05))]
    pub fade_in_delay: f32,
    /// Seconds for the outgoing slide to disappear.
    #[schemars(title = "Fade Out Time", range(min = 0.0), extend("step" = 0.05))]
    pub fade_out_time: f32,
    /// Seconds before the outgoing slide starts fading out.
    #[schemars(title = "Fade Out Delay", range(min = 0.0), extend("step" = 0.05))]
    pub fade_out_delay: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            fade_in_time: 0.3,
            fade_in_delay: 0.0,
            fade_out_time: 0.3,
            fade_out_delay: 0.0,
        }
    }
}
