use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Navigation bubble settings.
pub struct NavigationOptions {
    /// Whether clicking a bubble jumps to its slide.
    #[schemars(title = "Clickable Bubbles")]
    pub clickable_bubbles: bool,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            clickable_bubbles: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Header", inline)]
#[serde(default)]
/// Deck header (title bar, language toggle).
pub struct HeaderOptions {
    /// Whether the header is shown.
    #[schemars(title = "Show Header")]
    pub show: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self { show: true }
    }
}
