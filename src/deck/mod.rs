//! Slides and the manager that sequences them.
//!
//! A [`SlideManager`] owns every [`Slide`] in a deck and exactly one scene
//! [`Camera`](crate::camera::Camera). Navigation requests flow in through
//! [`SlideManager::load_slide`] (or bubble clicks and next/previous), and
//! each frame [`SlideManager::update`] advances fades, the current slide's
//! camera rig and its simulations.

pub mod manager;
pub mod navigation;
pub mod slide;

pub use manager::{SharedThemeObserver, SlideManager};
pub use navigation::{Bubble, Navigation};
pub use slide::{Slide, Visibility};
