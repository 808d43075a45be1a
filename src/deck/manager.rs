//! The slide manager: authoritative slide index, fades, camera hand-off,
//! simulation fan-out and theme broadcast.

use std::cell::RefCell;
use std::rc::Rc;

use super::navigation::Navigation;
use super::slide::{Slide, Visibility};
use crate::camera::{Camera, CameraController};
use crate::error::DeckError;
use crate::input::FrameInput;
use crate::options::{DeckOptions, NavigationOptions, TransitionOptions};
use crate::theme::{Theme, ThemeObserver};
use crate::util::color::Color;

/// Shared handle to a UI element that follows the deck theme.
pub type SharedThemeObserver = Rc<RefCell<dyn ThemeObserver>>;

/// Top-level orchestrator for a slide deck.
///
/// The manager owns every slide and, while no slide's camera controller
/// holds it, the scene camera. Loading a slide releases the camera from
/// the outgoing slide before handing it to the incoming one, so at most one
/// controller holds it at any time.
pub struct SlideManager {
    slides: Vec<Slide>,
    current: usize,
    transitions: TransitionOptions,
    navigation_options: Option<NavigationOptions>,
    navigation: Option<Navigation>,
    header_visible: bool,
    parked_camera: Option<Camera>,
    theme: Option<Theme>,
    theme_observers: Vec<SharedThemeObserver>,
}

impl SlideManager {
    /// Manager over `slides` with every slide hidden and every simulation
    /// switched off. Call [`start`](Self::start) to show the first slide.
    #[must_use]
    pub fn new(
        slides: Vec<Slide>,
        start_slide: usize,
        transitions: TransitionOptions,
        camera: Camera,
    ) -> Self {
        let mut manager = Self {
            slides,
            current: start_slide,
            transitions,
            navigation_options: None,
            navigation: None,
            header_visible: true,
            parked_camera: Some(camera),
            theme: None,
            theme_observers: Vec::new(),
        };
        for slide in &mut manager.slides {
            slide.set_visibility(Visibility::HIDDEN);
            slide.stop_simulations();
        }
        manager
    }

    /// Build slides, navigation and header settings from deck options.
    #[must_use]
    pub fn from_options(options: &DeckOptions, camera: Camera) -> Self {
        let slides = options.slides.iter().map(Slide::from_options).collect();
        let mut manager =
            Self::new(slides, options.start_slide, options.transitions.clone(), camera);
        manager.header_visible = options.header.show;
        manager.navigation_options.clone_from(&options.navigation);
        manager
    }

    /// Enable navigation bubbles.
    #[must_use]
    pub fn with_navigation(mut self, options: NavigationOptions) -> Self {
        self.navigation_options = Some(options);
        self
    }

    /// Register a UI element for theme broadcasts.
    ///
    /// The element immediately receives the current theme, if one has been
    /// established.
    pub fn register_theme_observer(&mut self, observer: SharedThemeObserver) {
        if let Some(theme) = self.theme {
            observer.borrow_mut().apply_theme(theme);
        }
        self.theme_observers.push(observer);
    }

    /// Show the start slide and build navigation.
    ///
    /// # Errors
    ///
    /// [`DeckError::SlideIndexOutOfRange`] when the start index is outside
    /// a non-empty deck.
    pub fn start(&mut self) -> Result<(), DeckError> {
        if self.slides.is_empty() {
            log::warn!("deck contains no slides; nothing to show");
            return Ok(());
        }
        self.check_index(self.current)?;

        let index = self.current;
        self.slides[index].set_visibility(Visibility::SHOWN);
        self.enter_camera(index)?;
        self.slides[index].start_simulations();

        self.generate_navigation();
        Ok(())
    }

    fn generate_navigation(&mut self) {
        let Some(options) = &self.navigation_options else {
            log::warn!("no navigation configured; bubbles disabled");
            return;
        };
        let mut navigation = Navigation::new(options.clickable_bubbles);
        navigation.generate_bubbles(self.slides.len());
        navigation.set_current(self.current);
        self.navigation = Some(navigation);
    }

    /// Switch to slide `target`.
    ///
    /// The outgoing slide stops blocking input, fades out, releases the
    /// camera and stops its simulations; the incoming slide blocks input,
    /// fades in, takes the camera and starts its simulations. The index
    /// updates before either fade completes.
    ///
    /// # Errors
    ///
    /// [`DeckError::SlideIndexOutOfRange`] for an index outside the deck.
    pub fn load_slide(&mut self, target: usize) -> Result<(), DeckError> {
        if self.slides.is_empty() || target == self.current {
            return Ok(());
        }
        self.check_index(target)?;
        log::debug!(
            "loading slide {target} ('{}') from {}",
            self.slides[target].name(),
            self.current
        );

        let t = &self.transitions;
        let (fade_out_time, fade_out_delay) = (t.fade_out_time, t.fade_out_delay);
        let (fade_in_time, fade_in_delay) = (t.fade_in_time, t.fade_in_delay);

        // A start index that never validated leaves no outgoing slide.
        if let Some(outgoing) = self.slides.get_mut(self.current) {
            outgoing.begin_fade(0.0, fade_out_time, fade_out_delay);
            if let Some(camera) = outgoing
                .camera_controller_mut()
                .and_then(CameraController::release_camera)
            {
                self.parked_camera = Some(camera);
            }
            outgoing.stop_simulations();
        }

        let incoming = &mut self.slides[target];
        incoming.begin_fade(1.0, fade_in_time, fade_in_delay);
        self.current = target;
        self.enter_camera(target)?;
        self.slides[target].start_simulations();

        if let Some(navigation) = self.navigation.as_mut() {
            navigation.set_current(target);
        }
        Ok(())
    }

    /// Load the slide after the current one, if any.
    ///
    /// # Errors
    ///
    /// See [`load_slide`](Self::load_slide).
    pub fn next_slide(&mut self) -> Result<(), DeckError> {
        if self.current + 1 < self.slides.len() {
            self.load_slide(self.current + 1)?;
        }
        Ok(())
    }

    /// Load the slide before the current one, if any.
    ///
    /// # Errors
    ///
    /// See [`load_slide`](Self::load_slide).
    pub fn previous_slide(&mut self) -> Result<(), DeckError> {
        if let Some(previous) = self.current.checked_sub(1) {
            self.load_slide(previous)?;
        }
        Ok(())
    }

    /// Route a navigation bubble click.
    ///
    /// # Errors
    ///
    /// See [`load_slide`](Self::load_slide).
    pub fn handle_bubble_click(&mut self, index: usize) -> Result<(), DeckError> {
        let Some(target) = self.navigation.as_ref().and_then(|n| n.click(index)) else {
            return Ok(());
        };
        self.load_slide(target)
    }

    /// Broadcast the theme matching a background colour.
    ///
    /// White selects the light theme, black the dark one (RGB only); any
    /// other colour broadcasts nothing.
    pub fn handle_theme_change(&mut self, background: Color) {
        let Some(theme) = Theme::from_background(&background) else {
            return;
        };
        self.theme = Some(theme);
        for observer in &self.theme_observers {
            observer.borrow_mut().apply_theme(theme);
        }
    }

    /// Advance one frame.
    ///
    /// Every slide's fade advances; only the current slide's camera rig
    /// and simulations run.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        for slide in &mut self.slides {
            slide.advance_fade(dt);
        }
        if let Some(slide) = self.slides.get_mut(self.current) {
            slide.update_content(dt, input);
        }
    }

    /// Authoritative current slide index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All slides.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// One slide.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Navigation bubbles, when configured.
    #[must_use]
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// Whether the header is shown.
    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Last theme broadcast.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// The scene camera, wherever it currently lives.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.slides
            .iter()
            .find_map(|s| s.camera_controller().and_then(CameraController::camera))
            .or(self.parked_camera.as_ref())
    }

    fn check_index(&self, index: usize) -> Result<(), DeckError> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(DeckError::SlideIndexOutOfRange {
                index,
                count: self.slides.len(),
            })
        }
    }

    /// Hand the parked camera to slide `index`'s rig and start framing.
    fn enter_camera(&mut self, index: usize) -> Result<(), DeckError> {
        let Some(controller) = self.slides[index].camera_controller_mut() else {
            return Ok(());
        };
        let Some(camera) = self.parked_camera.take() else {
            return Ok(());
        };
        controller.assign_camera(camera);
        let background = controller.initialize_camera()?;
        self.handle_theme_change(background);
        Ok(())
    }
}

impl std::fmt::Debug for SlideManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideManager")
            .field("current", &self.current)
            .field("slides", &self.slides)
            .field("navigation", &self.navigation)
            .field("camera_parked", &self.parked_camera.is_some())
            .field("theme", &self.theme)
            .field("theme_observers", &self.theme_observers.len())
            .finish_non_exhaustive()
    }
}
