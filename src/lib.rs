// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-driven slide deck runtime for interactive physics presentations.
//!
//! A deck is a sequence of slides. Each slide carries a UI layer that fades
//! in and out, an optional camera rig that frames the shared scene camera,
//! and any number of simulations that run only while the slide is current.
//!
//! # Key entry points
//!
//! - [`deck::SlideManager`] - sequences slides, hands the camera between
//!   rigs and broadcasts the light/dark theme
//! - [`camera::CameraController`] - per-slide camera moves, background
//!   colour transitions, orbit and zoom
//! - [`options::DeckOptions`] - TOML deck description (slides, rigs,
//!   fade timings, navigation)
//! - [`input::FrameInput`] - per-frame input snapshot built from
//!   [`input::InputEvent`]s
//!
//! # Frame loop
//!
//! Nothing runs on its own. The host folds its window events into a
//! [`input::FrameInput`], calls [`deck::SlideManager::update`] with the
//! frame delta from [`util::frame_timing::FrameTiming`], then clears the
//! input's per-frame edges. Every fade, camera move and colour transition
//! advances only inside that call.
//!
//! ```
//! use simdeck::camera::{Camera, CameraController};
//! use simdeck::deck::{Slide, SlideManager};
//! use simdeck::input::FrameInput;
//! use simdeck::options::{CameraRigOptions, TransitionOptions};
//!
//! let slides = vec![
//!     Slide::new("title"),
//!     Slide::new("orbit")
//!         .with_camera_controller(CameraController::new(CameraRigOptions::default())),
//! ];
//! let mut deck =
//!     SlideManager::new(slides, 0, TransitionOptions::default(), Camera::default());
//! deck.start()?;
//! deck.load_slide(1)?;
//!
//! let mut input = FrameInput::new(1280.0, 720.0);
//! deck.update(1.0 / 60.0, &input);
//! input.begin_frame();
//! assert_eq!(deck.current_index(), 1);
//! # Ok::<(), simdeck::DeckError>(())
//! ```

pub mod animation;
pub mod camera;
pub mod deck;
pub mod error;
pub mod input;
pub mod language;
pub mod options;
pub mod simulation;
pub mod theme;
pub mod util;

pub use deck::SlideManager;
pub use error::DeckError;
