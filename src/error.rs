//! Crate-level error types.

use std::fmt;

/// Errors produced by the simdeck crate.
#[derive(Debug)]
pub enum DeckError {
    /// A camera operation ran on a controller that holds no camera.
    CameraNotAssigned,
    /// A slide index outside the deck was requested.
    SlideIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides in the deck.
        count: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CameraNotAssigned => {
                write!(f, "camera controller holds no camera")
            }
            Self::SlideIndexOutOfRange { index, count } => {
                write!(f, "slide index {index} out of range for {count} slides")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
