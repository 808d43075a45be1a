//! Light/dark theme derived from a slide's background colour.

use crate::util::color::Color;

/// UI colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark text on a white background.
    Light,
    /// Light text on a black background.
    Dark,
}

impl Theme {
    /// Theme for a background colour, comparing RGB only.
    ///
    /// Only pure white and pure black select a theme; any other background
    /// leaves the current theme in place.
    #[must_use]
    pub fn from_background(color: &Color) -> Option<Self> {
        if color.rgb_eq(&Color::WHITE) {
            Some(Self::Light)
        } else if color.rgb_eq(&Color::BLACK) {
            Some(Self::Dark)
        } else {
            None
        }
    }
}

/// UI element that restyles itself when the theme changes.
pub trait ThemeObserver {
    /// Apply the light scheme.
    fn set_light_theme(&mut self);

    /// Apply the dark scheme.
    fn set_dark_theme(&mut self);

    /// Dispatch to the matching setter.
    fn apply_theme(&mut self, theme: Theme) {
        match theme {
            Theme::Light => self.set_light_theme(),
            Theme::Dark => self.set_dark_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_colors_select_themes() {
        assert_eq!(Theme::from_background(&Color::WHITE), Some(Theme::Light));
        assert_eq!(Theme::from_background(&Color::BLACK), Some(Theme::Dark));
    }

    #[test]
    fn alpha_is_ignored() {
        let clear_black = Color::rgba(0.0, 0.0, 0.0, 0.0);
        assert_eq!(Theme::from_background(&clear_black), Some(Theme::Dark));
    }

    #[test]
    fn other_colors_select_nothing() {
        assert_eq!(Theme::from_background(&Color::GRAY), None);
        assert_eq!(Theme::from_background(&Color::rgb(1.0, 1.0, 0.99)), None);
    }
}
