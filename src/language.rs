//! Bilingual (EN/FR) text and the header toggle that switches it.

use crate::theme::ThemeObserver;
use crate::util::color::Color;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
}

impl Language {
    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

/// A text label with a display colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Current display colour.
    pub color: Color,
}

impl Label {
    /// Label with the given text, initially black.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::BLACK,
        }
    }
}

/// Active/inactive label colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TogglePalette {
    /// Colour of the selected language label.
    pub active: Color,
    /// Colour of the other label.
    pub inactive: Color,
}

type LanguageListener = Box<dyn FnMut(Language)>;

/// Two-label EN/FR switch in the deck header.
///
/// Clicking flips the language and notifies every subscriber. Without both
/// labels the toggle logs a warning and ignores clicks.
pub struct LanguageToggle {
    label_en: Option<Label>,
    label_fr: Option<Label>,
    light: TogglePalette,
    dark: TogglePalette,
    palette: TogglePalette,
    active: Language,
    can_toggle: bool,
    listeners: Vec<LanguageListener>,
}

impl LanguageToggle {
    /// Toggle with default palettes (light: black/gray, dark: gray/black).
    #[must_use]
    pub fn new(label_en: Option<Label>, label_fr: Option<Label>) -> Self {
        let mut can_toggle = true;
        if label_en.is_none() {
            log::warn!("language toggle has no EN label; toggling disabled");
            can_toggle = false;
        }
        if label_fr.is_none() {
            log::warn!("language toggle has no FR label; toggling disabled");
            can_toggle = false;
        }
        let light = TogglePalette {
            active: Color::BLACK,
            inactive: Color::GRAY,
        };
        let mut toggle = Self {
            label_en,
            label_fr,
            light,
            dark: TogglePalette {
                active: Color::GRAY,
                inactive: Color::BLACK,
            },
            palette: light,
            active: Language::En,
            can_toggle,
            listeners: Vec::new(),
        };
        toggle.refresh_labels();
        toggle
    }

    /// Replace the per-theme palettes, recolouring the labels with the new
    /// light palette.
    #[must_use]
    pub fn with_palettes(mut self, light: TogglePalette, dark: TogglePalette) -> Self {
        self.light = light;
        self.dark = dark;
        self.palette = light;
        self.refresh_labels();
        self
    }

    /// Currently selected language.
    #[must_use]
    pub fn active_language(&self) -> Language {
        self.active
    }

    /// Whether clicks are honoured.
    #[must_use]
    pub fn can_toggle(&self) -> bool {
        self.can_toggle
    }

    /// EN label, if configured.
    #[must_use]
    pub fn label_en(&self) -> Option<&Label> {
        self.label_en.as_ref()
    }

    /// FR label, if configured.
    #[must_use]
    pub fn label_fr(&self) -> Option<&Label> {
        self.label_fr.as_ref()
    }

    /// Register a callback invoked with the new language after each toggle.
    pub fn subscribe(&mut self, listener: impl FnMut(Language) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Handle a click on the toggle.
    pub fn click(&mut self) {
        if !self.can_toggle {
            return;
        }
        self.active = self.active.toggled();
        self.refresh_labels();
        let language = self.active;
        for listener in &mut self.listeners {
            listener(language);
        }
    }

    fn refresh_labels(&mut self) {
        let (en, fr) = match self.active {
            Language::En => (self.palette.active, self.palette.inactive),
            Language::Fr => (self.palette.inactive, self.palette.active),
        };
        if let Some(label) = self.label_en.as_mut() {
            label.color = en;
        }
        if let Some(label) = self.label_fr.as_mut() {
            label.color = fr;
        }
    }
}

impl ThemeObserver for LanguageToggle {
    fn set_light_theme(&mut self) {
        self.palette = self.light;
        self.refresh_labels();
    }

    fn set_dark_theme(&mut self) {
        self.palette = self.dark;
        self.refresh_labels();
    }
}

impl std::fmt::Debug for LanguageToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageToggle")
            .field("active", &self.active)
            .field("can_toggle", &self.can_toggle)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Text shown in whichever language is active.
#[derive(Debug, Clone, PartialEq)]
pub struct BilingualText {
    en: String,
    fr: String,
    language: Language,
}

impl BilingualText {
    /// Text pair, showing English first.
    #[must_use]
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
            language: Language::En,
        }
    }

    /// Switch the displayed language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Language currently displayed.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Text currently displayed.
    #[must_use]
    pub fn displayed(&self) -> &str {
        match self.language {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        }
    }
}
