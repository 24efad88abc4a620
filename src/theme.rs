use std::fmt;

use ratatui::style::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Active light/dark theme of the host view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Maps a host "dark skin" flag to a display mode.
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// A value that differs between light and dark display modes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModePair<T> {
    pub light: T,
    pub dark: T,
}

impl<T: Copy> ModePair<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Picks the value for the given mode.
    #[inline]
    pub const fn get(&self, mode: DisplayMode) -> T {
        match mode {
            DisplayMode::Light => self.light,
            DisplayMode::Dark => self.dark,
        }
    }
}

/// Цвета полос для чередующегося фона строк.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowTints {
    pub even: Color,
    pub odd: Color,
}

/// Color constants used by the row resolver.
///
/// Defaults reproduce the stock hierarchy look. `label` is the host's default
/// text color; [`Color::Reset`] leaves the terminal foreground untouched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub label: Color,
    pub selected: Color,
    pub missing: Color,
    pub template_accent: ModePair<Color>,
    pub tints: ModePair<RowTints>,
}

impl Palette {
    pub const fn stock() -> Self {
        Self {
            label: Color::Reset,
            selected: Color::Rgb(255, 255, 255),
            missing: Color::Rgb(255, 140, 140),
            template_accent: ModePair::new(Color::Rgb(26, 77, 178), Color::Rgb(122, 171, 242)),
            tints: ModePair::new(
                RowTints {
                    even: Color::Rgb(194, 194, 194),
                    odd: Color::Rgb(203, 203, 203),
                },
                RowTints {
                    even: Color::Rgb(56, 56, 56),
                    odd: Color::Rgb(51, 51, 51),
                },
            ),
        }
    }

    pub const fn label(mut self, color: Color) -> Self {
        self.label = color;
        self
    }

    pub const fn selected(mut self, color: Color) -> Self {
        self.selected = color;
        self
    }

    pub const fn missing(mut self, color: Color) -> Self {
        self.missing = color;
        self
    }

    pub const fn template_accent(mut self, light: Color, dark: Color) -> Self {
        self.template_accent = ModePair::new(light, dark);
        self
    }

    pub const fn tints(mut self, light: RowTints, dark: RowTints) -> Self {
        self.tints = ModePair::new(light, dark);
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::stock()
    }
}
