//! Dark/light theme model.
//!
//! The page stores the active theme in a `data-theme` attribute on the
//! document element and persists it across loads; the background renderer
//! re-reads it every frame so a toggle takes effect on the next paint.

use crate::color::{Rgba, GRID_DARK, GRID_LIGHT};

/// Key the web layer uses for `localStorage` persistence.
pub const THEME_STORAGE_KEY: &str = "mk-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a `data-theme` attribute value. Anything other than
    /// `"light"` (including a missing attribute) reads as dark.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Value written back to the `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Caption shown on the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "DARK",
            Theme::Light => "LIGHT",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn grid_color(self) -> Rgba {
        match self {
            Theme::Dark => GRID_DARK,
            Theme::Light => GRID_LIGHT,
        }
    }

    /// Inner-stop alpha of the pointer-follow radial gradient.
    pub fn pointer_glow_alpha(self) -> f32 {
        match self {
            Theme::Dark => 0.12,
            Theme::Light => 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unknown_attr_reads_as_dark() {
        assert_eq!(Theme::from_attr(None), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    }

    #[test]
    fn attr_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_attr(Some(theme.attr())), theme);
        }
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn glow_is_stronger_in_dark_mode() {
        assert!(Theme::Dark.pointer_glow_alpha() > Theme::Light.pointer_glow_alpha());
    }
}
