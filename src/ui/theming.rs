// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and the mapping to an Iced [`Theme`].

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    /// Behind the artwork.
    pub stage: Color,
    /// Sidebar, header, filmstrip.
    pub surface: Color,
    /// Skeleton and selected rows.
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub accent: Color,
    pub accent_strong: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub scrim: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            stage: palette::PAPER_100,
            surface: palette::PAPER_50,
            surface_raised: palette::PAPER_200,

            text_primary: palette::INK_900,
            text_secondary: palette::INK_700,
            text_muted: palette::STONE_600,

            accent: palette::OCHRE_500,
            accent_strong: palette::OCHRE_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::INK_900
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            stage: palette::INK_900,
            surface: palette::INK_800,
            surface_raised: palette::INK_700,

            text_primary: palette::PAPER_50,
            text_secondary: palette::PAPER_200,
            text_muted: palette::STONE_400,

            accent: palette::OCHRE_300,
            accent_strong: palette::OCHRE_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the mode the user picked and the colors it stands for.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    /// Effective darkness, resolved at construction.
    pub dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    /// Iced theme built from the scheme, so stock widgets match.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let c = &self.colors;
        let name = if self.dark { "Folio Dark" } else { "Folio Light" };
        Theme::custom(
            name.to_string(),
            Palette {
                background: c.surface,
                text: c.text_primary,
                primary: c.accent_strong,
                success: c.success,
                warning: c.warning,
                danger: c.error,
            },
        )
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_stage() {
        assert!(ColorScheme::light().stage.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_stage() {
        assert!(ColorScheme::dark().stage.r < 0.2);
    }

    #[test]
    fn text_contrasts_with_surface() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!((scheme.text_primary.r - scheme.surface.r).abs() > 0.6);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the desktop; must not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn iced_theme_uses_scheme_colors() {
        let theme = AppTheme::new(ThemeMode::Dark).iced_theme();
        assert_eq!(theme.palette().background, ColorScheme::dark().surface);
        assert_eq!(theme.palette().text, ColorScheme::dark().text_primary);
    }
}
