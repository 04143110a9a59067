// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! Each style captures the colors it needs from the active [`ColorScheme`],
//! so one function serves light and dark mode.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (inquire, retry).
pub fn primary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = colors.accent_strong;
    let hover = colors.accent;
    move |_theme: &Theme, status: button::Status| {
        let (background, elevation) = match status {
            button::Status::Hovered => (hover, shadow::MD),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..base
                },
                shadow::NONE,
            ),
            button::Status::Active | button::Status::Pressed => (base, shadow::SM),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: base,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: elevation,
            snap: true,
        }
    }
}

/// Quiet bordered button (previous / next in the sidebar).
pub fn secondary(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = colors.text_primary;
    let muted = colors.text_muted;
    let raised = colors.surface_raised;
    let accent = colors.accent;
    move |_theme: &Theme, status: button::Status| {
        let (background, border_color, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(raised)), accent, text),
            button::Status::Pressed => (Some(Background::Color(raised)), text, text),
            button::Status::Disabled => (None, muted, muted),
            button::Status::Active => (None, muted, text),
        };
        button::Style {
            background,
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Translucent round button drawn over the artwork.
pub fn overlay(alpha_normal: f32, alpha_hover: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Pill in the year filter bar and the sidebar year index.
pub fn chip(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = colors.accent_strong;
    let text = colors.text_secondary;
    let raised = colors.surface_raised;
    let muted = colors.text_muted;
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, border_color) = if active {
            (Some(Background::Color(accent)), palette::WHITE, accent)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    (Some(Background::Color(raised)), text, accent)
                }
                button::Status::Active | button::Status::Disabled => (None, text, muted),
            }
        };
        button::Style {
            background,
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Row of the grouped artwork list.
pub fn list_row(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let raised = colors.surface_raised;
    let text = colors.text_primary;
    let secondary = colors.text_secondary;
    let accent = colors.accent_strong;
    move |_theme: &Theme, status: button::Status| {
        let background = match (active, status) {
            (true, _) | (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(raised))
            }
            (false, _) => None,
        };
        let text_color = match (active, status) {
            (true, _) => accent,
            (false, button::Status::Hovered) => text,
            (false, _) => secondary,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only button (header navigation, contact links).
pub fn link(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let normal = if active {
        colors.accent_strong
    } else {
        colors.text_secondary
    };
    let hover = colors.accent;
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Active | button::Status::Disabled => normal,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Filmstrip thumbnail frame; the active one gets an accent border.
pub fn thumbnail(colors: &ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = colors.accent;
    let raised = colors.surface_raised;
    let muted = colors.text_muted;
    move |_theme: &Theme, status: button::Status| {
        let border_color = match (active, status) {
            (true, _) => accent,
            (false, button::Status::Hovered) => muted,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(raised)),
            text_color: muted,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_chip_is_filled() {
        let colors = ColorScheme::light();
        let style = chip(&colors, true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(colors.accent_strong)));
        let idle = chip(&colors, false)(&Theme::Light, button::Status::Active);
        assert!(idle.background.is_none());
    }

    #[test]
    fn thumbnail_border_marks_active() {
        let colors = ColorScheme::dark();
        let active = thumbnail(&colors, true)(&Theme::Dark, button::Status::Active);
        let idle = thumbnail(&colors, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.border.color, colors.accent);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let style = overlay(opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let Some(Background::Color(normal)) = style(&Theme::Dark, button::Status::Active).background
        else {
            panic!("expected color background");
        };
        let Some(Background::Color(hover)) = style(&Theme::Dark, button::Status::Hovered).background
        else {
            panic!("expected color background");
        };
        assert!(hover.a > normal.a);
    }
}
