// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header, sidebar, filter bar and filmstrip background.
pub fn panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Area behind the artwork.
pub fn stage(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.stage;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Placeholder block shown while an image loads.
pub fn skeleton(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let fill = Color {
        a: opacity::SKELETON,
        ..colors.text_muted
    };
    let text = colors.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the drawer.
pub fn scrim(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scrim = colors.scrim;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scrim)),
        ..Default::default()
    }
}

/// Side drawer (compact layout).
pub fn drawer(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = Color {
        a: opacity::SURFACE,
        ..colors.surface
    };
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Caption bar laid over the bottom of the stage.
pub fn caption_bar(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.scrim;
    let text = colors.overlay_text;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin separator line.
pub fn divider(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let line = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..colors.text_muted
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(line)),
        border: Border {
            width: border::WIDTH_SM,
            color: line,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_is_translucent() {
        let style = skeleton(&ColorScheme::light())(&Theme::Light);
        let Some(Background::Color(fill)) = style.background else {
            panic!("expected color background");
        };
        assert!((fill.a - opacity::SKELETON).abs() < f32::EPSILON);
    }

    #[test]
    fn panel_uses_surface() {
        let colors = ColorScheme::dark();
        let style = panel(&colors)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(colors.surface)));
        assert_eq!(style.text_color, Some(colors.text_primary));
    }
}
