// SPDX-License-Identifier: MPL-2.0
//! Tooltips with inverted colors so they stand out from either theme.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Tooltip bubble: text color as background, surface color as text.
pub fn bubble(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = Color {
        a: 0.96,
        ..colors.text_primary
    };
    let text = colors.surface;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..text },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
    colors: &ColorScheme,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(bubble(colors));

    tooltip(content, tip, position).gap(spacing::XS)
}
