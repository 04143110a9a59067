// SPDX-License-Identifier: MPL-2.0
//! Toast cards for visible notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color(colors);

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .color(accent);

        let dismiss = button(Text::new("\u{00d7}").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style(colors.text_secondary));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss);

        let surface = colors.surface;
        let text_color = colors.text_primary;
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(surface, text_color, accent))
            .into()
    }

    /// All visible toasts stacked in the bottom-right corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &I18n,
        colors: &ColorScheme,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, colors))
            .collect();

        if toasts.is_empty() {
            return Container::new(Text::new(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(surface: Color, text: Color, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text),
        ..Default::default()
    }
}

fn dismiss_button_style(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..text_color
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            })),
            button::Status::Active | button::Status::Disabled => None,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_uses_accent_border() {
        let colors = ColorScheme::dark();
        let style = toast_container_style(colors.surface, colors.text_primary, colors.success);
        assert_eq!(style.border.color, colors.success);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let style = dismiss_button_style(Color::WHITE);
        assert!(style(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(style(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
