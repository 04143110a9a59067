// SPDX-License-Identifier: MPL-2.0
//! About screen: the artist's name and biography.

use crate::app::config::SiteConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub site: &'a SiteConfig,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenContact,
    OpenGallery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenContact,
    OpenGallery,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenContact => Event::OpenContact,
        Message::OpenGallery => Event::OpenGallery,
    }
}

/// Splits a biography into paragraphs on blank lines.
fn paragraphs(biography: &str) -> impl Iterator<Item = &str> {
    biography
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            Text::new(ctx.i18n.tr("about-title"))
                .size(typography::CAPTION)
                .color(ctx.colors.text_muted),
        )
        .push(
            Text::new(ctx.site.artist_name())
                .size(typography::TITLE_LG)
                .color(ctx.colors.text_primary),
        );

    for paragraph in paragraphs(ctx.site.biography()) {
        content = content.push(
            Text::new(paragraph)
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary),
        );
    }

    content = content.push(
        Column::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(ctx.i18n.tr("about-contact-button")))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary(ctx.colors))
                    .on_press(Message::OpenContact),
            )
            .push(
                button(Text::new(ctx.i18n.tr("about-gallery-button")).size(typography::BODY_SM))
                    .padding(0)
                    .style(styles::button::link(ctx.colors, false))
                    .on_press(Message::OpenGallery),
            ),
    );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biography_splits_on_blank_lines() {
        let bio = "First paragraph.\n\n  Second one.  \n\n\n";
        let parts: Vec<&str> = paragraphs(bio).collect();
        assert_eq!(parts, ["First paragraph.", "Second one."]);
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(&Message::OpenContact), Event::OpenContact);
        assert_eq!(update(&Message::OpenGallery), Event::OpenGallery);
    }
}
