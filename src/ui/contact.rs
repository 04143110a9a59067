// SPDX-License-Identifier: MPL-2.0
//! Contact screen: email address and social profiles.

use crate::app::config::SiteConfig;
use crate::i18n::fluent::I18n;
use crate::outbound;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub site: &'a SiteConfig,
}

#[derive(Debug, Clone)]
pub enum Message {
    WriteEmail,
    OpenProfile(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open this link with the platform handler.
    OpenUrl(String),
}

#[must_use]
pub fn update(message: &Message, site: &SiteConfig) -> Event {
    match message {
        Message::WriteEmail => Event::OpenUrl(outbound::mailto(site.contact_email())),
        Message::OpenProfile(url) => Event::OpenUrl(url.clone()),
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let email = ctx.site.contact_email();

    let email_block = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("contact-email-label"))
                .size(typography::CAPTION)
                .color(ctx.colors.text_muted),
        )
        .push(
            button(Text::new(email).size(typography::BODY_LG))
                .padding(0)
                .style(styles::button::link(ctx.colors, true))
                .on_press(Message::WriteEmail),
        );

    let links = ctx.site.social_links();
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr("contact-intro"))
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary),
        )
        .push(email_block);

    if !links.is_empty() {
        let profiles = links.into_iter().map(|(label, url)| {
            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary(ctx.colors))
                .on_press(Message::OpenProfile(url.to_string()))
                .into()
        });
        content = content.push(
            Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(ctx.i18n.tr("contact-follow-label"))
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_muted),
                )
                .push(Row::with_children(profiles).spacing(spacing::SM)),
        );
    }

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
    fn email_opens_mailto() {
        let site = SiteConfig {
            contact_email: Some("studio@example.com".into()),
            ..SiteConfig::default()
        };
        assert_eq!(
            update(&Message::WriteEmail, &site),
            Event::OpenUrl("mailto:studio@example.com".into())
        );
    }

    #[test]
    fn profile_link_passes_through() {
        let url = "https://instagram.com/example".to_string();
        assert_eq!(
            update(&Message::OpenProfile(url.clone()), &SiteConfig::default()),
            Event::OpenUrl(url)
        );
    }
}
