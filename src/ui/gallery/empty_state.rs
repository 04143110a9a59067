// SPDX-License-Identifier: MPL-2.0
//! Shown when the catalog has no artworks.

use super::component::{Message, ViewEnv};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(env.i18n.tr("empty-title"))
                .size(typography::TITLE_MD)
                .color(env.colors.text_secondary),
        )
        .push(
            Text::new(env.i18n.tr("empty-body"))
                .size(typography::BODY)
                .color(env.colors.text_muted),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
